//! Local storage backends for the site
//!
//! Models the browser's localStorage contract: synchronous string keys to
//! string values, last write wins. The signup record and the accessibility
//! preferences are the only writers.

use anyhow::Result;

#[cfg(feature = "memory")]
pub mod memory;

#[cfg(feature = "filesystem")]
pub mod filesystem;

/// Trait for local storage backends
pub trait Storage {
    /// Get a stored value by key
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a key
    fn remove(&mut self, key: &str) -> Result<()>;

    /// Check if a key exists
    fn exists(&self, key: &str) -> Result<bool>;

    /// Get all stored keys
    fn keys(&self) -> Result<Vec<String>>;

    /// Clear the whole store
    fn clear(&mut self) -> Result<()>;

    /// Get storage backend name
    fn name(&self) -> &'static str;
}
