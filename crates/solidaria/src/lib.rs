// Solidaria - site core for the ONG Solidariedade web app
// Fixed-page navigation, the volunteer/donor signup flow and accessibility
// preferences, all behind host traits so any document layer can drive it

pub mod accessibility;
pub mod app;
pub mod config;
pub mod pages;
pub mod registration;
pub mod storage;

// Re-export the engine crates for hosts that only depend on this one
pub use solidaria_forms as forms;
pub use solidaria_router as router;

// Re-export the core types
pub use accessibility::{DocumentAttrs, FontSize, Preferences};
pub use app::Site;
pub use config::SiteConfig;
pub use registration::{Alert, FormHost, RegistrationForm};
pub use storage::Storage;

#[cfg(feature = "memory")]
pub use storage::memory::MemoryStorage;

#[cfg(feature = "filesystem")]
pub use storage::filesystem::FilesystemStorage;

// Re-export commonly used types from dependencies
pub use maud::{html, Markup};
