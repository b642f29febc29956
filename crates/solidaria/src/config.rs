// File: src/config.rs
// Purpose: Configuration parsing from solidaria.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Site configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SiteConfig {
    #[serde(default)]
    pub org: OrgConfig,

    #[serde(default)]
    pub form: FormConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

/// Organization identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgConfig {
    #[serde(default = "default_org_name")]
    pub name: String,
}

/// Signup form behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    /// Storage key the submitted record is saved under
    #[serde(default = "default_record_key")]
    pub record_key: String,

    /// Seconds the success banner stays up before the form clears
    #[serde(default = "default_reset_delay_secs")]
    pub reset_delay_secs: u64,
}

/// Local storage behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory the filesystem backend keeps its entries in
    #[serde(default = "default_storage_dir")]
    pub dir: String,
}

// Default values
fn default_org_name() -> String {
    "ONG Solidariedade".to_string()
}

fn default_record_key() -> String {
    "cadastroONG".to_string()
}

fn default_reset_delay_secs() -> u64 {
    2
}

fn default_storage_dir() -> String {
    ".solidaria/storage".to_string()
}

// Default implementations
impl Default for OrgConfig {
    fn default() -> Self {
        Self {
            name: default_org_name(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            record_key: default_record_key(),
            reset_delay_secs: default_reset_delay_secs(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: SiteConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from the default path (./solidaria.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("solidaria.toml")
    }
}
