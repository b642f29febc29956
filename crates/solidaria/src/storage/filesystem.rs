//! Filesystem storage backend

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::storage::Storage;

/// Filesystem storage backend
///
/// Stores each key as one file under a dedicated directory, value written
/// verbatim. Persistent across instances - the native stand-in for the
/// browser's localStorage.
#[derive(Debug, Clone)]
pub struct FilesystemStorage {
    dir: PathBuf,
}

impl FilesystemStorage {
    /// Create a backend rooted at `dir`, creating the directory if needed
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).context("Failed to create storage directory")?;
        Ok(Self { dir })
    }

    /// Get the file path for a storage key
    fn key_to_path(&self, key: &str) -> PathBuf {
        // Sanitize key to make it filesystem-safe
        let safe_key = key.replace('/', "_").replace('\\', "_").replace(':', "_");
        self.dir.join(format!("{}.txt", safe_key))
    }
}

impl Storage for FilesystemStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_to_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(&path).context("Failed to read storage file")?;
        Ok(Some(value))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.key_to_path(key);
        fs::write(&path, value).context("Failed to write storage file")?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.key_to_path(key);
        if path.exists() {
            fs::remove_file(&path).context("Failed to delete storage file")?;
        }
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.key_to_path(key).exists())
    }

    fn keys(&self) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.dir).context("Failed to read storage directory")? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                keys.push(stem.to_string());
            }
        }
        Ok(keys)
    }

    fn clear(&mut self) -> Result<()> {
        for entry in fs::read_dir(&self.dir).context("Failed to read storage directory")? {
            let path = entry?.path();
            if path.is_file() {
                fs::remove_file(&path).context("Failed to delete storage file")?;
            }
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "filesystem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_filesystem_storage_basic() {
        let dir = TempDir::new().unwrap();
        let mut storage = FilesystemStorage::new(dir.path()).unwrap();

        storage.set("chave", "valor").unwrap();
        assert_eq!(storage.get("chave").unwrap().as_deref(), Some("valor"));
        assert!(storage.exists("chave").unwrap());

        storage.remove("chave").unwrap();
        assert!(!storage.exists("chave").unwrap());
        assert_eq!(storage.get("chave").unwrap(), None);
    }

    #[test]
    fn test_filesystem_storage_persists_across_instances() {
        let dir = TempDir::new().unwrap();

        {
            let mut storage = FilesystemStorage::new(dir.path()).unwrap();
            storage.set("cadastroONG", r#"{"nome":"Maria"}"#).unwrap();
        }

        let storage = FilesystemStorage::new(dir.path()).unwrap();
        assert_eq!(
            storage.get("cadastroONG").unwrap().as_deref(),
            Some(r#"{"nome":"Maria"}"#)
        );
    }

    #[test]
    fn test_filesystem_storage_sanitizes_keys() {
        let dir = TempDir::new().unwrap();
        let mut storage = FilesystemStorage::new(dir.path()).unwrap();

        storage.set("a/b:c", "valor").unwrap();
        assert_eq!(storage.get("a/b:c").unwrap().as_deref(), Some("valor"));

        // The file must live directly under the storage dir
        let keys = storage.keys().unwrap();
        assert_eq!(keys, vec!["a_b_c".to_string()]);
    }

    #[test]
    fn test_filesystem_storage_clear_and_keys() {
        let dir = TempDir::new().unwrap();
        let mut storage = FilesystemStorage::new(dir.path()).unwrap();

        storage.set("key1", "content1").unwrap();
        storage.set("key2", "content2").unwrap();

        let mut keys = storage.keys().unwrap();
        keys.sort();
        assert_eq!(keys, vec!["key1".to_string(), "key2".to_string()]);

        storage.clear().unwrap();
        assert!(storage.keys().unwrap().is_empty());
    }
}
