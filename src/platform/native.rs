// src/platform/native.rs - File-backed storage for the desktop build

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result, StorageOperation};
use crate::platform::storage::{StorageBounds, StorageProvider};

/// One JSON document per key under `<data_dir>/reon/storage`
#[derive(Debug, Clone)]
pub struct FileStorage {
    storage_path: PathBuf,
}

impl FileStorage {
    /// Opens (and creates) the storage directory. `None` uses the platform
    /// data directory.
    pub fn new(data_dir: Option<&Path>) -> Result<Self> {
        let storage_path = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => default_storage_dir(),
        };

        fs::create_dir_all(&storage_path).map_err(|e| {
            Error::storage(
                None,
                StorageOperation::Open,
                format!(
                    "Failed to create storage directory {}: {}",
                    storage_path.display(),
                    e
                ),
            )
        })?;

        Ok(Self { storage_path })
    }

    pub fn path(&self) -> &Path {
        &self.storage_path
    }

    fn key_to_path(&self, key: &str) -> PathBuf {
        let safe_key = key.replace(['/', '\\', ':', '*', '?', '"', '<', '>', '|', '.'], "_");
        self.storage_path.join(format!("{}.json", safe_key))
    }
}

pub fn default_storage_dir() -> PathBuf {
    dirs::data_dir()
        .or_else(|| std::env::current_dir().ok().map(|dir| dir.join("data")))
        .unwrap_or_else(|| PathBuf::from("data"))
        .join("reon")
        .join("storage")
}

impl StorageBounds for FileStorage {}

impl StorageProvider for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.key_to_path(key)) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::storage(
                Some(key),
                StorageOperation::Read,
                format!("Failed to read key {}: {}", key, e),
            )),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::write(self.key_to_path(key), value).map_err(|e| {
            Error::storage(
                Some(key),
                StorageOperation::Write,
                format!("Failed to write key {}: {}", key, e),
            )
        })
    }

    fn delete(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.key_to_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::storage(
                Some(key),
                StorageOperation::Delete,
                format!("Failed to delete key {}: {}", key, e),
            )),
        }
    }

    fn list_keys(&self, prefix: &str) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.storage_path).map_err(|e| {
            Error::storage(
                None,
                StorageOperation::List,
                format!("Failed to list storage directory: {}", e),
            )
        })?;

        let mut keys: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let path = entry.path();
                if path.extension()? != "json" {
                    return None;
                }
                path.file_stem()?.to_str().map(str::to_string)
            })
            .filter(|key| key.starts_with(prefix))
            .collect();

        keys.sort();
        Ok(keys)
    }

    fn clear(&self) -> Result<()> {
        for key in self.list_keys("")? {
            self.delete(&key).map_err(|e| {
                Error::storage(Some(&key), StorageOperation::Clear, e.message.clone())
            })?;
        }
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_storage_round_trip() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(Some(dir.path())).unwrap();

        assert!(storage.get("reon_user").unwrap().is_none());

        storage.set("reon_user", r#"{"id":"usr_001"}"#).unwrap();
        storage.set("reon_auth", "true").unwrap();

        assert_eq!(
            storage.get("reon_user").unwrap().as_deref(),
            Some(r#"{"id":"usr_001"}"#)
        );
        assert_eq!(storage.list_keys("reon_").unwrap(), vec!["reon_auth", "reon_user"]);

        // a second handle on the same directory sees the same data
        let reopened = FileStorage::new(Some(dir.path())).unwrap();
        assert_eq!(reopened.get("reon_auth").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_file_storage_delete_and_clear() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(Some(dir.path())).unwrap();

        storage.set("reon_auth", "true").unwrap();
        storage.delete("reon_auth").unwrap();
        storage.delete("reon_auth").unwrap();
        assert!(storage.get("reon_auth").unwrap().is_none());

        storage.set("a", "1").unwrap();
        storage.set("b", "2").unwrap();
        storage.clear().unwrap();
        assert!(storage.list_keys("").unwrap().is_empty());
    }

    #[test]
    fn test_key_sanitization() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(Some(dir.path())).unwrap();

        storage.set("../escape", "x").unwrap();
        assert!(storage.path().join("___escape.json").exists());
    }
}
