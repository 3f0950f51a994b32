// src/platform/web.rs - Browser localStorage backend

use web_sys::Storage;

use crate::error::{Error, Result, StorageOperation};
use crate::platform::storage::{StorageBounds, StorageProvider};

#[derive(Debug, Default)]
pub struct WebStorage;

impl WebStorage {
    /// Fails when the browser has localStorage disabled
    pub fn new() -> Result<Self> {
        let storage = Self;
        storage.get_storage(StorageOperation::Open)?;
        Ok(storage)
    }

    fn get_storage(&self, operation: StorageOperation) -> Result<Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| Error::storage(None, operation, "localStorage not available"))
    }
}

impl StorageBounds for WebStorage {}

impl StorageProvider for WebStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.get_storage(StorageOperation::Read)?
            .get_item(key)
            .map_err(|e| {
                Error::storage(
                    Some(key),
                    StorageOperation::Read,
                    format!("Failed to get item: {:?}", e),
                )
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.get_storage(StorageOperation::Write)?
            .set_item(key, value)
            .map_err(|e| {
                Error::storage(
                    Some(key),
                    StorageOperation::Write,
                    format!("Failed to set item: {:?}", e),
                )
            })
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.get_storage(StorageOperation::Delete)?
            .remove_item(key)
            .map_err(|e| {
                Error::storage(
                    Some(key),
                    StorageOperation::Delete,
                    format!("Failed to remove item: {:?}", e),
                )
            })
    }

    fn list_keys(&self, prefix: &str) -> Result<Vec<String>> {
        let storage = self.get_storage(StorageOperation::List)?;
        let length = storage.length().map_err(|e| {
            Error::storage(
                None,
                StorageOperation::List,
                format!("Failed to get storage length: {:?}", e),
            )
        })?;

        let mut keys = Vec::new();
        for i in 0..length {
            if let Ok(Some(key)) = storage.key(i) {
                if key.starts_with(prefix) {
                    keys.push(key);
                }
            }
        }

        Ok(keys)
    }

    fn clear(&self) -> Result<()> {
        self.get_storage(StorageOperation::Clear)?
            .clear()
            .map_err(|e| {
                Error::storage(
                    None,
                    StorageOperation::Clear,
                    format!("Failed to clear storage: {:?}", e),
                )
            })
    }

    fn backend_name(&self) -> &'static str {
        "local_storage"
    }
}
