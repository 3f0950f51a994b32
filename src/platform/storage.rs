// src/platform/storage.rs

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::Result;

#[cfg(not(target_arch = "wasm32"))]
pub type DynStorage = dyn StorageProvider + Send + Sync;

#[cfg(target_arch = "wasm32")]
pub type DynStorage = dyn StorageProvider + Sync;

pub type StorageArc = Arc<DynStorage>;

/// Synchronous string key-value store holding JSON documents
pub trait StorageProvider: StorageBounds {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn delete(&self, key: &str) -> Result<()>;
    fn list_keys(&self, prefix: &str) -> Result<Vec<String>>;
    fn clear(&self) -> Result<()>;

    /// Short backend name for logs and status output
    fn backend_name(&self) -> &'static str;
}

#[cfg(not(target_arch = "wasm32"))]
pub trait StorageBounds: Send + Sync {}

#[cfg(target_arch = "wasm32")]
pub trait StorageBounds: Sync {}

/// Process-local storage; also the fallback when a persistent backend fails
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl StorageBounds for MemoryStorage {}

impl StorageProvider for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.entries.write().remove(key);
        Ok(())
    }

    fn list_keys(&self, prefix: &str) -> Result<Vec<String>> {
        Ok(self
            .entries
            .read()
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect())
    }

    fn clear(&self) -> Result<()> {
        self.entries.write().clear();
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_operations() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());

        storage.set("reon_auth", "true").unwrap();
        storage.set("reon_user", "{}").unwrap();
        storage.set("other", "1").unwrap();

        assert_eq!(storage.get("reon_auth").unwrap().as_deref(), Some("true"));
        assert_eq!(storage.list_keys("reon_").unwrap(), vec!["reon_auth", "reon_user"]);

        storage.delete("reon_auth").unwrap();
        assert!(storage.get("reon_auth").unwrap().is_none());
        // deleting twice is fine
        storage.delete("reon_auth").unwrap();

        storage.clear().unwrap();
        assert_eq!(storage.len(), 0);
    }
}
