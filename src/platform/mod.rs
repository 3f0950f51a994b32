// src/platform/mod.rs - Key-value storage backends per target

use std::sync::Arc;

use crate::config::{StorageBackend, StorageConfig};

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub mod storage;

pub use storage::{DynStorage, MemoryStorage, StorageArc, StorageProvider};

/// Name of the platform this build targets
pub fn platform_name() -> &'static str {
    if cfg!(target_arch = "wasm32") {
        "web"
    } else if cfg!(target_os = "windows") {
        "windows"
    } else if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(target_os = "linux") {
        "linux"
    } else {
        "unknown"
    }
}

/// Picks the configured backend, falling back to [`MemoryStorage`] when the
/// persistent one cannot be opened on this target.
pub fn create_storage(config: &StorageConfig) -> StorageArc {
    match config.backend {
        StorageBackend::Memory => Arc::new(MemoryStorage::new()),
        StorageBackend::Auto => persistent_storage(config),
        StorageBackend::File => {
            if cfg!(target_arch = "wasm32") {
                tracing::warn!("File storage is not available in the browser, using memory");
                Arc::new(MemoryStorage::new())
            } else {
                persistent_storage(config)
            }
        }
        StorageBackend::LocalStorage => {
            if cfg!(target_arch = "wasm32") {
                persistent_storage(config)
            } else {
                tracing::warn!("localStorage only exists in the browser, using memory");
                Arc::new(MemoryStorage::new())
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn persistent_storage(config: &StorageConfig) -> StorageArc {
    match native::FileStorage::new(config.data_dir.as_deref()) {
        Ok(storage) => {
            tracing::debug!("Using file storage at {}", storage.path().display());
            Arc::new(storage)
        }
        Err(e) => {
            tracing::warn!("File storage unavailable, session will not persist: {}", e);
            Arc::new(MemoryStorage::new())
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn persistent_storage(_config: &StorageConfig) -> StorageArc {
    match web::WebStorage::new() {
        Ok(storage) => Arc::new(storage),
        Err(e) => {
            tracing::warn!("localStorage unavailable, session will not persist: {}", e);
            Arc::new(MemoryStorage::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_platform_name_matches_target() {
        let name = platform_name();
        assert!(["web", "windows", "macos", "linux", "unknown"].contains(&name));
        if cfg!(target_os = "linux") {
            assert_eq!(name, "linux");
        }
    }

    #[test]
    fn test_memory_backend() {
        let config = StorageConfig {
            backend: StorageBackend::Memory,
            ..StorageConfig::default()
        };
        assert_eq!(create_storage(&config).backend_name(), "memory");
    }

    #[test]
    fn test_file_backend_with_data_dir() {
        let dir = TempDir::new().unwrap();
        let config = StorageConfig {
            backend: StorageBackend::File,
            data_dir: Some(dir.path().to_path_buf()),
            ..StorageConfig::default()
        };

        let storage = create_storage(&config);
        assert_eq!(storage.backend_name(), "file");
        storage.set("reon_auth", "true").unwrap();
        assert!(dir.path().join("reon_auth.json").exists());
    }

    #[test]
    fn test_unopenable_file_backend_degrades_to_memory() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not_a_dir");
        std::fs::write(&blocker, "x").unwrap();

        let config = StorageConfig {
            backend: StorageBackend::File,
            data_dir: Some(blocker.join("storage")),
            ..StorageConfig::default()
        };
        assert_eq!(create_storage(&config).backend_name(), "memory");
    }

    #[test]
    fn test_local_storage_on_native_degrades() {
        let config = StorageConfig {
            backend: StorageBackend::LocalStorage,
            ..StorageConfig::default()
        };
        assert_eq!(create_storage(&config).backend_name(), "memory");
    }
}
