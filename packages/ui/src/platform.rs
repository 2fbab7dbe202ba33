//! Platform-appropriate token storage.
//!
//! - **Web** (WASM + `web` feature): browser `localStorage` via [`store::LocalStorage`]
//! - **Native**: a file under the platform data directory via [`store::FileStore`]
//! - **WASM without `web`**: in-memory only, the session does not survive a reload

use store::config::SessionConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStorage = store::LocalStorage;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStorage = store::FileStore;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStorage = store::MemoryStore;

/// Create the storage every session reader and writer shares.
pub fn make_storage(config: &SessionConfig) -> PlatformStorage {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorage::new(config.storage_key.clone())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("evaaz");
        store::FileStore::new(base, config.storage_key.clone())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        let _ = config;
        store::MemoryStore::new()
    }
}
