//! # Browser `localStorage` token storage
//!
//! [`LocalStorage`] is the [`TokenStorage`] used on the **web platform**. The token is
//! kept under a single key of `window.localStorage`, so it survives reloads and is
//! shared by every tab of the same origin.
//!
//! The storage handle is looked up on every call instead of being cached: `web_sys`
//! handles are not `Send`, and the lookup is a cheap property read.

use web_sys::Storage;

use crate::error::StorageError;
use crate::session::TokenStorage;

/// `localStorage`-backed TokenStorage for the web platform.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    key: String,
}

impl LocalStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> Result<Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Js(format!("{e:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

impl TokenStorage for LocalStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(&self.key)
            .map_err(|e| StorageError::Js(format!("{e:?}")))
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(&self.key, token)
            .map_err(|e| StorageError::Js(format!("{e:?}")))
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(&self.key)
            .map_err(|e| StorageError::Js(format!("{e:?}")))
    }
}
