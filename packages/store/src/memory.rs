use std::sync::{Arc, Mutex};

use crate::error::StorageError;
use crate::session::TokenStorage;

/// In-memory TokenStorage for testing and as a fallback when nothing durable exists.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `token`, as if persisted by an earlier run.
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Arc::new(Mutex::new(Some(token.to_string()))),
        }
    }

    fn slot(&self) -> Result<std::sync::MutexGuard<'_, Option<String>>, StorageError> {
        self.token
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))
    }
}

impl TokenStorage for MemoryStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.slot()?.clone())
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        *self.slot()? = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.slot()? = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_the_token() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.save("abc").unwrap();
        assert_eq!(other.load().unwrap(), Some("abc".to_string()));
        other.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_clear_absent_token() {
        let store = MemoryStore::new();
        assert!(store.clear().is_ok());
    }
}
