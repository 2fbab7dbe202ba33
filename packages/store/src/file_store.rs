//! # Filesystem-backed token storage
//!
//! [`FileStore`] is the [`TokenStorage`] used by native builds. The token lives in a
//! single file named after the configured storage key:
//!
//! ```text
//! <base_dir>/
//! └── <storage_key>      # the raw token, UTF-8, no trailing newline
//! ```
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base, e.g.
//! `~/.local/share/evaaz/` on Linux.

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::StorageError;
use crate::session::TokenStorage;

/// Filesystem-backed TokenStorage for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
    key: String,
}

impl FileStore {
    pub fn new(base: PathBuf, key: impl Into<String>) -> Self {
        Self {
            base,
            key: key.into(),
        }
    }

    fn token_path(&self) -> PathBuf {
        self.base.join(&self.key)
    }
}

impl TokenStorage for FileStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match std::fs::read(self.token_path()) {
            Ok(raw) => {
                let token = String::from_utf8(raw)
                    .map_err(|e| StorageError::Corrupt(e.to_string()))?;
                Ok(Some(token.trim().to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(self.token_path(), token)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        match std::fs::remove_file(self.token_path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
