//! Errors raised by token persistence backends.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend cannot be reached at all (no `window`, storage disabled, ...).
    #[error("token storage is unavailable: {0}")]
    Unavailable(String),

    /// The stored entry exists but cannot be read back as a token.
    #[error("stored token is corrupt: {0}")]
    Corrupt(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Error reported by the browser storage API.
    #[error("browser storage error: {0}")]
    Js(String),
}
