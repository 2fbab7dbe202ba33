//! # Session store: the single authentication token of the client
//!
//! [`SessionStore`] owns the in-memory copy of the session token together with the
//! [`TokenStorage`] backend that persists it across reloads. There is exactly one
//! session per running client; it is created once at start-up, handed to every
//! consumer through context, and only ever written through [`SessionStore::login`]
//! and [`SessionStore::logout`].
//!
//! ## Lifecycle
//!
//! | Phase | `loading` | `token` |
//! |-------|-----------|---------|
//! | Constructed | `true` | `None` |
//! | After [`hydrate`](SessionStore::hydrate) | `false` | whatever storage held |
//! | After [`login`](SessionStore::login) | `false` | `Some(token)` |
//! | After [`logout`](SessionStore::logout) | `false` | `None` |
//!
//! Authorization decisions must not be taken while `loading` is `true`; see
//! [`crate::guard`].
//!
//! ## Persistence
//!
//! Writes go to storage first and to memory second. A failed write leaves the
//! session untouched and is reported to the caller, so the in-memory token is never
//! different from the persisted one. Read failures during hydration are treated as
//! "no token" and never abort start-up.

use crate::error::StorageError;

/// Durable storage for the session token.
pub trait TokenStorage {
    /// Read the persisted token, `Ok(None)` when nothing is stored.
    fn load(&self) -> Result<Option<String>, StorageError>;
    /// Persist `token`, replacing any previous value.
    fn save(&self, token: &str) -> Result<(), StorageError>;
    /// Remove the persisted token. Removing an absent token is not an error.
    fn clear(&self) -> Result<(), StorageError>;
}

/// In-memory session state backed by a [`TokenStorage`].
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    token: Option<String>,
    loading: bool,
}

impl<S: TokenStorage> SessionStore<S> {
    /// Create a session that has not been hydrated yet.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            token: None,
            loading: true,
        }
    }

    /// Load the token persisted by a previous run and leave the loading phase.
    ///
    /// Calling this again after hydration has finished is a no-op.
    pub fn hydrate(&mut self) {
        if !self.loading {
            return;
        }
        self.token = match self.storage.load() {
            Ok(token) => token.filter(|t| !t.trim().is_empty()),
            Err(e) => {
                tracing::warn!("Discarding unreadable session token: {e}");
                if let Err(e) = self.storage.clear() {
                    tracing::warn!("Failed to clear unreadable session token: {e}");
                }
                None
            }
        };
        self.loading = false;
        tracing::info!(authenticated = self.token.is_some(), "Session hydrated");
    }

    /// Store `token` durably and in memory.
    ///
    /// Blank tokens are refused with [`StorageError::Corrupt`].
    pub fn login(&mut self, token: &str) -> Result<(), StorageError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(StorageError::Corrupt("empty token".to_string()));
        }
        self.storage.save(token)?;
        self.token = Some(token.to_string());
        self.loading = false;
        tracing::info!("Session started");
        Ok(())
    }

    /// Forget the token in memory and in durable storage.
    ///
    /// The in-memory token is always dropped; a storage failure is logged.
    pub fn logout(&mut self) {
        self.token = None;
        self.loading = false;
        if let Err(e) = self.storage.clear() {
            tracing::warn!("Failed to clear persisted session token: {e}");
        }
        tracing::info!("Session ended");
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S> PartialEq for SessionStore<S> {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token && self.loading == other.loading
    }
}
