//! Session context for the signed-in administrator.
//!
//! DESIGN
//! ======
//! The credential lives behind a [`TokenStore`] and is handed to the HTTP
//! client and the route guard through a cloned [`SessionContext`] instead of
//! being read from ambient global state. `MemoryTokenStore` backs tests and
//! short-lived processes; `FileTokenStore` persists the credential under the
//! `token` key of a local storage file.
//!
//! An empty string is never a credential: it reads back as absent.

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

mod storage;

pub use storage::FileTokenStore;

use std::fmt;
use std::sync::{Arc, RwLock};

/// Storage key and request header name for the credential.
pub const TOKEN_KEY: &str = "token";

/// Errors produced by token stores.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage io failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage file is not a JSON object: {0}")]
    Json(#[from] serde_json::Error),

    #[error("storage lock poisoned")]
    Poisoned,
}

/// Backend holding at most one credential.
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<String>;

    /// Replace the stored credential.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot persist the value.
    fn set(&self, token: &str) -> Result<(), StoreError>;

    /// Remove the stored credential. Clearing an empty store is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot persist the removal.
    fn clear(&self) -> Result<(), StoreError>;
}

/// Process-local store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: RwLock::new(Some(token.into())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }

    fn set(&self, token: &str) -> Result<(), StoreError> {
        let mut guard = self.token.write().map_err(|_| StoreError::Poisoned)?;
        *guard = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut guard = self.token.write().map_err(|_| StoreError::Poisoned)?;
        *guard = None;
        Ok(())
    }
}

/// Whether a credential is present right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Authenticated,
    Anonymous,
}

/// Shared handle to the credential store. Clones share the same store.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn TokenStore>,
}

impl SessionContext {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self { store: Arc::new(store) }
    }

    /// Anonymous session backed by memory.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryTokenStore::new())
    }

    /// The current credential, if any.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.store.get().filter(|token| !token.is_empty())
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.token().is_some() { SessionState::Authenticated } else { SessionState::Anonymous }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state() == SessionState::Authenticated
    }

    /// Store a freshly issued credential.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the credential cannot be stored.
    pub fn set_token(&self, token: &str) -> Result<(), StoreError> {
        self.store.set(token)
    }

    /// Drop the credential (logout or authentication failure).
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the removal cannot be persisted.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.clear()
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext").field("state", &self.state()).finish()
    }
}
