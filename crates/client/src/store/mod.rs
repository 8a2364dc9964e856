//! Session token storage.
//!
//! The gateway never reads a global: it is handed a [`TokenStore`] at
//! construction and consults it on every request. A store holds at most
//! one token.
//!
//! - [`MemoryTokenStore`] keeps the token for the life of the process
//! - [`FileTokenStore`] persists it on disk between runs

mod file;

use std::sync::RwLock;

use secrecy::SecretString;
use thiserror::Error;

pub use file::{FileTokenStore, TOKEN_KEY};

/// Errors that can occur when reading or writing a token store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem access failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted state is not valid JSON.
    #[error("Invalid token file: {0}")]
    Format(#[from] serde_json::Error),

    /// A thread panicked while holding the store lock.
    #[error("Token store lock poisoned")]
    Poisoned,
}

/// Holder of the current session's bearer token.
pub trait TokenStore: Send + Sync + std::fmt::Debug {
    /// The current token, if any.
    ///
    /// # Errors
    ///
    /// Returns error if the backing storage cannot be read.
    fn load(&self) -> Result<Option<SecretString>, StoreError>;

    /// Replace the current token.
    ///
    /// # Errors
    ///
    /// Returns error if the backing storage cannot be written.
    fn save(&self, token: &str) -> Result<(), StoreError>;

    /// Forget the current token. Clearing an empty store succeeds.
    ///
    /// # Errors
    ///
    /// Returns error if the backing storage cannot be written.
    fn clear(&self) -> Result<(), StoreError>;
}

/// In-process token store.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<SecretString>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that starts out holding `token`.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RwLock::new(Some(SecretString::from(token))),
        }
    }
}

impl std::fmt::Debug for MemoryTokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let has_token = self.token.read().map(|t| t.is_some()).unwrap_or(false);
        f.debug_struct("MemoryTokenStore")
            .field("has_token", &has_token)
            .finish()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<SecretString>, StoreError> {
        Ok(self.token.read().map_err(|_| StoreError::Poisoned)?.clone())
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        *self.token.write().map_err(|_| StoreError::Poisoned)? = Some(SecretString::from(token));
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.token.write().map_err(|_| StoreError::Poisoned)? = None;
        Ok(())
    }
}
