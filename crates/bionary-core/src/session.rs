//! Client-local session token storage

use crate::error::SessionError;
use parking_lot::Mutex;

/// Key the bearer token is stored under, in every backend.
pub const TOKEN_KEY: &str = "token";

/// Persistent home of the bearer token.
///
/// Implementations are called from a single UI thread, one operation at a
/// time, so they need no coordination beyond what their backend provides.
pub trait TokenStore {
    /// Stored token, if any. Read failures are reported as "no token".
    fn load(&self) -> Option<String>;

    /// Persist a freshly issued token, replacing any previous one.
    fn save(&self, token: &str) -> Result<(), SessionError>;

    /// Remove the token. Removing an absent token succeeds.
    fn clear(&self) -> Result<(), SessionError>;

    /// Stored token, treating an empty string as absent.
    fn current_token(&self) -> Option<String> {
        self.load().filter(|t| !t.is_empty())
    }

    fn is_signed_in(&self) -> bool {
        self.current_token().is_some()
    }
}

impl<S: TokenStore + ?Sized> TokenStore for &S {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn save(&self, token: &str) -> Result<(), SessionError> {
        (**self).save(token)
    }

    fn clear(&self) -> Result<(), SessionError> {
        (**self).clear()
    }
}

/// In-memory store, for tests and embedders that manage persistence themselves
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().clone()
    }

    fn save(&self, token: &str) -> Result<(), SessionError> {
        *self.token.lock() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self.token.lock() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_save_load_clear() {
        let store = MemoryTokenStore::new();
        assert!(!store.is_signed_in());

        store.save("abc").unwrap();
        assert_eq!(store.load().as_deref(), Some("abc"));
        assert!(store.is_signed_in());

        store.clear().unwrap();
        assert_eq!(store.load(), None);
        store.clear().unwrap();
    }

    #[test]
    fn empty_token_counts_as_signed_out() {
        let store = MemoryTokenStore::with_token("");
        assert_eq!(store.load().as_deref(), Some(""));
        assert_eq!(store.current_token(), None);
        assert!(!store.is_signed_in());
    }

    #[test]
    fn references_are_stores_too() {
        fn sign_in(store: impl TokenStore) {
            store.save("via-ref").unwrap();
        }
        let store = MemoryTokenStore::new();
        sign_in(&store);
        assert_eq!(store.current_token().as_deref(), Some("via-ref"));
    }
}
