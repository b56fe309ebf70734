//! Credential storage trait and in-memory implementation.

use std::sync::RwLock;

use crate::Result;

/// Durable storage for the bearer token.
///
/// The store holds at most one token. It is the single source of truth for
/// whether a session can be resumed after a restart: the session store
/// writes it on login and clears it on logout, and the HTTP client reads it
/// on every outgoing request, so a token written mid-session is picked up
/// by the next request without rebuilding anything.
///
/// Operations are synchronous; implementations are expected to be cheap
/// (a small file or an in-memory slot).
pub trait CredentialStore: Send + Sync {
    /// Read the stored token, if any.
    fn load(&self) -> Result<Option<String>>;

    /// Persist a token, replacing any previous value.
    fn save(&self, token: &str) -> Result<()>;

    /// Remove the stored token. Clearing an empty store is not an error.
    fn clear(&self) -> Result<()>;
}

/// Credential store backed by process memory.
///
/// Nothing survives the process; useful for tests and for sessions that
/// should intentionally not persist.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: RwLock<Option<String>>,
}

impl MemoryCredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a token, as if a previous run had
    /// persisted one.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.token.read().unwrap().clone())
    }

    fn save(&self, token: &str) -> Result<()> {
        *self.token.write().unwrap() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.write().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_token() {
        let store = MemoryCredentialStore::new();
        assert_eq!(store.load().unwrap(), None);

        store.save("tok-1").unwrap();
        assert_eq!(store.load().unwrap(), Some("tok-1".to_string()));

        store.save("tok-2").unwrap();
        assert_eq!(store.load().unwrap(), Some("tok-2".to_string()));
    }

    #[test]
    fn clearing_an_empty_store_is_ok() {
        let store = MemoryCredentialStore::new();
        store.clear().unwrap();
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn with_token_seeds_the_store() {
        let store = MemoryCredentialStore::with_token("seeded");
        assert_eq!(store.load().unwrap(), Some("seeded".to_string()));
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
