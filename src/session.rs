//! Session store: the bearer credential consulted before every outbound call.
//!
//! A [`Session`] is an explicit handle handed to the client builder. The login
//! flow writes it with [`Session::set_token`]; the HTTP client clears it when a
//! call is rejected as unauthorized. Nothing else mutates it.

use crate::{Error, ErrorContext, Result};
use keyring::Entry;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::warn;

/// Fixed key under which the credential is persisted.
pub const TOKEN_KEY: &str = "auth_token";

/// Keyring service name used by [`KeyringTokenStore`].
pub const KEYRING_SERVICE: &str = "cyber-ia";

/// Persistence for the bearer credential.
pub trait TokenStore: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&self, key: &str, token: &str) -> Result<()>;
    fn delete(&self, key: &str) -> Result<()>;
}

/// Process-local store. The default.
#[derive(Default)]
pub struct MemoryTokenStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(key: &str, token: impl Into<String>) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.write() {
            entries.insert(key.to_string(), token.into());
        }
        store
    }
}

fn poisoned(key: &str) -> Error {
    Error::token_store_with_context(
        "token store lock poisoned",
        ErrorContext::for_store("memory", key),
    )
}

impl TokenStore for MemoryTokenStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().map_err(|_| poisoned(key))?;
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, token: &str) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| poisoned(key))?;
        entries.insert(key.to_string(), token.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| poisoned(key))?;
        entries.remove(key);
        Ok(())
    }
}

/// Store backed by the OS keyring.
pub struct KeyringTokenStore {
    service: String,
}

impl KeyringTokenStore {
    pub fn new() -> Self {
        Self {
            service: KEYRING_SERVICE.to_string(),
        }
    }

    pub fn with_service(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(&self, key: &str) -> Result<Entry> {
        Entry::new(&self.service, key).map_err(|e| keyring_error("open", key, e))
    }
}

impl Default for KeyringTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

fn keyring_error(op: &str, key: &str, e: keyring::Error) -> Error {
    Error::token_store_with_context(
        format!("keyring {} failed: {}", op, e),
        ErrorContext::for_store("keyring", key),
    )
}

impl TokenStore for KeyringTokenStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        match self.entry(key)?.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(keyring_error("read", key, e)),
        }
    }

    fn save(&self, key: &str, token: &str) -> Result<()> {
        self.entry(key)?
            .set_password(token)
            .map_err(|e| keyring_error("write", key, e))
    }

    fn delete(&self, key: &str) -> Result<()> {
        match self.entry(key)?.delete_password() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(keyring_error("delete", key, e)),
        }
    }
}

/// Shared handle to the optional bearer credential.
///
/// Cloning shares the same underlying state.
#[derive(Clone)]
pub struct Session {
    token: Arc<RwLock<Option<String>>>,
    store: Arc<dyn TokenStore>,
}

impl Session {
    /// Empty, unauthenticated session backed by a [`MemoryTokenStore`].
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryTokenStore::new()))
    }

    /// Empty session persisting to `store`. Does not read the store.
    pub fn with_store(store: Arc<dyn TokenStore>) -> Self {
        Self {
            token: Arc::new(RwLock::new(None)),
            store,
        }
    }

    /// Session initialised from whatever `store` holds under [`TOKEN_KEY`].
    pub fn restore(store: Arc<dyn TokenStore>) -> Result<Self> {
        let token = store.load(TOKEN_KEY)?.filter(|t| !t.is_empty());
        Ok(Self {
            token: Arc::new(RwLock::new(token)),
            store,
        })
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Stores a credential obtained by the login flow.
    pub fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        if let Err(e) = self.store.save(TOKEN_KEY, &token) {
            warn!(error = %e, "failed to persist session token");
        }
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token);
        }
    }

    /// Drops the credential, in memory and in the store.
    pub fn clear(&self) {
        if let Ok(mut slot) = self.token.write() {
            *slot = None;
        }
        if let Err(e) = self.store.delete(TOKEN_KEY) {
            warn!(error = %e, "failed to delete persisted session token");
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
