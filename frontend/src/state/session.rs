//! Bearer token persistence.
//!
//! Exactly one token lives under the configured storage key. Pages and flows
//! read it through [`SessionTokenStore`]; the backend behind the store is
//! `localStorage` in the browser and memory in tests.

use std::{cell::RefCell, fmt, rc::Rc};

use crate::{
    api::{ApiClient, ApiError, Reservation},
    config,
    utils::storage,
};

pub trait TokenBackend {
    fn read(&self) -> Option<String>;
    fn write(&self, token: &str) -> Result<(), ApiError>;
    fn remove(&self);
}

/// `localStorage` slot for the token. Without a fixed key the slot follows
/// the runtime config, which may load after the store is built.
pub struct LocalStorageBackend {
    key: Option<String>,
}

impl LocalStorageBackend {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
        }
    }

    pub fn configured() -> Self {
        Self { key: None }
    }

    pub fn key(&self) -> String {
        self.key.clone().unwrap_or_else(config::token_storage_key)
    }
}

impl TokenBackend for LocalStorageBackend {
    fn read(&self) -> Option<String> {
        storage::read_item(&self.key())
    }

    fn write(&self, token: &str) -> Result<(), ApiError> {
        storage::write_item(&self.key(), token)
    }

    fn remove(&self) {
        storage::remove_item(&self.key());
    }
}

#[derive(Default)]
pub struct MemoryBackend {
    token: RefCell<Option<String>>,
}

impl TokenBackend for MemoryBackend {
    fn read(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn write(&self, token: &str) -> Result<(), ApiError> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn remove(&self) {
        self.token.borrow_mut().take();
    }
}

#[derive(Clone)]
pub struct SessionTokenStore {
    backend: Rc<dyn TokenBackend>,
}

impl fmt::Debug for SessionTokenStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionTokenStore")
            .field("present", &self.is_present())
            .finish()
    }
}

/// Result of checking the stored session before an authenticated call.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCheck {
    Valid,
    /// No token, or the backend rejected it. The store has been cleared.
    LoginRequired,
    /// The probe failed for another reason; the token is kept.
    Unverified(ApiError),
}

impl SessionTokenStore {
    pub fn new(backend: Rc<dyn TokenBackend>) -> Self {
        Self { backend }
    }

    /// `localStorage` under the configured key, or memory when the browser
    /// refuses storage access.
    pub fn browser() -> Self {
        match storage::local_storage() {
            Ok(_) => Self::new(Rc::new(LocalStorageBackend::configured())),
            Err(err) => {
                log::warn!("{err}; session kept in memory only");
                Self::in_memory()
            }
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryBackend::default()))
    }

    pub fn get(&self) -> Option<String> {
        self.backend.read().filter(|token| !token.trim().is_empty())
    }

    pub fn is_present(&self) -> bool {
        self.get().is_some()
    }

    pub fn set(&self, token: &str) -> Result<(), ApiError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ApiError::auth("Token de sesión vacío"));
        }
        self.backend.write(token)
    }

    pub fn clear(&self) {
        self.backend.remove();
    }

    /// Probes `probe_path` with the stored token. Auth failures clear the
    /// store; any other failure leaves it untouched. Never navigates.
    pub async fn require_valid(&self, client: &ApiClient, probe_path: &str) -> SessionCheck {
        let Some(token) = self.get() else {
            self.clear();
            return SessionCheck::LoginRequired;
        };

        match client
            .get::<serde_json::Value>(probe_path, Some(&token))
            .await
        {
            Ok(_) => SessionCheck::Valid,
            Err(err) => self.settle(err),
        }
    }

    /// Fetches the session's reservations, settling the session the same way
    /// [`require_valid`](Self::require_valid) does on failure.
    pub async fn load_reservations(
        &self,
        client: &ApiClient,
    ) -> Result<Vec<Reservation>, SessionCheck> {
        let Some(token) = self.get() else {
            self.clear();
            return Err(SessionCheck::LoginRequired);
        };
        client
            .list_reservations(&token)
            .await
            .map_err(|err| self.settle(err))
    }

    fn settle(&self, err: ApiError) -> SessionCheck {
        if err.is_auth() {
            log::info!("stored session rejected by backend, clearing it");
            self.clear();
            SessionCheck::LoginRequired
        } else {
            log::warn!("session probe failed: {err}");
            SessionCheck::Unverified(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_store_sets_and_clears() {
        let store = SessionTokenStore::in_memory();
        assert!(!store.is_present());
        store.set(" tok-1 ").unwrap();
        assert_eq!(store.get().as_deref(), Some("tok-1"));
        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn blank_tokens_are_never_stored() {
        let store = SessionTokenStore::in_memory();
        assert!(store.set("   ").unwrap_err().is_auth());
        assert!(!store.is_present());
    }

    #[test]
    fn local_storage_key_follows_runtime_config() {
        assert_eq!(LocalStorageBackend::new("hotel-token").key(), "hotel-token");

        let backend = LocalStorageBackend::configured();
        assert_eq!(backend.key(), config::token_storage_key());
        config::apply_runtime_config(&config::RuntimeConfig {
            api_base_url: None,
            token_storage_key: Some("hospedaje_token".into()),
        });
        assert_eq!(backend.key(), "hospedaje_token");
    }

    #[test]
    fn clones_share_the_same_backend() {
        let store = SessionTokenStore::in_memory();
        let other = store.clone();
        store.set("tok").unwrap();
        assert!(other.is_present());
        assert_eq!(format!("{other:?}"), "SessionTokenStore { present: true }");
    }
}
