//! Durable session storage over the two-entry localStorage layout.
//!
//! The layout is two independent string entries: `"token"` (the raw bearer
//! string) and `"user"` (the JSON-serialized profile). A partial or corrupt
//! layout is never half-trusted: `get` reports it as no session at all.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

use crate::net::types::User;

/// Storage key for the bearer token entry.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the serialized profile entry.
pub const USER_KEY: &str = "user";

/// A session could not be serialized or written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StoreError;

/// Durable proof of authentication: bearer token plus cached profile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Capability over persistent session storage.
pub trait SessionStore {
    /// Read the persisted session. Returns `None` unless both entries
    /// exist and the user entry parses.
    fn get(&self) -> Option<Session>;

    /// Persist the session. Both entries are written together; a failure
    /// leaves no partial layout behind.
    ///
    /// # Errors
    ///
    /// [`StoreError`] when serialization or the storage backend fails.
    fn set(&self, session: &Session) -> Result<(), StoreError>;

    /// Remove both entries. Idempotent.
    fn clear(&self);
}

/// Build a session from the two raw entries, treating any gap or parse
/// failure as absence.
fn session_from_entries(token: Option<String>, user_json: Option<String>) -> Option<Session> {
    let token = token?;
    let user: User = serde_json::from_str(&user_json?).ok()?;
    Some(Session { token, user })
}

/// `SessionStore` backed by browser localStorage.
///
/// Inert outside the browser: reads are absent and writes fail, which is
/// the correct degradation for server rendering.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    #[cfg(feature = "hydrate")]
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for LocalStore {
    fn get(&self) -> Option<Session> {
        #[cfg(feature = "hydrate")]
        {
            let storage = Self::storage()?;
            let token = storage.get_item(TOKEN_KEY).ok().flatten();
            let user_json = storage.get_item(USER_KEY).ok().flatten();
            session_from_entries(token, user_json)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set(&self, session: &Session) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            // Serialize before touching storage so a serialization failure
            // commits nothing.
            let user_json = serde_json::to_string(&session.user).map_err(|_| StoreError)?;
            let storage = Self::storage().ok_or(StoreError)?;
            storage
                .set_item(TOKEN_KEY, &session.token)
                .map_err(|_| StoreError)?;
            if storage.set_item(USER_KEY, &user_json).is_err() {
                // Never leave a token without its profile entry.
                let _ = storage.remove_item(TOKEN_KEY);
                return Err(StoreError);
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
            Err(StoreError)
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = Self::storage() {
                let _ = storage.remove_item(TOKEN_KEY);
                let _ = storage.remove_item(USER_KEY);
            }
        }
    }
}

/// In-memory `SessionStore` mirroring the two-entry layout, for tests.
///
/// Raw-entry access lets tests inject partial or corrupt layouts that the
/// real store could encounter after manual storage edits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a raw entry, bypassing session semantics.
    pub fn set_entry(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }

    /// Read a raw entry.
    pub fn entry(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self) -> Option<Session> {
        let entries = self.entries.borrow();
        session_from_entries(
            entries.get(TOKEN_KEY).cloned(),
            entries.get(USER_KEY).cloned(),
        )
    }

    fn set(&self, session: &Session) -> Result<(), StoreError> {
        let user_json = serde_json::to_string(&session.user).map_err(|_| StoreError)?;
        let mut entries = self.entries.borrow_mut();
        entries.insert(TOKEN_KEY.to_owned(), session.token.clone());
        entries.insert(USER_KEY.to_owned(), user_json);
        Ok(())
    }

    fn clear(&self) {
        let mut entries = self.entries.borrow_mut();
        entries.remove(TOKEN_KEY);
        entries.remove(USER_KEY);
    }
}

/// Cloneable handle to the shared session store, provided via context by
/// the root component.
#[derive(Clone)]
pub struct StoreHandle(pub Arc<dyn SessionStore + Send + Sync>);

impl StoreHandle {
    /// Handle over the browser-backed store.
    pub fn local() -> Self {
        Self(Arc::new(LocalStore))
    }
}

impl std::ops::Deref for StoreHandle {
    type Target = dyn SessionStore + Send + Sync;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}
