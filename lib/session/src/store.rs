//! The session store abstraction and its in-memory implementation.

use crate::error::StoreError;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Key under which the login flow persists the auth token.
pub const TOKEN_KEY: &str = "token";

/// Key under which the login flow persists the serialized user record.
pub const USER_KEY: &str = "user";

/// String key-value storage that outlives the process.
///
/// Hosts adapt whatever persistence they have (browser local storage,
/// a settings file, a keychain). Implementations take `&self`: the
/// session layer is single-threaded and backends are expected to use
/// interior mutability, as [`MemoryStore`] does.
pub trait SessionStore {
    /// Returns the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ReadFailed`] when the backend cannot be
    /// consulted at all. An absent key is `Ok(None)`, not an error.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::WriteFailed`] when the value could not be
    /// persisted.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes the value stored under `key`. Removing an absent key is
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::WriteFailed`] when the removal could not
    /// be persisted.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// In-memory [`SessionStore`] backed by a shared map.
///
/// Clones share the same underlying entries, so a store handed to a
/// rehydrator stays observable from the test that built it.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given entries.
    #[must_use]
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self {
            entries: Rc::new(RefCell::new(entries)),
        }
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns `true` when the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
