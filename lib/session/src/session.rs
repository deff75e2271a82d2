//! Reading the persisted session back out of a store.

use crate::store::{SessionStore, TOKEN_KEY, USER_KEY};
use readingroom_core::Role;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The user record the login flow persists alongside the token.
///
/// Deserialization is tolerant: missing fields default, so records
/// written by older clients still parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredUser {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    role: Option<String>,
}

impl StoredUser {
    /// Returns the user's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the user's email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the raw role name as it was persisted.
    #[must_use]
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }
}

/// A point-in-time view of what the session store holds.
///
/// Loading never fails and never mutates the store. Every failure mode
/// folds to absence: a store read error, a token that is the empty
/// string, a user record that is not valid JSON, and a role name the
/// route table does not recognize all leave the corresponding field
/// `None`. The caller then behaves exactly as if nothing was persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    user: Option<StoredUser>,
    role: Option<Role>,
}

impl Session {
    /// Loads the session currently persisted in `store`.
    #[must_use]
    pub fn load(store: &impl SessionStore) -> Self {
        let token = match store.get(TOKEN_KEY) {
            Ok(token) => token.filter(|token| !token.is_empty()),
            Err(err) => {
                debug!(%err, "token read failed; treating session as signed out");
                None
            }
        };

        let user = match store.get(USER_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<StoredUser>(&raw) {
                Ok(user) => Some(user),
                Err(err) => {
                    debug!(%err, "stored user record is not valid JSON; ignoring it");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                debug!(%err, "user read failed; treating record as absent");
                None
            }
        };

        let role = user.as_ref().and_then(|user| {
            user.role().and_then(|name| match name.parse::<Role>() {
                Ok(role) => Some(role),
                Err(err) => {
                    debug!(%err, "stored role is not recognized; no routes will resolve");
                    None
                }
            })
        });

        Self { token, user, role }
    }

    /// Returns the persisted auth token, if one exists.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the persisted user record, if one parsed.
    #[must_use]
    pub fn user(&self) -> Option<&StoredUser> {
        self.user.as_ref()
    }

    /// Returns the recognized role, if the persisted record carried one.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Whether a token is persisted. Token presence alone decides this;
    /// the user record only affects which routes resolve. No expiry or
    /// signature check happens client-side, a known limitation of the
    /// trust model: the token is evidence, not proof, and the backend
    /// still authorizes every actual request.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::store::MemoryStore;

    struct FailingStore;

    impl SessionStore for FailingStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::ReadFailed {
                key: key.to_string(),
                details: "backend offline".to_string(),
            })
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::WriteFailed {
                key: key.to_string(),
                details: "backend offline".to_string(),
            })
        }

        fn remove(&self, key: &str) -> Result<(), StoreError> {
            Err(StoreError::WriteFailed {
                key: key.to_string(),
                details: "backend offline".to_string(),
            })
        }
    }

    #[test]
    fn loads_a_full_session() {
        let store = MemoryStore::with_entries([
            (TOKEN_KEY, "abc123"),
            (USER_KEY, r#"{"name":"Ida","email":"ida@library.test","role":"librarian"}"#),
        ]);

        let session = Session::load(&store);

        assert!(session.is_active());
        assert_eq!(session.token(), Some("abc123"));
        assert_eq!(session.role(), Some(Role::Librarian));

        let user = session.user().expect("user record parsed");
        assert_eq!(user.name(), "Ida");
        assert_eq!(user.email(), "ida@library.test");
        assert_eq!(user.role(), Some("librarian"));
    }

    #[test]
    fn missing_token_is_inactive_but_keeps_the_user() {
        let store =
            MemoryStore::with_entries([(USER_KEY, r#"{"name":"Ida","email":"","role":"user"}"#)]);

        let session = Session::load(&store);

        assert!(!session.is_active());
        assert_eq!(session.role(), Some(Role::User));
    }

    #[test]
    fn empty_token_is_treated_as_absent() {
        let store = MemoryStore::with_entries([(TOKEN_KEY, "")]);

        let session = Session::load(&store);

        assert!(!session.is_active());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn malformed_user_record_folds_to_no_role() {
        let store =
            MemoryStore::with_entries([(TOKEN_KEY, "abc123"), (USER_KEY, "not json at all")]);

        let session = Session::load(&store);

        assert!(session.is_active());
        assert_eq!(session.user(), None);
        assert_eq!(session.role(), None);
    }

    #[test]
    fn unrecognized_role_folds_to_none() {
        let store = MemoryStore::with_entries([
            (TOKEN_KEY, "abc123"),
            (USER_KEY, r#"{"name":"Ida","email":"","role":"guest"}"#),
        ]);

        let session = Session::load(&store);

        assert!(session.user().is_some());
        assert_eq!(session.role(), None);
    }

    #[test]
    fn user_record_without_role_field_still_parses() {
        let store = MemoryStore::with_entries([(USER_KEY, r#"{"name":"Ida","email":"x@y"}"#)]);

        let session = Session::load(&store);

        let user = session.user().expect("record parsed");
        assert_eq!(user.role(), None);
        assert_eq!(session.role(), None);
    }

    #[test]
    fn read_failure_folds_to_signed_out() {
        let session = Session::load(&FailingStore);

        assert!(!session.is_active());
        assert_eq!(session.token(), None);
        assert_eq!(session.user(), None);
        assert_eq!(session.role(), None);
    }

    #[test]
    fn empty_store_loads_the_default_session() {
        let session = Session::load(&MemoryStore::new());
        assert_eq!(session, Session::default());
    }
}
