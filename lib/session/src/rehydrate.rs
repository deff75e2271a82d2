//! Reconciliation between the persisted store and the in-memory flag.

use crate::auth::AuthState;
use crate::navigator::{NavigateOptions, Navigator};
use crate::session::Session;
use crate::store::SessionStore;
use tracing::debug;

/// Entry pages that make no sense for an already-authenticated user.
pub const PUBLIC_ENTRY_PATHS: [&str; 2] = ["/", "/auth"];

/// Where authenticated users land when bounced off a public entry page.
pub const HOME_PATH: &str = "/home";

/// Whether `path` is one of the public entry pages.
///
/// Matching is exact: `/auth/reset` is not an entry page even though it
/// shares a prefix with one.
#[must_use]
pub fn is_public_entry(path: &str) -> bool {
    PUBLIC_ENTRY_PATHS.contains(&path)
}

/// What a rehydration pass concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rehydration {
    /// No persisted token; nothing was touched.
    NoSession,
    /// A persisted token restored the auth flag.
    Restored {
        /// Whether the user was bounced off a public entry page.
        redirected: bool,
    },
}

/// Reconciles a persisted token with the in-memory auth flag.
///
/// The host calls [`observe`](Self::observe) on every route change,
/// including the first one after a fresh page load, which is where the
/// flag (reset to `false` by the reload) gets repaired from the store.
/// Observation only ever upgrades: a persisted token flips the flag on,
/// while an absent token leaves both the flag and the router alone.
/// Clearing the flag is the logout flow's job, and it happens through
/// the store, never through rehydration.
pub struct SessionRehydrator<S, N> {
    store: S,
    auth: AuthState,
    navigator: N,
}

impl<S, N> SessionRehydrator<S, N>
where
    S: SessionStore,
    N: Navigator,
{
    /// Creates a rehydrator over the given store, flag, and router.
    #[must_use]
    pub fn new(store: S, auth: AuthState, navigator: N) -> Self {
        Self {
            store,
            auth,
            navigator,
        }
    }

    /// Runs one reconciliation pass.
    ///
    /// With a persisted token the flag is set, and if the router is
    /// currently on a public entry page the user is moved to
    /// [`HOME_PATH`] with a pushed (not replaced) history entry, so the
    /// entry page stays reachable through back navigation. At most one
    /// navigation is issued per pass, and repeated passes settle: once
    /// off the entry page, later passes leave the router alone.
    pub fn observe(&self) -> Rehydration {
        let session = Session::load(&self.store);
        if !session.is_active() {
            debug!("no persisted token; leaving auth state untouched");
            return Rehydration::NoSession;
        }

        self.auth.set_authenticated(true);

        let path = self.navigator.current_path();
        if is_public_entry(&path) {
            debug!(from = %path, to = HOME_PATH, "restored session; bouncing off public entry page");
            self.navigator
                .navigate(HOME_PATH, NavigateOptions { replace: false });
            Rehydration::Restored { redirected: true }
        } else {
            debug!(%path, "restored session in place");
            Rehydration::Restored { redirected: false }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::store::{MemoryStore, TOKEN_KEY, USER_KEY};
    use std::cell::RefCell;

    /// Navigator whose path follows the navigations it is asked for.
    struct RecordingNavigator {
        path: RefCell<String>,
        navigations: RefCell<Vec<(String, NavigateOptions)>>,
    }

    impl RecordingNavigator {
        fn at(path: &str) -> Self {
            Self {
                path: RefCell::new(path.to_string()),
                navigations: RefCell::new(Vec::new()),
            }
        }

        fn navigations(&self) -> Vec<(String, NavigateOptions)> {
            self.navigations.borrow().clone()
        }
    }

    impl Navigator for &RecordingNavigator {
        fn current_path(&self) -> String {
            self.path.borrow().clone()
        }

        fn navigate(&self, path: &str, options: NavigateOptions) {
            *self.path.borrow_mut() = path.to_string();
            self.navigations.borrow_mut().push((path.to_string(), options));
        }
    }

    fn store_with_token() -> MemoryStore {
        MemoryStore::with_entries([(TOKEN_KEY, "abc123")])
    }

    #[test]
    fn public_entry_paths_match_exactly() {
        assert!(is_public_entry("/"));
        assert!(is_public_entry("/auth"));

        assert!(!is_public_entry("/home"));
        assert!(!is_public_entry("/auth/reset"));
        assert!(!is_public_entry(""));
    }

    #[test]
    fn no_token_touches_nothing() {
        for path in ["/", "/auth", "/dashboard", "/home"] {
            let auth = AuthState::new();
            let navigator = RecordingNavigator::at(path);
            let rehydrator = SessionRehydrator::new(MemoryStore::new(), auth.clone(), &navigator);

            assert_eq!(rehydrator.observe(), Rehydration::NoSession);
            assert!(!auth.is_authenticated(), "flag flipped on '{path}'");
            assert!(navigator.navigations().is_empty());
        }
    }

    #[test]
    fn token_on_root_redirects_home() {
        let auth = AuthState::new();
        let navigator = RecordingNavigator::at("/");
        let rehydrator = SessionRehydrator::new(store_with_token(), auth.clone(), &navigator);

        assert_eq!(rehydrator.observe(), Rehydration::Restored { redirected: true });
        assert!(auth.is_authenticated());
        assert_eq!(
            navigator.navigations(),
            vec![("/home".to_string(), NavigateOptions { replace: false })]
        );
    }

    #[test]
    fn token_on_auth_page_redirects_home() {
        let auth = AuthState::new();
        let navigator = RecordingNavigator::at("/auth");
        let rehydrator = SessionRehydrator::new(store_with_token(), auth.clone(), &navigator);

        assert_eq!(rehydrator.observe(), Rehydration::Restored { redirected: true });
        assert_eq!(navigator.navigations().len(), 1);
    }

    #[test]
    fn token_on_protected_route_restores_in_place() {
        let auth = AuthState::new();
        let navigator = RecordingNavigator::at("/books/42");
        let rehydrator = SessionRehydrator::new(store_with_token(), auth.clone(), &navigator);

        assert_eq!(
            rehydrator.observe(),
            Rehydration::Restored { redirected: false }
        );
        assert!(auth.is_authenticated());
        assert!(navigator.navigations().is_empty());
    }

    #[test]
    fn observation_never_clears_the_flag() {
        let auth = AuthState::new();
        auth.set_authenticated(true);

        let navigator = RecordingNavigator::at("/home");
        let rehydrator = SessionRehydrator::new(MemoryStore::new(), auth.clone(), &navigator);

        assert_eq!(rehydrator.observe(), Rehydration::NoSession);
        assert!(auth.is_authenticated());
    }

    #[test]
    fn repeated_observation_settles_after_one_redirect() {
        let auth = AuthState::new();
        let navigator = RecordingNavigator::at("/");
        let rehydrator = SessionRehydrator::new(store_with_token(), auth.clone(), &navigator);

        assert_eq!(rehydrator.observe(), Rehydration::Restored { redirected: true });
        assert_eq!(
            rehydrator.observe(),
            Rehydration::Restored { redirected: false }
        );
        assert_eq!(navigator.navigations().len(), 1);
    }

    #[test]
    fn redirect_pushes_history_instead_of_replacing() {
        let navigator = RecordingNavigator::at("/auth");
        let rehydrator =
            SessionRehydrator::new(store_with_token(), AuthState::new(), &navigator);

        rehydrator.observe();

        let options = navigator.navigations()[0].1;
        assert!(!options.replace);
    }

    #[test]
    fn empty_token_is_not_a_session() {
        let auth = AuthState::new();
        let navigator = RecordingNavigator::at("/");
        let store = MemoryStore::with_entries([(TOKEN_KEY, "")]);
        let rehydrator = SessionRehydrator::new(store, auth.clone(), &navigator);

        assert_eq!(rehydrator.observe(), Rehydration::NoSession);
        assert!(!auth.is_authenticated());
        assert!(navigator.navigations().is_empty());
    }

    #[test]
    fn store_failure_behaves_like_an_absent_token() {
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

        let auth = AuthState::new();
        let navigator = RecordingNavigator::at("/");
        let rehydrator = SessionRehydrator::new(FailingStore, auth.clone(), &navigator);

        assert_eq!(rehydrator.observe(), Rehydration::NoSession);
        assert!(!auth.is_authenticated());
        assert!(navigator.navigations().is_empty());
    }

    #[test]
    fn malformed_user_record_does_not_block_restoration() {
        let auth = AuthState::new();
        let navigator = RecordingNavigator::at("/auth");
        let store =
            MemoryStore::with_entries([(TOKEN_KEY, "abc123"), (USER_KEY, "not json at all")]);
        let rehydrator = SessionRehydrator::new(store, auth.clone(), &navigator);

        assert_eq!(rehydrator.observe(), Rehydration::Restored { redirected: true });
        assert!(auth.is_authenticated());
    }
}
