//! Session persistence and rehydration for readingroom clients.
//!
//! A login leaves two records in a key-value session store: the auth
//! token under [`TOKEN_KEY`] and the serialized user record under
//! [`USER_KEY`]. Whether the user is *currently* treated as signed in
//! lives separately, as an in-memory [`AuthState`] flag that resets on
//! every fresh process start.
//!
//! [`SessionRehydrator`] reconciles the two on every route observation:
//! a persisted token flips the flag back on and bounces the user off
//! public entry pages, while an absent token leaves everything untouched
//! so the normal login flow takes over.
//!
//! Storage and routing sit behind the [`SessionStore`] and
//! [`Navigator`] traits; hosts adapt whatever backing they have, and
//! tests use [`MemoryStore`] plus a scripted navigator.
//!
//! # Example
//!
//! ```
//! use readingroom_session::{
//!     AuthState, MemoryStore, NavigateOptions, Navigator, Rehydration, SessionRehydrator,
//!     SessionStore, TOKEN_KEY,
//! };
//!
//! struct StaticNavigator;
//!
//! impl Navigator for StaticNavigator {
//!     fn current_path(&self) -> String {
//!         "/books".to_string()
//!     }
//!
//!     fn navigate(&self, _path: &str, _options: NavigateOptions) {}
//! }
//!
//! let store = MemoryStore::new();
//! store.set(TOKEN_KEY, "abc123").expect("memory store write");
//!
//! let auth = AuthState::new();
//! let rehydrator = SessionRehydrator::new(store, auth.clone(), StaticNavigator);
//!
//! assert_eq!(rehydrator.observe(), Rehydration::Restored { redirected: false });
//! assert!(auth.is_authenticated());
//! ```

pub mod auth;
pub mod error;
pub mod navigator;
pub mod rehydrate;
pub mod session;
pub mod store;

pub use auth::AuthState;
pub use error::StoreError;
pub use navigator::{NavigateOptions, Navigator};
pub use rehydrate::{HOME_PATH, PUBLIC_ENTRY_PATHS, Rehydration, SessionRehydrator, is_public_entry};
pub use session::{Session, StoredUser};
pub use store::{MemoryStore, SessionStore, TOKEN_KEY, USER_KEY};
