//! The in-memory "is the user signed in right now" flag.

use std::cell::Cell;
use std::rc::Rc;

/// Shared in-memory auth flag.
///
/// The flag starts `false` on every fresh process start regardless of
/// what the store holds; persistence belongs to the store alone. It has
/// exactly two legitimate writers: the login flow after a successful
/// sign-in, and [`SessionRehydrator`](crate::SessionRehydrator) when it
/// finds a persisted token. Clones share the same flag, so every part
/// of the client observes the same answer.
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    flag: Rc<Cell<bool>>,
}

impl AuthState {
    /// Creates a signed-out state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the user is currently treated as signed in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.flag.get()
    }

    /// Sets the flag.
    pub fn set_authenticated(&self, authenticated: bool) {
        self.flag.set(authenticated);
    }
}
