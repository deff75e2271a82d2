//! The routing seam the rehydrator drives.

/// How a navigation should treat the history stack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
}

/// Read-and-steer access to the host's router.
///
/// Implementations adapt whatever routing the host has; the session
/// layer only ever asks where it is and requests a move.
pub trait Navigator {
    /// Returns the path currently being displayed.
    fn current_path(&self) -> String;

    /// Requests navigation to `path`.
    fn navigate(&self, path: &str, options: NavigateOptions);
}
