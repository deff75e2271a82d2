//! Session store error types.

use std::fmt;

/// Errors surfaced by a [`SessionStore`](crate::SessionStore) backend.
///
/// Callers on the rehydration path treat any of these as "no session";
/// the variants exist so hosts can log what actually went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backend failed to produce a value for the key.
    ReadFailed { key: String, details: String },
    /// The backend failed to persist or remove a value for the key.
    WriteFailed { key: String, details: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadFailed { key, details } => {
                write!(f, "failed to read session key '{key}': {details}")
            }
            Self::WriteFailed { key, details } => {
                write!(f, "failed to write session key '{key}': {details}")
            }
        }
    }
}

impl std::error::Error for StoreError {}
