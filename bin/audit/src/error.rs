//! Error types for audit operations.

use std::fmt;

/// Errors raised while auditing a session store snapshot.
#[derive(Debug)]
pub enum AuditError {
    /// The snapshot file could not be read.
    StoreRead { path: String, details: String },
    /// The snapshot file is not a JSON object of session entries.
    StoreFormat { path: String, details: String },
}

impl fmt::Display for AuditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StoreRead { path, details } => {
                write!(f, "failed to read store snapshot '{path}': {details}")
            }
            Self::StoreFormat { path, details } => {
                write!(f, "store snapshot '{path}' is not valid: {details}")
            }
        }
    }
}

impl std::error::Error for AuditError {}
