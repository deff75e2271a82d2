//! Error types for the navigation crate.
//!
//! Unknown or absent roles are not errors; they resolve to an empty
//! route list. These variants cover genuine misconfiguration of the
//! route table itself, surfaced by validation during audits.

use readingroom_core::Role;
use std::fmt;

/// Errors from route table validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTableError {
    /// A path occurs more than once within a role's flattened tree.
    DuplicatePath { role: Role, path: String },
    /// A group contains another group; sub-routes must be leaves.
    NestedGroup { role: Role, path: String },
}

impl fmt::Display for RouteTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicatePath { role, path } => {
                write!(f, "duplicate path '{path}' in route list for role '{role}'")
            }
            Self::NestedGroup { role, path } => {
                write!(
                    f,
                    "group '{path}' in route list for role '{role}' contains a nested group"
                )
            }
        }
    }
}

impl std::error::Error for RouteTableError {}
