//! Role types for readingroom access control.
//!
//! Every authenticated session carries exactly one role, assigned by the
//! authentication backend at login and immutable for the session's
//! lifetime. Roles are flat: there is no hierarchy or inheritance
//! between them, and each role's authorized surface is enumerated
//! independently so it can be audited on its own.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The role assigned to an authenticated session.
///
/// Serialized as the lowercase role name (`"admin"`, `"librarian"`,
/// `"user"`), the form the login flow persists alongside the credential
/// token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Platform administrator: manages staff, catalog, and rosters.
    Admin,
    /// Librarian: manages the catalog and book circulation.
    Librarian,
    /// Standard member with access to their own activity.
    User,
}

impl Role {
    /// All configured roles, in the order they are audited and displayed.
    pub const ALL: [Role; 3] = [Role::Admin, Role::Librarian, Role::User];

    /// Returns the lowercase role name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Librarian => "librarian",
            Self::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a role from a string fails.
///
/// Callers that must treat unrecognized roles as "authorized nothing"
/// rather than a failure fold this away with `s.parse().ok()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRoleError {
    /// The string that did not name a configured role.
    pub value: String,
}

impl fmt::Display for ParseRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized role: '{}'", self.value)
    }
}

impl std::error::Error for ParseRoleError {}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "librarian" => Ok(Self::Librarian),
            "user" => Ok(Self::User),
            other => Err(ParseRoleError {
                value: other.to_string(),
            }),
        }
    }
}
