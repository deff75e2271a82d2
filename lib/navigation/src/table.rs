//! The static role-to-routes table and resolver.
//!
//! The table is fixed configuration: built once at process start, never
//! mutated, and enumerated independently per role. Resolution is a pure
//! lookup, returning the same sequence for a role for the lifetime of
//! the process.

use crate::entry::RouteEntry;
use crate::error::RouteTableError;
use crate::icon::NavIcon;
use once_cell::sync::Lazy;
use readingroom_core::Role;
use std::collections::{HashMap, HashSet};

/// Process-wide route table instance.
static BUILTIN: Lazy<RouteTable> = Lazy::new(builtin_table);

/// Mapping from role to its ordered, authorized navigation entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: HashMap<Role, Vec<RouteEntry>>,
}

impl RouteTable {
    /// Returns the process-wide table.
    #[must_use]
    pub fn builtin() -> &'static RouteTable {
        &BUILTIN
    }

    /// Returns the ordered entries the given role is authorized to see.
    ///
    /// Roles missing from the table resolve to an empty slice. The
    /// returned entries are shared, immutable configuration.
    #[must_use]
    pub fn routes_for(&self, role: Role) -> &[RouteEntry] {
        self.routes.get(&role).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Resolves a raw role name, as persisted by the login flow.
    ///
    /// Unrecognized names (including the empty string) resolve to an
    /// empty slice, never an error.
    #[must_use]
    pub fn routes_for_name(&self, name: &str) -> &[RouteEntry] {
        match name.parse::<Role>() {
            Ok(role) => self.routes_for(role),
            Err(_) => &[],
        }
    }

    /// Checks the table's structural invariants: paths are unique within
    /// each role's flattened tree, and groups contain only leaves.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), RouteTableError> {
        for role in Role::ALL {
            let mut seen = HashSet::new();
            for entry in self.routes_for(role) {
                if entry.sub_routes().iter().any(RouteEntry::is_group) {
                    return Err(RouteTableError::NestedGroup {
                        role,
                        path: entry.path().to_string(),
                    });
                }
                for path in entry.flattened_paths() {
                    if !seen.insert(path.to_string()) {
                        return Err(RouteTableError::DuplicatePath {
                            role,
                            path: path.to_string(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

/// Resolves the authorized navigation entries for a session's role.
///
/// This is the entry point menu renderers consume: `None` (no session,
/// or a session whose stored role was unrecognized) resolves to an empty
/// slice.
#[must_use]
pub fn authorized_routes(role: Option<Role>) -> &'static [RouteEntry] {
    match role {
        Some(role) => RouteTable::builtin().routes_for(role),
        None => &[],
    }
}

// Shared settings tail, appended by value to every role's list.
fn settings_group() -> RouteEntry {
    RouteEntry::group(
        "/settings",
        "Settings",
        NavIcon::Gear,
        vec![
            RouteEntry::leaf("/settings/profile", "Profile", NavIcon::Person),
            RouteEntry::leaf("/settings/logout", "Logout", NavIcon::Lock),
        ],
    )
}

fn builtin_table() -> RouteTable {
    let mut routes = HashMap::new();

    routes.insert(
        Role::Admin,
        vec![
            RouteEntry::leaf("/dashboard", "Dashboard", NavIcon::Home),
            RouteEntry::leaf("/addTeacher", "Add Teacher", NavIcon::Message),
            RouteEntry::leaf("/addBook", "Add Book", NavIcon::Message),
            RouteEntry::leaf("/studentList", "Student List", NavIcon::Person),
            RouteEntry::leaf("/teacherList", "Teacher List", NavIcon::Person),
            RouteEntry::leaf("/analytics", "Analytics", NavIcon::Checklist),
            settings_group(),
        ],
    );

    routes.insert(
        Role::Librarian,
        vec![
            RouteEntry::leaf("/dashboard", "Dashboard", NavIcon::Home),
            RouteEntry::leaf("/addBook", "Add Book", NavIcon::Message),
            RouteEntry::leaf("/studentList", "Student List", NavIcon::Person),
            RouteEntry::leaf("/issueBook", "Issue Book", NavIcon::Activity),
            RouteEntry::leaf("/returnBook", "Return Book", NavIcon::Activity),
            RouteEntry::leaf("/analytics", "Analytics", NavIcon::Checklist),
            settings_group(),
        ],
    );

    routes.insert(
        Role::User,
        vec![
            RouteEntry::leaf("/dashboard", "Dashboard", NavIcon::Home),
            RouteEntry::leaf("/studentActivity", "Student Activity", NavIcon::Checklist),
            settings_group(),
        ],
    );

    RouteTable { routes }
}
