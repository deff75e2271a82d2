//! Navigation entry data type.
//!
//! A `RouteEntry` is one navigable destination: its route path, display
//! name, and semantic icon. An entry with sub-routes is an expandable
//! group; one without is a directly navigable leaf. Entries are
//! immutable once constructed.

use crate::icon::NavIcon;
use serde::{Deserialize, Serialize};

/// One navigable (or grouping) destination with display metadata.
///
/// Sub-routes are ordered; a non-empty list marks this entry as a group.
/// The empty list *is* the leaf representation, so a "group with no
/// members" cannot be expressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Route path, unique within a role's flattened route list.
    path: String,
    /// Display name for the menu.
    name: String,
    /// Semantic glyph identifier.
    icon: NavIcon,
    /// Ordered sub-entries; non-empty marks this entry as a group.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    sub_routes: Vec<RouteEntry>,
}

impl RouteEntry {
    /// Creates a directly navigable leaf entry.
    #[must_use]
    pub fn leaf(path: impl Into<String>, name: impl Into<String>, icon: NavIcon) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            icon,
            sub_routes: Vec::new(),
        }
    }

    /// Creates an expandable group entry with the given sub-entries.
    #[must_use]
    pub fn group(
        path: impl Into<String>,
        name: impl Into<String>,
        icon: NavIcon,
        sub_routes: Vec<RouteEntry>,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            icon,
            sub_routes,
        }
    }

    /// Returns the route path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the semantic icon identifier.
    #[must_use]
    pub fn icon(&self) -> NavIcon {
        self.icon
    }

    /// Returns the ordered sub-entries (empty for a leaf).
    #[must_use]
    pub fn sub_routes(&self) -> &[RouteEntry] {
        &self.sub_routes
    }

    /// Returns true if this entry is an expandable group.
    #[must_use]
    pub fn is_group(&self) -> bool {
        !self.sub_routes.is_empty()
    }

    /// Returns this entry's path followed by all sub-entry paths, in
    /// menu order.
    #[must_use]
    pub fn flattened_paths(&self) -> Vec<&str> {
        let mut paths = Vec::with_capacity(1 + self.sub_routes.len());
        self.collect_paths(&mut paths);
        paths
    }

    fn collect_paths<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(&self.path);
        for sub in &self.sub_routes {
            sub.collect_paths(out);
        }
    }
}
