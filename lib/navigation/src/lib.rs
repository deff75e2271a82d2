//! Role-based navigation route resolution for readingroom.
//!
//! This crate answers one question: given the role of the current
//! session, which navigation destinations is it authorized to see, and
//! in what order? It provides:
//! - Plain navigation data (`RouteEntry`, `NavIcon`) with no UI types;
//!   rendering layers map a [`NavIcon`] to an actual glyph
//! - The static per-role [`RouteTable`] and the [`authorized_routes`]
//!   resolver consumed by menu renderers
//! - Table validation for route audits
//!
//! # Access Model
//!
//! Each role's list is enumerated in full, independently of the others.
//! There is no inheritance between roles: the duplication (every role
//! sees `/dashboard`, every role ends in the shared settings group) is
//! intentional, so any role's authorized surface can be audited on its
//! own. Unknown or absent roles resolve to an empty list, never an
//! error.
//!
//! # Example
//!
//! ```
//! use readingroom_core::Role;
//! use readingroom_navigation::authorized_routes;
//!
//! let routes = authorized_routes(Some(Role::Librarian));
//! assert_eq!(routes.len(), 7);
//!
//! let settings = routes.last().expect("non-empty");
//! assert!(settings.is_group());
//! assert_eq!(settings.path(), "/settings");
//!
//! // A session with no recognized role sees nothing.
//! assert!(authorized_routes(None).is_empty());
//! ```

pub mod entry;
pub mod error;
pub mod icon;
pub mod table;

// Re-export main types at crate root
pub use entry::RouteEntry;
pub use error::RouteTableError;
pub use icon::NavIcon;
pub use table::{RouteTable, authorized_routes};
