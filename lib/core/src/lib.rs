//! Core domain types and utilities for the readingroom platform.
//!
//! This crate provides the shared vocabulary used by the navigation and
//! session layers: the [`Role`] assigned to an authenticated session, and
//! the error-handling foundation the rest of the workspace builds on.

pub mod error;
pub mod role;

pub use error::Result;
pub use role::{ParseRoleError, Role};
