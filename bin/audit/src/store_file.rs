//! Loading a session store snapshot from disk.
//!
//! Clients export their session store as a flat JSON object. String
//! values are taken verbatim; anything else (such as the user record,
//! which some exporters emit as a nested object rather than a string)
//! is re-serialized to compact JSON, which is the form the client
//! itself persists. A `null` value marks its key as absent.

use crate::error::AuditError;
use readingroom_session::MemoryStore;
use rootcause::prelude::Report;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Reads a JSON snapshot into an in-memory session store.
pub fn load_store(path: &Path) -> Result<MemoryStore, Report<AuditError>> {
    let raw = fs::read_to_string(path).map_err(|e| AuditError::StoreRead {
        path: path.display().to_string(),
        details: e.to_string(),
    })?;

    let values: BTreeMap<String, serde_json::Value> =
        serde_json::from_str(&raw).map_err(|e| AuditError::StoreFormat {
            path: path.display().to_string(),
            details: e.to_string(),
        })?;

    let entries = values.into_iter().filter_map(|(key, value)| {
        let value = match value {
            serde_json::Value::Null => return None,
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        Some((key, value))
    });

    Ok(MemoryStore::with_entries(entries))
}
