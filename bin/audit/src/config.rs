//! Audit tool configuration.
//!
//! Loaded via the `config` crate from environment variables, so CI jobs
//! can point the tool at a session store without repeating flags.

use serde::Deserialize;
use std::path::PathBuf;

/// Environment-sourced configuration for the audit tool.
///
/// Every field has a CLI counterpart that takes priority.
#[derive(Debug, Default, Deserialize)]
pub struct AuditConfig {
    /// Path to a session store snapshot, as written by a client export.
    #[serde(default)]
    pub store_path: Option<PathBuf>,
}

impl AuditConfig {
    /// Loads configuration from `AUDIT_`-prefixed environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a present variable fails to parse.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::load(None)
    }

    /// Builds the config from `vars`, or from the process environment
    /// when `vars` is `None`.
    ///
    /// The prefix separator is a single underscore (`AUDIT_STORE_PATH`);
    /// the double underscore only separates nested keys.
    fn load(vars: Option<config::Map<String, String>>) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::with_prefix("AUDIT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(vars),
            )
            .build()?
            .try_deserialize()
    }
}
