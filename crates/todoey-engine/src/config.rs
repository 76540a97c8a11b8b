//! Engine configuration
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! the stock behavior: deletes of non-empty categories are rejected and
//! duplicate names are allowed.
//!
//! ```toml
//! delete_policy = "cascade"
//! log_profile = "production"
//!
//! [validation]
//! unique_category_names = true
//! ```

use std::path::Path;

use serde::Deserialize;
use todoey_core::errors::{Result, TodoeyError};
use todoey_core::logging_facility::Profile;
use todoey_core::rules::{DeletePolicy, ValidationRules};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Policy applied by `TodoService::delete_category`
    pub delete_policy: DeletePolicy,
    pub validation: ValidationRules,
    pub log_profile: Profile,
}

impl EngineConfig {
    /// Parse configuration from TOML text
    ///
    /// # Errors
    /// * `ConfigInvalid` - malformed TOML, unknown keys or bad values
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, "<inline>")
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// * `ConfigInvalid` - the file cannot be read or does not parse
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source_name = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| TodoeyError::ConfigInvalid {
            source_name: source_name.clone(),
            reason: e.to_string(),
        })?;

        let config = Self::parse(&content, &source_name)?;
        debug!(source = %source_name, ?config, "engine config loaded");
        Ok(config)
    }

    fn parse(content: &str, source_name: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| TodoeyError::ConfigInvalid {
            source_name: source_name.to_string(),
            reason: e.to_string(),
        })
    }
}
