//! Config loading and safe-navigation accessors.

use super::model::{GlobalConfig, ProjectConfig};
use super::types::{DEFAULT_ENGINE, ProjectOverrides};
use crate::error::{MmrError, Result};
use serde::de::Error as _;
use serde_json::Value;
use std::path::Path;

/// Parse a document that must be a JSON object.
fn parse_object<T: serde::de::DeserializeOwned>(json: &str) -> serde_json::Result<T> {
    let value: Value = serde_json::from_str(json)?;
    if !value.is_object() {
        return Err(serde_json::Error::custom("expected a JSON object"));
    }
    serde_json::from_value(value)
}

impl GlobalConfig {
    /// Load the global config from a JSON file.
    ///
    /// # Returns
    ///
    /// * `Ok(GlobalConfig)` - Successfully loaded config
    /// * `Err(MmrError::ConfigNotFound)` - Missing, unreadable, or malformed file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| MmrError::ConfigNotFound {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Self::from_json(&content).map_err(|e| MmrError::ConfigNotFound {
            path: path.to_path_buf(),
            reason: format!("invalid JSON: {}", e),
        })
    }

    /// Parse the global config from a JSON string.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        parse_object(json)
    }

    /// The engine used when nothing else applies: `default_engine`, or
    /// `"claude"` when that is unset or empty.
    pub fn fallback_engine(&self) -> &str {
        self.default_engine.as_deref().unwrap_or(DEFAULT_ENGINE)
    }

    /// Whether `engine` is one of the configured engine names.
    pub fn is_known_engine(&self, engine: &str) -> bool {
        self.engines.contains_key(engine)
    }

    /// Configured engine names, sorted.
    pub fn known_engines(&self) -> Vec<String> {
        self.engines.keys().cloned().collect()
    }

    /// The global routing rule for an agent type, if any.
    pub fn routing_rule(&self, agent_type: &str) -> Option<&str> {
        self.routing_rules
            .by_agent_type
            .get(agent_type)
            .map(String::as_str)
    }
}

impl ProjectConfig {
    /// Load a project config, treating any failure as "no project config".
    pub fn load<P: AsRef<Path>>(path: P) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        Self::from_json(&content)
    }

    /// Parse a project config, returning `None` when it is not a JSON object.
    pub fn from_json(json: &str) -> Option<Self> {
        parse_object(json).ok()
    }

    /// The `mmr` section, if present.
    pub fn overrides(&self) -> Option<&ProjectOverrides> {
        self.mmr.as_ref()
    }

    /// `mmr.agent_overrides[agent_type]`, if present.
    pub fn agent_override(&self, agent_type: &str) -> Option<&str> {
        self.overrides()?
            .agent_overrides
            .get(agent_type)
            .map(String::as_str)
    }

    /// `mmr.override_engine`, if present.
    pub fn default_override(&self) -> Option<&str> {
        self.overrides()?.override_engine.as_deref()
    }
}
