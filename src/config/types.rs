//! Configuration types and defaults for mmr.
//!
//! This module defines the nested records, enums, and the default value
//! table used by `GlobalConfig` and `ProjectConfig`.

use super::lenient;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =========================================================================
// Default value table
// =========================================================================

/// Engine used when `default_engine` is absent or empty.
pub const DEFAULT_ENGINE: &str = "claude";

/// Engine returned unconditionally when routing is disabled.
pub const DISABLED_ENGINE: &str = "claude";

pub(crate) fn default_true() -> bool {
    true
}

/// How candidate engines from overrides and routing rules are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Reject names missing from `engines` and use the fallback instead (default).
    #[default]
    Strict,
    /// Return candidates verbatim.
    Permissive,
}

impl ValidationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Permissive => "permissive",
        }
    }
}

impl std::fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Description of one engine. Display only; resolution reads just the key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineDescriptor {
    /// Command used to invoke the engine.
    #[serde(default)]
    pub cli: String,

    /// Model passed to the engine, if any.
    #[serde(
        default,
        deserialize_with = "lenient::non_empty_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub model: Option<String>,

    /// Free-form description.
    #[serde(
        default,
        deserialize_with = "lenient::non_empty_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
}

/// The `routing_rules` section of the global config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RoutingRules {
    /// Agent type -> engine name.
    #[serde(default, deserialize_with = "lenient::engine_name_map")]
    pub by_agent_type: BTreeMap<String, String>,
}

/// The `mmr` section of a project config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectOverrides {
    /// Project-wide engine used for every agent type without its own override.
    #[serde(default, deserialize_with = "lenient::engine_name")]
    pub override_engine: Option<String>,

    /// Agent type -> engine name, scoped to this project.
    #[serde(default, deserialize_with = "lenient::engine_name_map")]
    pub agent_overrides: BTreeMap<String, String>,
}
