//! Configuration model for mmr.
//!
//! `GlobalConfig` represents `~/.claude/mmr/config.json`; `ProjectConfig`
//! represents `<project>/.planning/config.json`. Unknown fields are ignored
//! and every nested level may be absent.

use super::lenient;
use super::types::{EngineDescriptor, ProjectOverrides, RoutingRules, ValidationMode, default_true};
use serde::Deserialize;
use std::collections::BTreeMap;

/// User-wide routing configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GlobalConfig {
    /// Master switch. Only a literal `false` disables routing.
    #[serde(default = "default_true", deserialize_with = "lenient::enabled_flag")]
    pub enabled: bool,

    /// Fallback engine. `None` when absent or empty; see `fallback_engine`.
    #[serde(default, deserialize_with = "lenient::engine_name")]
    pub default_engine: Option<String>,

    /// Known engines keyed by name. The keys are the set of valid engine names.
    #[serde(default, deserialize_with = "lenient::record_map")]
    pub engines: BTreeMap<String, EngineDescriptor>,

    /// Static agent-type routing.
    #[serde(default, deserialize_with = "lenient::record_or_default")]
    pub routing_rules: RoutingRules,

    /// Whether override and rule candidates are checked against `engines`.
    #[serde(default, deserialize_with = "lenient::record_or_default")]
    pub engine_validation: ValidationMode,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            default_engine: None,
            engines: BTreeMap::new(),
            routing_rules: RoutingRules::default(),
            engine_validation: ValidationMode::default(),
        }
    }
}

/// Per-project overrides layered on top of the global config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectConfig {
    /// The `mmr` section; absent when missing or not an object.
    #[serde(default, deserialize_with = "lenient::optional_record")]
    pub mmr: Option<ProjectOverrides>,
}
