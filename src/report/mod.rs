//! Routing status report.
//!
//! A read-only projection of the global and project configs for humans (and,
//! with `--json`, for scripts). Annotations on routing rules come from calling
//! the resolver, so the report always agrees with `mmr resolve`.

mod display;


use crate::config::{EngineDescriptor, GlobalConfig, ProjectConfig, ValidationMode};
use crate::router::{self, Resolution, ResolutionSource};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Everything `mmr status` shows.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub enabled: bool,
    /// Effective fallback engine.
    pub default_engine: String,
    pub validation: ValidationMode,
    pub config_path: PathBuf,
    pub engines: Vec<EngineRow>,
    pub routing_rules: Vec<RuleRow>,
    /// Present when the project config has an `mmr` section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectSection>,
}

/// One configured engine.
#[derive(Debug, Clone, Serialize)]
pub struct EngineRow {
    pub name: String,
    #[serde(flatten)]
    pub descriptor: EngineDescriptor,
}

/// One global routing rule and what it resolves to with overrides applied.
#[derive(Debug, Clone, Serialize)]
pub struct RuleRow {
    pub agent_type: String,
    /// Engine named by the global rule.
    pub engine: String,
    /// Engine `mmr resolve <agent_type>` would print.
    pub effective: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<Annotation>,
}

/// Why a rule's effective engine differs from the rule itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Annotation {
    /// Project per-agent override in effect.
    ProjectOverride { engine: String },
    /// Project default override in effect.
    ProjectDefault { engine: String },
    /// A candidate was rejected and the fallback used instead.
    UnknownEngine { engine: String, fallback: String },
}

impl Annotation {
    fn from_resolution(resolution: &Resolution) -> Option<Self> {
        if let Some(rejected) = &resolution.rejected {
            return Some(Annotation::UnknownEngine {
                engine: rejected.engine.clone(),
                fallback: resolution.engine.clone(),
            });
        }

        match resolution.source {
            ResolutionSource::ProjectAgentOverride => Some(Annotation::ProjectOverride {
                engine: resolution.engine.clone(),
            }),
            ResolutionSource::ProjectDefaultOverride => Some(Annotation::ProjectDefault {
                engine: resolution.engine.clone(),
            }),
            _ => None,
        }
    }
}

/// The project's `mmr` section.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_engine: Option<String>,
    pub agent_overrides: Vec<OverrideRow>,
}

/// One per-agent project override.
#[derive(Debug, Clone, Serialize)]
pub struct OverrideRow {
    pub agent_type: String,
    pub engine: String,
}

impl StatusReport {
    /// Build the report from loaded configs.
    pub fn build(global: &GlobalConfig, project: Option<&ProjectConfig>, config_path: &Path) -> Self {
        let engines = global
            .engines
            .iter()
            .map(|(name, descriptor)| EngineRow {
                name: name.clone(),
                descriptor: descriptor.clone(),
            })
            .collect();

        let routing_rules = global
            .routing_rules
            .by_agent_type
            .iter()
            .map(|(agent_type, engine)| {
                let resolution = router::resolve(global, project, agent_type, None);
                RuleRow {
                    agent_type: agent_type.clone(),
                    engine: engine.clone(),
                    annotation: Annotation::from_resolution(&resolution),
                    effective: resolution.engine,
                }
            })
            .collect();

        let project = project
            .and_then(ProjectConfig::overrides)
            .map(|overrides| ProjectSection {
                override_engine: overrides.override_engine.clone(),
                agent_overrides: overrides
                    .agent_overrides
                    .iter()
                    .map(|(agent_type, engine)| OverrideRow {
                        agent_type: agent_type.clone(),
                        engine: engine.clone(),
                    })
                    .collect(),
            });

        Self {
            enabled: global.enabled,
            default_engine: global.fallback_engine().to_string(),
            validation: global.engine_validation,
            config_path: config_path.to_path_buf(),
            engines,
            routing_rules,
            project,
        }
    }

    /// Render the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
