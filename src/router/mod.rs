//! Engine resolution for agent types.
//!
//! # Resolution Order
//!
//! First match wins:
//!
//! 1. Routing disabled (`enabled: false`) -> `"claude"`, nothing else consulted
//! 2. Project per-agent override (`mmr.agent_overrides[agent_type]`)
//! 3. Project default override (`mmr.override_engine`)
//! 4. Global routing rule (`routing_rules.by_agent_type[agent_type]`)
//! 5. Fallback (`default_engine`, or `"claude"`)
//!
//! In strict mode a candidate from tiers 2-4 that is not a key of `engines`
//! is rejected and the tier-5 fallback is returned. Lower tiers are not
//! consulted after a rejection. The fallback itself is never checked.
//!
//! Resolution is a pure function of its inputs. Diagnostics are returned in
//! the `Resolution` rather than printed.

mod resolution;


pub use resolution::{Resolution, ResolutionSource, UnknownEngine};

use crate::config::types::DISABLED_ENGINE;
use crate::config::{GlobalConfig, ProjectConfig, ValidationMode};

/// Resolve the engine for `agent_type`.
///
/// `workflow` is accepted for forward compatibility and does not influence
/// the result.
pub fn resolve(
    global: &GlobalConfig,
    project: Option<&ProjectConfig>,
    agent_type: &str,
    _workflow: Option<&str>,
) -> Resolution {
    if !global.enabled {
        return Resolution::new(DISABLED_ENGINE, ResolutionSource::Disabled);
    }

    match candidate(global, project, agent_type) {
        Some((engine, source)) => validate(global, engine, source),
        None => Resolution::new(global.fallback_engine(), ResolutionSource::Fallback),
    }
}

/// The highest-priority override or rule that applies, if any.
fn candidate<'a>(
    global: &'a GlobalConfig,
    project: Option<&'a ProjectConfig>,
    agent_type: &str,
) -> Option<(&'a str, ResolutionSource)> {
    if let Some(engine) = project.and_then(|p| p.agent_override(agent_type)) {
        return Some((engine, ResolutionSource::ProjectAgentOverride));
    }

    if let Some(engine) = project.and_then(ProjectConfig::default_override) {
        return Some((engine, ResolutionSource::ProjectDefaultOverride));
    }

    global
        .routing_rule(agent_type)
        .map(|engine| (engine, ResolutionSource::RoutingRule))
}

fn validate(global: &GlobalConfig, engine: &str, source: ResolutionSource) -> Resolution {
    match global.engine_validation {
        ValidationMode::Permissive => Resolution::new(engine, source),
        ValidationMode::Strict if global.is_known_engine(engine) => Resolution::new(engine, source),
        ValidationMode::Strict => Resolution {
            engine: global.fallback_engine().to_string(),
            source: ResolutionSource::Fallback,
            rejected: Some(UnknownEngine {
                engine: engine.to_string(),
                source,
                known: global.known_engines(),
            }),
        },
    }
}
