//! Resolution results.

use std::fmt;

/// Which tier produced the resolved engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// Routing disabled in the global config.
    Disabled,
    /// `mmr.agent_overrides[agent_type]` in the project config.
    ProjectAgentOverride,
    /// `mmr.override_engine` in the project config.
    ProjectDefaultOverride,
    /// `routing_rules.by_agent_type[agent_type]` in the global config.
    RoutingRule,
    /// `default_engine`, or `"claude"`.
    Fallback,
}

impl fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionSource::Disabled => write!(f, "disabled"),
            ResolutionSource::ProjectAgentOverride => write!(f, "project agent override"),
            ResolutionSource::ProjectDefaultOverride => write!(f, "project default override"),
            ResolutionSource::RoutingRule => write!(f, "routing rule"),
            ResolutionSource::Fallback => write!(f, "fallback"),
        }
    }
}

/// A candidate engine that is not among the configured engines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEngine {
    /// The rejected engine name.
    pub engine: String,
    /// Tier the rejected name came from.
    pub source: ResolutionSource,
    /// Configured engine names at the time of resolution.
    pub known: Vec<String>,
}

impl fmt::Display for UnknownEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known = if self.known.is_empty() {
            "(none)".to_string()
        } else {
            self.known.join(", ")
        };
        write!(
            f,
            "unknown engine \"{}\" from {} (known: {})",
            self.engine, self.source, known
        )
    }
}

/// The outcome of resolving one agent type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Engine to use.
    pub engine: String,
    /// Tier `engine` came from.
    pub source: ResolutionSource,
    /// Candidate rejected in favor of the fallback, if any.
    pub rejected: Option<UnknownEngine>,
}

impl Resolution {
    pub(crate) fn new(engine: &str, source: ResolutionSource) -> Self {
        Self {
            engine: engine.to_string(),
            source,
            rejected: None,
        }
    }
}
