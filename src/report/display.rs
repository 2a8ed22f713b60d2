//! Text rendering for the status report.

use super::{Annotation, EngineRow, StatusReport};
use std::fmt;

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Annotation::ProjectOverride { engine } => write!(f, "[PROJECT OVERRIDE: {}]", engine),
            Annotation::ProjectDefault { engine } => write!(f, "[PROJECT DEFAULT: {}]", engine),
            Annotation::UnknownEngine { engine, fallback } => {
                write!(f, "[UNKNOWN ENGINE: {}, using {}]", engine, fallback)
            }
        }
    }
}

impl fmt::Display for EngineRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.descriptor.cli)?;
        if let Some(model) = &self.descriptor.model {
            write!(f, " ({})", model)?;
        }
        write!(
            f,
            " - {}",
            self.descriptor.description.as_deref().unwrap_or_default()
        )
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== MMR Routing Status ===")?;
        writeln!(f, "Enabled: {}", if self.enabled { "YES" } else { "NO" })?;
        writeln!(f, "Default engine: {}", self.default_engine)?;
        writeln!(f, "Validation: {}", self.validation)?;
        writeln!(f, "Config: {}", self.config_path.display())?;
        writeln!(f)?;

        writeln!(f, "Engines:")?;
        if self.engines.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for engine in &self.engines {
            writeln!(f, "  {}", engine)?;
        }
        writeln!(f)?;

        writeln!(f, "Routing Rules (by agent type):")?;
        if self.routing_rules.is_empty() {
            writeln!(f, "  (none)")?;
        }
        let width = self
            .routing_rules
            .iter()
            .map(|rule| rule.agent_type.len())
            .max()
            .unwrap_or(0);
        for rule in &self.routing_rules {
            write!(f, "  {:width$}  -> {}", rule.agent_type, rule.engine, width = width)?;
            if let Some(annotation) = &rule.annotation {
                write!(f, " {}", annotation)?;
            }
            writeln!(f)?;
        }

        if let Some(project) = &self.project {
            writeln!(f)?;
            writeln!(f, "Project Overrides:")?;
            if let Some(engine) = &project.override_engine {
                writeln!(f, "  Default engine: {}", engine)?;
            }
            for row in &project.agent_overrides {
                writeln!(f, "  {} -> {}", row.agent_type, row.engine)?;
            }
        }

        Ok(())
    }
}
