//! Configuration model for mmr.
//!
//! Two JSON documents feed routing: the required global config
//! (`~/.claude/mmr/config.json`) and an optional per-project config
//! (`.planning/config.json`). Parsing is lenient: unknown fields are ignored
//! and nested levels with the wrong shape read as absent.

mod lenient;
mod loader;
mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use loader::ConfigLoader;
pub use model::{GlobalConfig, ProjectConfig};
pub use types::{EngineDescriptor, ProjectOverrides, RoutingRules, ValidationMode};
