//! Locating the global and project config documents.
//!
//! ```text
//! <home>/.claude/mmr/config.json     global, required
//! <cwd>/.planning/config.json        project, optional
//! ```
//!
//! Both roots are constructor parameters so tests can point the loader at
//! temporary directories.

use super::model::{GlobalConfig, ProjectConfig};
use crate::error::{MmrError, Result};
use std::path::{Path, PathBuf};

/// Global config location relative to the home directory.
pub const GLOBAL_CONFIG_RELATIVE: [&str; 3] = [".claude", "mmr", "config.json"];

/// Project config location relative to the working directory.
pub const PROJECT_CONFIG_RELATIVE: [&str; 2] = [".planning", "config.json"];

/// Resolves config paths from a home directory and a working directory.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    home_dir: PathBuf,
    working_dir: PathBuf,
}

impl ConfigLoader {
    /// Creates a loader rooted at explicit directories.
    pub fn new(home_dir: impl Into<PathBuf>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            home_dir: home_dir.into(),
            working_dir: working_dir.into(),
        }
    }

    /// Creates a loader for the invoking user and current directory.
    pub fn from_env() -> Result<Self> {
        let home_dir = dirs::home_dir().ok_or_else(|| {
            MmrError::Environment("failed to determine the home directory".to_string())
        })?;
        let working_dir = std::env::current_dir().map_err(|e| {
            MmrError::Environment(format!("failed to get current working directory: {}", e))
        })?;

        Ok(Self::new(home_dir, working_dir))
    }

    /// Absolute path of the global config.
    pub fn global_config_path(&self) -> PathBuf {
        join_all(&self.home_dir, &GLOBAL_CONFIG_RELATIVE)
    }

    /// Absolute path of the project config.
    pub fn project_config_path(&self) -> PathBuf {
        join_all(&self.working_dir, &PROJECT_CONFIG_RELATIVE)
    }

    /// Load the global config. Absence is fatal to the caller.
    pub fn load_global(&self) -> Result<GlobalConfig> {
        GlobalConfig::load(self.global_config_path())
    }

    /// Load the project config. Any failure reads as "no project config".
    pub fn load_project(&self) -> Option<ProjectConfig> {
        ProjectConfig::load(self.project_config_path())
    }
}

fn join_all(root: &Path, parts: &[&str]) -> PathBuf {
    parts.iter().fold(root.to_path_buf(), |path, part| path.join(part))
}
