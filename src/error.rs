//! Error types for the mmr CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! An unknown engine name is not an error here: the resolver recovers from it
//! and reports it as a diagnostic alongside the resolved engine.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mmr operations.
#[derive(Error, Debug)]
pub enum MmrError {
    /// The global config is missing, unreadable, or not a JSON object.
    #[error("global config not found at '{}' ({reason})", .path.display())]
    ConfigNotFound { path: PathBuf, reason: String },

    /// A required positional argument was omitted. Holds the rendered usage.
    #[error("{0}")]
    MissingArgument(String),

    /// The command was not recognized. Holds the rendered usage.
    #[error("{0}")]
    UnrecognizedCommand(String),

    /// Home or working directory could not be determined.
    #[error("{0}")]
    Environment(String),

    /// The status report could not be rendered as JSON.
    #[error("failed to serialize status report: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl MmrError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            MmrError::ConfigNotFound { .. } => exit_codes::CONFIG_ERROR,
            MmrError::MissingArgument(_) => exit_codes::USER_ERROR,
            MmrError::UnrecognizedCommand(_) => exit_codes::USER_ERROR,
            MmrError::Environment(_) => exit_codes::USER_ERROR,
            MmrError::Serialize(_) => exit_codes::USER_ERROR,
        }
    }

    /// Usage errors already carry clap's rendered text and are printed verbatim.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            MmrError::MissingArgument(_) | MmrError::UnrecognizedCommand(_)
        )
    }
}

/// Result type alias for mmr operations.
pub type Result<T> = std::result::Result<T, MmrError>;
