//! CLI argument parsing for mmr.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::error::{MmrError, Result};
use clap::builder::NonEmptyStringValueParser;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::ffi::OsString;

const AFTER_HELP: &str = "\
Examples:
  mmr resolve gsd-phase-researcher    # -> gemini
  mmr resolve gsd-executor            # -> claude

Integration (with graceful fallback):
  ENGINE=$(mmr resolve <agent-type> 2>/dev/null || echo \"claude\")

Config:
  ~/.claude/mmr/config.json      global routing rules and engines
  .planning/config.json          per-project overrides (mmr section)";

/// MMR (Multi-Model Router): route AI agents to different backends.
///
/// Resolution priority:
/// 1. Per-project agent override (.planning/config.json -> mmr.agent_overrides)
/// 2. Per-project default engine (.planning/config.json -> mmr.override_engine)
/// 3. Global routing rules (~/.claude/mmr/config.json)
/// 4. Fallback: default_engine, or "claude"
#[derive(Parser, Debug)]
#[command(name = "mmr")]
#[command(author, version)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for mmr.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the engine name for an agent type.
    ///
    /// Writes exactly one line to stdout so the result can be captured directly.
    Resolve(ResolveArgs),

    /// Show the routing table and config.
    Status(StatusArgs),
}

/// Arguments for the `resolve` command.
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Agent type to route (e.g., gsd-executor).
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub agent_type: String,

    /// Workflow name. Accepted for forward compatibility; does not affect routing.
    pub workflow: Option<String>,
}

/// Arguments for the `status` command.
#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Result of parsing the command line.
#[derive(Debug)]
pub enum Invocation {
    /// Run a command.
    Run(Cli),
    /// Help or version was requested; print it to stdout and exit 0.
    Help(String),
}

impl Cli {
    /// Parse command line arguments from the process environment.
    pub fn parse_args() -> Result<Invocation> {
        Self::parse_args_from(std::env::args_os())
    }

    /// Parse command line arguments, classifying clap errors into mmr errors.
    pub fn parse_args_from<I, T>(args: I) -> Result<Invocation>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(cli) => Ok(Invocation::Run(cli)),
            Err(err) => classify(err),
        }
    }
}

fn classify(err: clap::Error) -> Result<Invocation> {
    let rendered = err.render().to_string().trim_end().to_string();
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Ok(Invocation::Help(rendered)),
        // An empty agent type is reported the same way as an omitted one.
        ErrorKind::MissingRequiredArgument | ErrorKind::InvalidValue => {
            Err(MmrError::MissingArgument(rendered))
        }
        _ => Err(MmrError::UnrecognizedCommand(rendered)),
    }
}
