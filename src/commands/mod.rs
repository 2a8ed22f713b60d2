//! Command implementations for mmr.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Config locations are resolved once per invocation from
//! the user's home directory and the current working directory.

mod resolve;
mod status;

use crate::cli::Command;
use crate::config::ConfigLoader;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    let loader = ConfigLoader::from_env()?;

    match command {
        Command::Resolve(args) => resolve::cmd_resolve(&loader, args),
        Command::Status(args) => status::cmd_status(&loader, args),
    }
}
