//! MMR (Multi-Model Router): resolves which CLI engine handles an agent type.
//!
//! This is the main entry point for the `mmr` CLI. It parses arguments,
//! dispatches to the appropriate command handler, and handles errors with
//! proper exit codes.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod report;
pub mod router;

use cli::{Cli, Invocation};
use std::process::ExitCode;

fn main() -> ExitCode {
    let result = Cli::parse_args().and_then(|invocation| match invocation {
        Invocation::Run(cli) => commands::dispatch(cli.command),
        Invocation::Help(text) => {
            println!("{}", text);
            Ok(())
        }
    });

    match result {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            if err.is_usage() {
                eprintln!("{}", err);
            } else {
                // Print user-actionable error message to stderr
                eprintln!("Error: {}", err);
            }

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
