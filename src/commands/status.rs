//! Implementation of the `mmr status` command.
//!
//! Displays the enabled flag, default engine, engine table, routing rules
//! annotated with any project override in effect, and the project overrides.

use crate::cli::StatusArgs;
use crate::config::ConfigLoader;
use crate::error::Result;
use crate::report::StatusReport;

/// Execute the `mmr status` command.
pub fn cmd_status(loader: &ConfigLoader, args: StatusArgs) -> Result<()> {
    let report = build_report(loader)?;

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report);
    }

    Ok(())
}

fn build_report(loader: &ConfigLoader) -> Result<StatusReport> {
    let global = loader.load_global()?;
    let project = loader.load_project();

    Ok(StatusReport::build(
        &global,
        project.as_ref(),
        &loader.global_config_path(),
    ))
}
