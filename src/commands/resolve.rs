//! Implementation of the `mmr resolve` command.
//!
//! Prints exactly one line, the engine name, to stdout. A rejected override
//! is reported on stderr and does not change the exit status.

use crate::cli::ResolveArgs;
use crate::config::ConfigLoader;
use crate::error::Result;
use crate::router::{self, Resolution};

/// Execute the `mmr resolve` command.
pub fn cmd_resolve(loader: &ConfigLoader, args: ResolveArgs) -> Result<()> {
    let resolution = resolve_with(loader, &args)?;

    if let Some(rejected) = &resolution.rejected {
        eprintln!("Warning: {}; using {}", rejected, resolution.engine);
    }
    println!("{}", resolution.engine);

    Ok(())
}

/// Load both configs and resolve. The global config must exist.
fn resolve_with(loader: &ConfigLoader, args: &ResolveArgs) -> Result<Resolution> {
    let global = loader.load_global()?;
    let project = loader.load_project();

    Ok(router::resolve(
        &global,
        project.as_ref(),
        &args.agent_type,
        args.workflow.as_deref(),
    ))
}
