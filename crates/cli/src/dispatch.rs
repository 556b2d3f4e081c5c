//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//! - Load settings for the commands that need them and report deployment warnings.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Reading the override file (done in `main()` before dispatch).
//!
//! Invariants:
//! - `vars` never reads variable values, so it works with a broken environment.
//! - Deployment warnings are logged once per run, after the log filter is applied.

use anyhow::{Context, Result};
use redirects_config::{ConfigLoader, Settings};

use crate::args::{Cli, Commands};
use crate::commands;
use crate::formatters::OutputFormat;
use crate::logging::LogHandle;

/// Resolve the environment into settings and adopt their logging config.
fn load_settings(loader: ConfigLoader, logs: &LogHandle) -> Result<Settings> {
    let settings = loader
        .from_env()
        .and_then(ConfigLoader::build)
        .context("Failed to load settings")?;
    logs.apply(&settings.logging);

    for warning in settings.deployment_warnings() {
        tracing::warn!(var = warning.var(), "{}", warning);
    }
    Ok(settings)
}

pub(crate) fn run_command(cli: Cli, loader: ConfigLoader, logs: &LogHandle) -> Result<()> {
    let format: OutputFormat = cli.output.parse()?;

    match cli.command {
        Commands::Check { strict } => {
            let settings = load_settings(loader, logs)?;
            commands::check::run(&settings, strict, format)?;
        }
        Commands::Show { section } => {
            let settings = load_settings(loader, logs)?;
            commands::show::run(&settings, section.as_deref(), format)?;
        }
        Commands::Vars => {
            commands::vars::run(&loader.root_dir(), format)?;
        }
    }

    Ok(())
}
