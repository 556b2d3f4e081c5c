//! redirects-settings - inspect and validate the redirects analyzer settings.
//!
//! Responsibilities:
//! - Parse command-line arguments and the root directory environment variable.
//! - Seed the environment from the override file, then load settings.
//! - Print settings, variable listings, and deployment checks in several formats.
//!
//! Does NOT handle:
//! - Loading or coercing variables (see `crates/config`).
//!
//! Invariants:
//! - CLI parsing happens BEFORE `load_dotenv()` because `--root-dir` locates the file.
//! - `APP_ROOT_DIR` therefore cannot itself come from the override file.
//! - Every failure path exits through a structured `ExitCode`.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;
mod logging;

use args::{Cli, non_blank};
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use redirects_config::{ConfigLoader, LoggingConfig};

fn main() {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();

    // Blank/whitespace-only values fall back to the current directory
    if let Some(root) = non_blank(cli.root_dir.as_deref()) {
        loader = loader.with_root_dir(root);
    }
    if let Some(path) = non_blank(cli.env_file.as_deref()) {
        loader = loader.with_env_file(path);
    }

    let logs = logging::init(&LoggingConfig::new(false));

    let loader = match loader.load_dotenv() {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to load environment: {}", e);
            std::process::exit(ExitCode::from(&e).as_i32());
        }
    };

    let exit_code = match run_command(cli, loader, &logs) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
