//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Resolve the global root directory and override-file flags.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load settings (see `dispatch::load_settings`).

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "redirects-settings")]
#[command(about = "Inspect and validate the redirects analyzer settings", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  redirects-settings check --strict\n  redirects-settings show --section database\n  redirects-settings --root-dir /srv/app -o json show\n  redirects-settings vars\n"
)]
pub struct Cli {
    /// Project root directory; `.env` and default file locations derive from it
    #[arg(long, global = true, env = "APP_ROOT_DIR", value_name = "DIR")]
    pub root_dir: Option<PathBuf>,

    /// Override file to read instead of `<root-dir>/.env`
    #[arg(long, global = true, value_name = "FILE")]
    pub env_file: Option<PathBuf>,

    /// Output format (text, json, yaml)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the settings and report deployment problems
    Check {
        /// Fail with exit code 3 when any deployment warning is found
        #[arg(long)]
        strict: bool,
    },

    /// Print the resolved settings with secrets redacted
    Show {
        /// Print only one section (paths, security, database, email, files,
        /// task_queue, framework, logging)
        #[arg(long, value_name = "NAME")]
        section: Option<String>,
    },

    /// List every recognized environment variable with its type and default
    Vars,
}

/// Returns `path` unless it is blank or whitespace-only.
pub fn non_blank(path: Option<&Path>) -> Option<PathBuf> {
    path.filter(|p| !p.to_string_lossy().trim().is_empty())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank_filters_whitespace() {
        assert_eq!(non_blank(Some(Path::new("  "))), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(
            non_blank(Some(Path::new("/srv/app"))),
            Some(PathBuf::from("/srv/app"))
        );
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "redirects-settings",
            "show",
            "--section",
            "database",
            "--root-dir",
            "/srv/app",
            "-o",
            "json",
        ]);
        assert_eq!(cli.root_dir, Some(PathBuf::from("/srv/app")));
        assert_eq!(cli.output, "json");
        assert!(matches!(
            cli.command,
            Commands::Show { section: Some(ref s) } if s == "database"
        ));
    }

    #[test]
    fn test_check_defaults_to_lenient() {
        let cli = Cli::parse_from(["redirects-settings", "check"]);
        assert!(matches!(cli.command, Commands::Check { strict: false }));
        assert_eq!(cli.output, "text");
    }
}
