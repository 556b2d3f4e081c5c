//! Tracing subscriber setup.
//!
//! Responsibilities:
//! - Install the global subscriber before any settings are loaded.
//! - Switch the filter to the loaded logging config's directive.
//!
//! Invariants:
//! - Log output goes to stderr; stdout carries command output only.
//! - An explicit `RUST_LOG` always wins over the logging config.

use redirects_config::LoggingConfig;
use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*, reload};

/// Handle for adjusting the installed filter once settings are known.
pub struct LogHandle {
    filter: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
}

/// Install the global subscriber using `bootstrap` until real settings load.
pub fn init(bootstrap: &LoggingConfig) -> LogHandle {
    let env_filter = EnvFilter::try_from_default_env().ok();
    let from_env = env_filter.is_some();
    let filter = env_filter.unwrap_or_else(|| EnvFilter::new(bootstrap.default_directive()));
    let (filter_layer, filter) = reload::Layer::new(filter);

    let verbose = bootstrap.console_verbose();
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(verbose)
        .with_thread_ids(verbose);

    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init();

    LogHandle { filter, from_env }
}

impl LogHandle {
    /// Apply the filter directive derived from the loaded settings.
    pub fn apply(&self, config: &LoggingConfig) {
        if self.from_env {
            return;
        }
        if let Err(e) = self
            .filter
            .reload(EnvFilter::new(config.default_directive()))
        {
            eprintln!("Failed to update log filter: {}", e);
        }
    }
}
