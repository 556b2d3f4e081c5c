//! `check`: validate that the settings load and are fit for deployment.
//!
//! Responsibilities:
//! - Summarize the loaded settings' deployment warnings.
//! - Escalate warnings to a failure under `--strict`.
//!
//! Does NOT handle:
//! - Loading failures; those surface from `dispatch::load_settings` as exit code 2.

use anyhow::Result;
use redirects_config::{DeploymentWarning, Settings};
use serde::Serialize;

use crate::error::StrictCheckFailed;
use crate::formatters::OutputFormat;

#[derive(Debug, Serialize)]
pub struct WarningEntry {
    pub var: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub status: &'static str,
    pub debug: bool,
    pub warnings: Vec<WarningEntry>,
}

impl CheckReport {
    pub fn new(settings: &Settings, warnings: &[DeploymentWarning]) -> Self {
        Self {
            status: if warnings.is_empty() { "ok" } else { "warnings" },
            debug: settings.security.debug,
            warnings: warnings
                .iter()
                .map(|w| WarningEntry {
                    var: w.var(),
                    message: w.to_string(),
                })
                .collect(),
        }
    }

    fn to_text(&self) -> String {
        let mut out = format!(
            "Settings loaded (debug: {}).",
            if self.debug { "on" } else { "off" }
        );
        if self.warnings.is_empty() {
            out.push_str("\nNo deployment warnings.");
        } else {
            out.push_str(&format!("\n{} deployment warning(s):", self.warnings.len()));
            for w in &self.warnings {
                out.push_str(&format!("\n  - {}", w.message));
            }
        }
        out
    }
}

pub fn run(settings: &Settings, strict: bool, format: OutputFormat) -> Result<()> {
    let warnings = settings.deployment_warnings();
    let report = CheckReport::new(settings, &warnings);

    let output = match format {
        OutputFormat::Text => report.to_text(),
        other => other.render(&report)?,
    };
    println!("{}", output);

    if strict && !warnings.is_empty() {
        return Err(StrictCheckFailed { warnings }.into());
    }
    Ok(())
}
