//! `show`: print the resolved settings.
//!
//! Responsibilities:
//! - Render the whole `Settings` record or one named section.
//!
//! Invariants:
//! - Output goes through `Settings` serialization, so secrets are redacted.

use anyhow::{Result, anyhow};
use redirects_config::Settings;

use crate::formatters::OutputFormat;

/// Render the settings (or one section) without printing.
pub fn render(settings: &Settings, section: Option<&str>, format: OutputFormat) -> Result<String> {
    match section.map(str::trim) {
        Some(name) => {
            let value = settings.section(name).ok_or_else(|| {
                anyhow!(
                    "Unknown section '{}'. Valid sections: {}",
                    name,
                    Settings::section_names().join(", ")
                )
            })?;
            format.render(&value)
        }
        None => format.render(settings),
    }
}

pub fn run(settings: &Settings, section: Option<&str>, format: OutputFormat) -> Result<()> {
    let output = render(settings, section, format)?;
    println!("{}", output);
    Ok(())
}
