//! Typed coercions for environment variable values.
//!
//! Responsibilities:
//! - Convert trimmed string values into booleans, ports, lists, and admin contacts.
//! - Report failures as `ConfigError::InvalidValue` naming the variable.
//!
//! Does NOT handle:
//! - Reading variables (see source.rs) or email URL decomposition (see `types::email`).
//!
//! Invariants:
//! - Boolean parsing is case-insensitive and rejects unknown tokens.
//! - List entries are trimmed and empty entries are dropped; order is preserved.
//! - Admin entries contain exactly one ':'; either side may be empty.

use super::error::ConfigError;
use crate::types::Admin;

const TRUE_TOKENS: &[&str] = &["true", "on", "ok", "y", "yes", "1"];
const FALSE_TOKENS: &[&str] = &["false", "off", "n", "no", "0"];

/// Parse a boolean token such as `true`, `yes`, `on`, `1` (or their negatives).
pub fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    let lowered = value.trim().to_ascii_lowercase();
    if TRUE_TOKENS.contains(&lowered.as_str()) {
        Ok(true)
    } else if FALSE_TOKENS.contains(&lowered.as_str()) {
        Ok(false)
    } else {
        Err(ConfigError::invalid(
            var,
            format!(
                "expected a boolean ({} or {}), got '{}'",
                TRUE_TOKENS.join("/"),
                FALSE_TOKENS.join("/"),
                value
            ),
        ))
    }
}

/// Parse a base-10 TCP port.
pub fn parse_port(var: &str, value: &str) -> Result<u16, ConfigError> {
    value
        .trim()
        .parse::<u16>()
        .map_err(|_| ConfigError::invalid(var, format!("expected an integer port, got '{value}'")))
}

/// Split a comma-separated list.
pub fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a comma-separated list of `name:email` pairs.
pub fn parse_admins(var: &str, value: &str) -> Result<Vec<Admin>, ConfigError> {
    parse_list(value)
        .iter()
        .map(|entry| parse_admin(var, entry))
        .collect()
}

fn parse_admin(var: &str, entry: &str) -> Result<Admin, ConfigError> {
    let mut parts = entry.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(email), None) => Ok(Admin {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
        }),
        _ => Err(ConfigError::invalid(
            var,
            format!("admin entry '{entry}' must have the form name:email"),
        )),
    }
}
