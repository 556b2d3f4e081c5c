//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide the text, JSON and YAML output formats.
//! - Render any serializable value; commands build their own output records.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//!
//! Invariants:
//! - Text output is one `dotted.key = value` line per scalar so it greps well.
//! - Null values render as `N/A` in text output and `null` elsewhere.

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use std::str::FromStr;

pub const DEFAULT_MISSING_VALUE: &str = "N/A";

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: text, json, yaml", s),
        }
    }
}

impl OutputFormat {
    /// Render `value` in this format.
    pub fn render<T: Serialize + ?Sized>(self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Text => {
                let value = serde_json::to_value(value)?;
                let mut lines = Vec::new();
                flatten("", &value, &mut lines);
                Ok(lines.join("\n"))
            }
        }
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::Null => DEFAULT_MISSING_VALUE.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn flatten(prefix: &str, value: &Value, lines: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                flatten(&join_key(prefix, key), child, lines);
            }
        }
        Value::Array(items) if items.iter().all(|v| !v.is_object() && !v.is_array()) => {
            let joined: Vec<String> = items.iter().map(scalar).collect();
            lines.push(format!("{prefix} = [{}]", joined.join(", ")));
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                flatten(&join_key(prefix, &i.to_string()), child, lines);
            }
        }
        _ if prefix.is_empty() => lines.push(scalar(value)),
        _ => lines.push(format!("{prefix} = {}", scalar(value))),
    }
}
