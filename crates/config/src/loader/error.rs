//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading failures.
//! - Provide helpers for building type-coercion errors with the variable name.
//!
//! Does NOT handle:
//! - Deployment policy findings (see `types::settings::DeploymentWarning`).
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, positions).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.
//! - Coercion errors NEVER include the rejected value for secret variables.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    /// Build an `InvalidValue` error for `var`.
    pub(crate) fn invalid(var: &str, message: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            var: var.to_string(),
            message: message.into(),
        }
    }

    /// The environment variable this error refers to, if any.
    pub fn var(&self) -> Option<&str> {
        match self {
            ConfigError::InvalidValue { var, .. } => Some(var),
            _ => None,
        }
    }
}
