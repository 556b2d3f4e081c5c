//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that deployment scripts can branch on.
//! - Map `ConfigError` and strict-check failures to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit code 2 always means the settings could not be loaded.
//! - Exit code 3 is only produced by `check --strict`.

use redirects_config::{ConfigError, DeploymentWarning};
use thiserror::Error;

/// Structured exit codes for redirects-settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - bad arguments, unknown section, output failure.
    GeneralError = 1,

    /// The environment or override file could not be turned into settings.
    ///
    /// Scripts should fix the offending variable named on stderr.
    ConfigurationError = 2,

    /// Settings loaded, but `check --strict` found deployment warnings.
    DeploymentWarning = 3,
}

impl ExitCode {
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(_: &ConfigError) -> Self {
        ExitCode::ConfigurationError
    }
}

/// Returned by `check --strict` when the loaded settings are not fit for deployment.
#[derive(Debug, Error)]
#[error("{} deployment warning(s) found; refusing under --strict", .warnings.len())]
pub struct StrictCheckFailed {
    pub warnings: Vec<DeploymentWarning>,
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError when no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(config_err);
            }
            if cause.downcast_ref::<StrictCheckFailed>().is_some() {
                return ExitCode::DeploymentWarning;
            }
        }

        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::ConfigurationError.as_i32(), 2);
        assert_eq!(ExitCode::DeploymentWarning.as_i32(), 3);
    }

    #[test]
    fn test_config_error_in_chain() {
        let err = Err::<(), _>(ConfigError::InvalidValue {
            var: "POSTGRES_PORT".to_string(),
            message: "must be an integer".to_string(),
        })
        .context("Failed to load settings")
        .unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::ConfigurationError);
    }

    #[test]
    fn test_strict_failure_maps_to_deployment_warning() {
        let err = anyhow::Error::new(StrictCheckFailed {
            warnings: vec![DeploymentWarning::EmptySecretKey],
        });
        assert_eq!(err.exit_code(), ExitCode::DeploymentWarning);
        assert!(err.to_string().starts_with("1 deployment warning(s)"));
    }

    #[test]
    fn test_other_errors_are_general() {
        let err = anyhow::anyhow!("unknown section");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
