//! The `Settings` record and deployment checks.
//!
//! Responsibilities:
//! - Aggregate every settings group into one immutable record.
//! - Report deployment policy findings (e.g. empty secret key in production).
//!
//! Does NOT handle:
//! - Loading values (see `loader` module).
//!
//! Invariants:
//! - `Settings` is only constructed by `ConfigLoader::build`.
//! - Deployment warnings are only produced when debug is off.

use secrecy::ExposeSecret;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use super::database::DatabaseSettings;
use super::email::EmailSettings;
use super::files::FileSettings;
use super::framework::FrameworkSettings;
use super::logging::LoggingConfig;
use super::queue::TaskQueueSettings;
use super::security::SecuritySettings;
use crate::constants::{
    ENV_ALLOWED_HOSTS, ENV_POSTGRES_DB, ENV_POSTGRES_PASSWORD, ENV_POSTGRES_USER, ENV_SECRET_KEY,
};

/// Filesystem anchors the other paths derive from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsPaths {
    pub root_dir: PathBuf,
    pub apps_dir: PathBuf,
}

/// The application settings, loaded once at startup.
#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    pub paths: SettingsPaths,
    pub security: SecuritySettings,
    pub database: DatabaseSettings,
    pub email: EmailSettings,
    pub files: FileSettings,
    pub task_queue: TaskQueueSettings,
    pub framework: FrameworkSettings,
    pub logging: LoggingConfig,
}

/// A setting that is acceptable for development but not for production.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentWarning {
    EmptySecretKey,
    NoAllowedHosts,
    /// A database connection field is empty; carries the variable name.
    MissingDatabaseField(&'static str),
}

impl DeploymentWarning {
    /// The environment variable that would resolve this warning.
    pub fn var(self) -> &'static str {
        match self {
            DeploymentWarning::EmptySecretKey => ENV_SECRET_KEY,
            DeploymentWarning::NoAllowedHosts => ENV_ALLOWED_HOSTS,
            DeploymentWarning::MissingDatabaseField(var) => var,
        }
    }
}

impl fmt::Display for DeploymentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeploymentWarning::EmptySecretKey => {
                write!(f, "{} is empty while debug is off", ENV_SECRET_KEY)
            }
            DeploymentWarning::NoAllowedHosts => write!(
                f,
                "{} is empty while debug is off; no host will be served",
                ENV_ALLOWED_HOSTS
            ),
            DeploymentWarning::MissingDatabaseField(var) => {
                write!(f, "{} is empty while debug is off", var)
            }
        }
    }
}

impl Settings {
    /// Deployment policy findings for these settings.
    ///
    /// Loading never fails on these; callers decide whether to refuse startup.
    pub fn deployment_warnings(&self) -> Vec<DeploymentWarning> {
        if self.security.debug {
            return Vec::new();
        }

        let mut warnings = Vec::new();
        if self.security.secret_key_is_empty() {
            warnings.push(DeploymentWarning::EmptySecretKey);
        }
        if self.security.allowed_hosts.is_empty() {
            warnings.push(DeploymentWarning::NoAllowedHosts);
        }
        let database_fields = [
            (ENV_POSTGRES_DB, self.database.name.is_empty()),
            (ENV_POSTGRES_USER, self.database.user.is_empty()),
            (
                ENV_POSTGRES_PASSWORD,
                self.database.password.expose_secret().is_empty(),
            ),
        ];
        warnings.extend(
            database_fields
                .into_iter()
                .filter(|(_, empty)| *empty)
                .map(|(var, _)| DeploymentWarning::MissingDatabaseField(var)),
        );
        warnings
    }

    /// Serialize a single top-level section (e.g. `"database"`) by name.
    pub fn section(&self, name: &str) -> Option<serde_json::Value> {
        let mut value = serde_json::to_value(self).ok()?;
        value.get_mut(name).map(serde_json::Value::take)
    }

    /// Names accepted by `section()`, in declaration order.
    pub fn section_names() -> &'static [&'static str] {
        &[
            "paths",
            "security",
            "database",
            "email",
            "files",
            "task_queue",
            "framework",
            "logging",
        ]
    }
}
