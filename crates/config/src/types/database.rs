//! Database connection settings.
//!
//! Responsibilities:
//! - Hold the PostgreSQL host, port, database name, and credentials.
//! - Render connection URLs for clients that want a single DSN.
//!
//! Does NOT handle:
//! - Opening connections (owned by the framework runtime).
//!
//! Invariants:
//! - The password is a `SecretString`; only `connection_url()` exposes it.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use url::Url;

use crate::constants::{DATABASE_ENGINE, ENV_POSTGRES_HOST, REDACTED};
use crate::loader::ConfigError;
use crate::types::security::redacted;

/// PostgreSQL connection settings.
#[derive(Debug, Clone, Serialize)]
pub struct DatabaseSettings {
    pub engine: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    #[serde(serialize_with = "redacted::serialize")]
    pub password: SecretString,
}

impl DatabaseSettings {
    pub(crate) fn new(
        host: String,
        port: u16,
        name: String,
        user: String,
        password: SecretString,
    ) -> Self {
        Self {
            engine: DATABASE_ENGINE.to_string(),
            host,
            port,
            name,
            user,
            password,
        }
    }

    /// Full `postgres://` URL including the password.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the host cannot form a valid URL.
    pub fn connection_url(&self) -> Result<String, ConfigError> {
        self.render_url(Some(self.password.expose_secret()))
    }

    /// Same as `connection_url()` with the password masked, safe for logs.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the host cannot form a valid URL.
    pub fn redacted_url(&self) -> Result<String, ConfigError> {
        let masked = if self.password.expose_secret().is_empty() {
            None
        } else {
            Some(REDACTED)
        };
        self.render_url(masked)
    }

    fn render_url(&self, password: Option<&str>) -> Result<String, ConfigError> {
        let invalid = || {
            ConfigError::invalid(
                ENV_POSTGRES_HOST,
                format!("'{}' cannot be used as a database host", self.host),
            )
        };

        let mut url = Url::parse(&format!("postgres://{}:{}", self.host, self.port))
            .map_err(|_| invalid())?;
        if !self.name.is_empty() {
            url.set_path(&format!("/{}", self.name));
        }
        if !self.user.is_empty() {
            url.set_username(&self.user).map_err(|()| invalid())?;
        }
        if let Some(password) = password.filter(|p| !p.is_empty()) {
            url.set_password(Some(password)).map_err(|()| invalid())?;
        }
        Ok(url.to_string())
    }
}
