//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that collects values from the
//!   `.env` override file, an environment source, and direct builder methods.
//! - Build the final `Settings` with defaults and derived fields applied.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Type coercion (delegated to parse.rs).
//!
//! Invariants / Assumptions:
//! - Later calls win: `from_env()` followed by `with_*()` lets builder values
//!   override the environment.
//! - `.env` values never override variables already present in the process environment.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before the file is read.

use secrecy::SecretString;
use std::path::{Path, PathBuf};

use super::env::apply_env;
use super::error::ConfigError;
use super::source::{EnvSource, ProcessEnv};
use crate::constants::{
    APPS_DIR_NAME, DEFAULT_EMAIL_URL, DEFAULT_FROM_EMAIL, DEFAULT_POSTGRES_HOST,
    DEFAULT_POSTGRES_PORT, DEFAULT_SERVER_EMAIL, DOTENV_FILE_NAME, EMAIL_SUBJECT_PREFIX,
    ENV_DOTENV_DISABLED,
};
use crate::types::{
    Admin, DatabaseSettings, EmailSettings, EmailUrl, FileSettings,
    FrameworkSettings, LoggingConfig, SecuritySettings, Settings, SettingsPaths,
    TaskQueueSettings,
};

/// Configuration loader that builds `Settings` from the environment.
#[derive(Default)]
pub struct ConfigLoader {
    root_dir: Option<PathBuf>,
    env_file: Option<PathBuf>,
    debug: Option<bool>,
    secret_key: Option<SecretString>,
    admins: Option<Vec<Admin>>,
    allowed_hosts: Option<Vec<String>>,
    static_root: Option<PathBuf>,
    media_root: Option<PathBuf>,
    postgres_host: Option<String>,
    postgres_port: Option<u16>,
    postgres_db: Option<String>,
    postgres_user: Option<String>,
    postgres_password: Option<SecretString>,
    email_url: Option<EmailUrl>,
    default_from_email: Option<String>,
    server_email: Option<String>,
    broker_url: Option<String>,
    result_backend: Option<String>,
    accept_content: Option<Vec<String>>,
    task_serializer: Option<String>,
    result_serializer: Option<String>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from the `.env` override file if present.
    ///
    /// The file is `<root_dir>/.env` unless `with_env_file` picked another path.
    /// Values only fill in variables that are not already set.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            tracing::debug!("{} is set, skipping .env loading", ENV_DOTENV_DISABLED);
            return Ok(self);
        }

        let path = self.env_file_path();
        match dotenvy::from_path(&path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "Loaded .env overrides");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => {
                tracing::debug!(path = %path.display(), "No .env file found");
                Ok(self)
            }
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Set the application root that default paths derive from.
    pub fn with_root_dir(mut self, root: PathBuf) -> Self {
        self.root_dir = Some(root);
        self
    }

    /// Override the `.env` file location.
    pub fn with_env_file(mut self, path: PathBuf) -> Self {
        self.env_file = Some(path);
        self
    }

    /// Read configuration from the process environment.
    pub fn from_env(self) -> Result<Self, ConfigError> {
        self.from_source(&ProcessEnv)
    }

    /// Read configuration from an explicit variable mapping.
    pub fn from_source(mut self, source: &impl EnvSource) -> Result<Self, ConfigError> {
        apply_env(&mut self, source)?;
        Ok(self)
    }

    /// Set the debug flag.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    /// Set the secret key.
    pub fn with_secret_key(mut self, key: String) -> Self {
        self.secret_key = Some(SecretString::new(key.into()));
        self
    }

    /// Set the allowed host names.
    pub fn with_allowed_hosts(mut self, hosts: Vec<String>) -> Self {
        self.allowed_hosts = Some(hosts);
        self
    }

    /// Set the database host.
    pub fn with_postgres_host(mut self, host: String) -> Self {
        self.postgres_host = Some(host);
        self
    }

    /// Set the database port.
    pub fn with_postgres_port(mut self, port: u16) -> Self {
        self.postgres_port = Some(port);
        self
    }

    /// Set the email transport URL.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the URL cannot be decomposed.
    pub fn with_email_url(mut self, url: &str) -> Result<Self, ConfigError> {
        self.email_url = Some(EmailUrl::parse(url)?);
        Ok(self)
    }

    /// The application root: the configured one or the current directory.
    pub fn root_dir(&self) -> PathBuf {
        self.root_dir.clone().unwrap_or_else(|| {
            std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
        })
    }

    /// The `.env` file `load_dotenv()` will read.
    pub fn env_file_path(&self) -> PathBuf {
        self.env_file
            .clone()
            .unwrap_or_else(|| self.root_dir().join(DOTENV_FILE_NAME))
    }

    /// Build the final settings.
    pub fn build(self) -> Result<Settings, ConfigError> {
        let root_dir = self.root_dir();
        let apps_dir = apps_dir(&root_dir);
        let debug_enabled = self.debug.unwrap_or(false);

        let admins = self.admins.unwrap_or_default();
        let security = SecuritySettings {
            debug: debug_enabled,
            secret_key: self
                .secret_key
                .unwrap_or_else(|| SecretString::new(String::new().into())),
            allowed_hosts: self.allowed_hosts.unwrap_or_default(),
            managers: admins.clone(),
            admins,
        };

        let database = DatabaseSettings::new(
            self.postgres_host
                .unwrap_or_else(|| DEFAULT_POSTGRES_HOST.to_string()),
            self.postgres_port.unwrap_or(DEFAULT_POSTGRES_PORT),
            self.postgres_db.unwrap_or_default(),
            self.postgres_user.unwrap_or_default(),
            self.postgres_password
                .unwrap_or_else(|| SecretString::new(String::new().into())),
        );

        let email_url = match self.email_url {
            Some(url) => url,
            None => EmailUrl::parse(DEFAULT_EMAIL_URL)?,
        };
        let email = EmailSettings::new(
            email_url,
            EMAIL_SUBJECT_PREFIX.to_string(),
            self.default_from_email
                .unwrap_or_else(|| DEFAULT_FROM_EMAIL.to_string()),
            self.server_email
                .unwrap_or_else(|| DEFAULT_SERVER_EMAIL.to_string()),
        );

        let files = FileSettings::new(&apps_dir, self.static_root, self.media_root);

        let queue_defaults = TaskQueueSettings::default();
        let task_queue = TaskQueueSettings {
            broker_url: self.broker_url.unwrap_or(queue_defaults.broker_url),
            result_backend: self.result_backend.unwrap_or(queue_defaults.result_backend),
            accept_content: self.accept_content.unwrap_or(queue_defaults.accept_content),
            task_serializer: self
                .task_serializer
                .unwrap_or(queue_defaults.task_serializer),
            result_serializer: self
                .result_serializer
                .unwrap_or(queue_defaults.result_serializer),
        };

        let framework = FrameworkSettings::new(&apps_dir, debug_enabled);
        let logging = LoggingConfig::new(debug_enabled);

        tracing::debug!(
            root_dir = %root_dir.display(),
            debug = debug_enabled,
            database_host = %database.host,
            "Settings loaded"
        );

        Ok(Settings {
            paths: SettingsPaths { root_dir, apps_dir },
            security,
            database,
            email,
            files,
            task_queue,
            framework,
            logging,
        })
    }

    // Internal accessor methods for use by other loader modules

    pub(crate) fn set_debug(&mut self, debug: Option<bool>) {
        self.debug = debug;
    }

    pub(crate) fn set_secret_key(&mut self, key: Option<SecretString>) {
        self.secret_key = key;
    }

    pub(crate) fn set_admins(&mut self, admins: Option<Vec<Admin>>) {
        self.admins = admins;
    }

    pub(crate) fn set_allowed_hosts(&mut self, hosts: Option<Vec<String>>) {
        self.allowed_hosts = hosts;
    }

    pub(crate) fn set_static_root(&mut self, root: Option<PathBuf>) {
        self.static_root = root;
    }

    pub(crate) fn set_media_root(&mut self, root: Option<PathBuf>) {
        self.media_root = root;
    }

    pub(crate) fn set_postgres_host(&mut self, host: Option<String>) {
        self.postgres_host = host;
    }

    pub(crate) fn set_postgres_port(&mut self, port: Option<u16>) {
        self.postgres_port = port;
    }

    pub(crate) fn set_postgres_db(&mut self, name: Option<String>) {
        self.postgres_db = name;
    }

    pub(crate) fn set_postgres_user(&mut self, user: Option<String>) {
        self.postgres_user = user;
    }

    pub(crate) fn set_postgres_password(&mut self, password: Option<SecretString>) {
        self.postgres_password = password;
    }

    pub(crate) fn set_email_url(&mut self, url: Option<EmailUrl>) {
        self.email_url = url;
    }


    pub(crate) fn set_default_from_email(&mut self, from: Option<String>) {
        self.default_from_email = from;
    }

    pub(crate) fn set_server_email(&mut self, server: Option<String>) {
        self.server_email = server;
    }

    pub(crate) fn set_broker_url(&mut self, url: Option<String>) {
        self.broker_url = url;
    }

    pub(crate) fn set_result_backend(&mut self, url: Option<String>) {
        self.result_backend = url;
    }

    pub(crate) fn set_accept_content(&mut self, content: Option<Vec<String>>) {
        self.accept_content = content;
    }

    pub(crate) fn set_task_serializer(&mut self, serializer: Option<String>) {
        self.task_serializer = serializer;
    }

    pub(crate) fn set_result_serializer(&mut self, serializer: Option<String>) {
        self.result_serializer = serializer;
    }
}

/// The application package directory under `root`.
pub fn apps_dir(root: &Path) -> PathBuf {
    root.join(APPS_DIR_NAME)
}
