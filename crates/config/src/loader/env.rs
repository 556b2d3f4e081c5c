//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read every consulted variable from an `EnvSource` and coerce it to its type.
//! - Apply the parsed values to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Building the final Settings (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Unset, empty, or whitespace-only variables leave the loader untouched.
//! - Secret values are stored verbatim, other values trimmed.
//! - The first malformed variable aborts with ConfigError::InvalidValue.

use secrecy::SecretString;
use std::path::PathBuf;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use super::parse::{parse_admins, parse_bool, parse_list, parse_port};
use super::source::EnvSource;
use crate::constants::*;
use crate::types::EmailUrl;

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader, source: &impl EnvSource) -> Result<(), ConfigError> {
    // Security
    if let Some(debug) = source.var(ENV_DEBUG) {
        loader.set_debug(Some(parse_bool(ENV_DEBUG, &debug)?));
    }
    if let Some(secret) = source.secret(ENV_SECRET_KEY) {
        loader.set_secret_key(Some(SecretString::new(secret.into())));
    }
    if let Some(admins) = source.var(ENV_ADMINS) {
        loader.set_admins(Some(parse_admins(ENV_ADMINS, &admins)?));
    }
    if let Some(hosts) = source.var(ENV_ALLOWED_HOSTS) {
        loader.set_allowed_hosts(Some(parse_list(&hosts)));
    }

    // Static/Media
    if let Some(root) = source.var(ENV_STATIC_ROOT) {
        loader.set_static_root(Some(PathBuf::from(root)));
    }
    if let Some(root) = source.var(ENV_MEDIA_ROOT) {
        loader.set_media_root(Some(PathBuf::from(root)));
    }

    // Database
    if let Some(host) = source.var(ENV_POSTGRES_HOST) {
        loader.set_postgres_host(Some(host));
    }
    if let Some(port) = source.var(ENV_POSTGRES_PORT) {
        loader.set_postgres_port(Some(parse_port(ENV_POSTGRES_PORT, &port)?));
    }
    if let Some(name) = source.var(ENV_POSTGRES_DB) {
        loader.set_postgres_db(Some(name));
    }
    if let Some(user) = source.var(ENV_POSTGRES_USER) {
        loader.set_postgres_user(Some(user));
    }
    if let Some(password) = source.secret(ENV_POSTGRES_PASSWORD) {
        loader.set_postgres_password(Some(SecretString::new(password.into())));
    }

    // Email
    if let Some(url) = source.var(ENV_EMAIL_URL) {
        loader.set_email_url(Some(EmailUrl::parse(&url)?));
    }
    if let Some(from) = source.var(ENV_DEFAULT_FROM_EMAIL) {
        loader.set_default_from_email(Some(from));
    }
    if let Some(server) = source.var(ENV_SERVER_EMAIL) {
        loader.set_server_email(Some(server));
    }

    // Task queue
    if let Some(url) = source.var(ENV_BROKER_URL) {
        loader.set_broker_url(Some(url));
    }
    if let Some(url) = source.var(ENV_RESULT_BACKEND) {
        loader.set_result_backend(Some(url));
    }
    if let Some(content) = source.var(ENV_ACCEPT_CONTENT) {
        loader.set_accept_content(Some(parse_list(&content)));
    }
    if let Some(serializer) = source.var(ENV_TASK_SERIALIZER) {
        loader.set_task_serializer(Some(serializer));
    }
    if let Some(serializer) = source.var(ENV_RESULT_SERIALIZER) {
        loader.set_result_serializer(Some(serializer));
    }

    Ok(())
}
