//! Settings type definitions for the redirects analyzer.
//!
//! Responsibilities:
//! - Define one settings group per concern (security, database, email, files,
//!   task queue, framework wiring, logging) and the `Settings` aggregate.
//! - Provide the redacting serialization helper for secrets.
//!
//! Does NOT handle:
//! - Reading or coercing environment variables (see `loader` module).
//! - Running the framework that consumes these settings.
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.
//! - Serialized output never contains secret values.
//! - Settings groups have no setters; they are immutable after `ConfigLoader::build`.

mod database;
mod email;
mod files;
mod framework;
pub mod logging;
mod queue;
pub(crate) mod security;
mod settings;

pub use database::DatabaseSettings;
pub use email::{EmailBackend, EmailSettings, EmailUrl};
pub use files::FileSettings;
pub(crate) use files::{default_media_root, default_static_root};
pub use framework::{
    AdminSiteSettings, FrameworkSettings, LocaleSettings, RestSettings, TemplateSettings,
};
pub use logging::{LogLevel, LoggingConfig};
pub use queue::TaskQueueSettings;
pub use security::{Admin, SecuritySettings};
pub use settings::{DeploymentWarning, Settings, SettingsPaths};
