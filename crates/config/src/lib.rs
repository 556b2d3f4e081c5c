//! Settings for the redirects analyzer service.
//!
//! This crate reads the process environment (optionally seeded from a `.env`
//! file) into a typed, immutable `Settings` record that is handed to every
//! consumer at startup.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{
    ConfigError, ConfigLoader, EnvSource, EnvVarSpec, ProcessEnv, VarKind, apps_dir,
    env_schema, env_var_or_none, parse_admins, parse_bool, parse_list, parse_port,
};
pub use types::{
    Admin, DatabaseSettings, DeploymentWarning, EmailBackend, EmailSettings, EmailUrl,
    FileSettings, FrameworkSettings, LoggingConfig, SecuritySettings, Settings, SettingsPaths,
    TaskQueueSettings,
};
