//! Configuration loader for environment variables and the `.env` override file.
//!
//! Responsibilities:
//! - Load the `.env` override file, read an environment source, and coerce values.
//! - Provide a builder-pattern `ConfigLoader` that produces an immutable `Settings`.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Deciding whether deployment warnings are fatal (callers do).
//!
//! Invariants / Assumptions:
//! - The process environment takes precedence over `.env` values.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - Malformed values abort loading; nothing is retried or deferred.

mod builder;
mod env;
mod error;
mod parse;
mod schema;
mod source;

#[cfg(test)]
mod tests;

pub use builder::{ConfigLoader, apps_dir};
pub use error::ConfigError;
pub use parse::{parse_admins, parse_bool, parse_list, parse_port};
pub use schema::{EnvVarSpec, VarKind, env_schema};
pub use source::{EnvSource, ProcessEnv, env_var_or_none};
