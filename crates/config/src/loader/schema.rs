//! The typed schema of recognized environment variables.
//!
//! Used for documentation output (`redirects-settings vars`); the loader
//! itself reads variables in env.rs.

use serde::Serialize;
use std::path::Path;

use crate::constants::*;
use crate::types::{default_media_root, default_static_root};

/// The declared type of an environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VarKind {
    Bool,
    Str,
    Secret,
    Port,
    List,
    AdminList,
    Path,
    EmailUrl,
}

impl VarKind {
    pub fn as_str(self) -> &'static str {
        match self {
            VarKind::Bool => "bool",
            VarKind::Str => "string",
            VarKind::Secret => "secret",
            VarKind::Port => "port",
            VarKind::List => "list",
            VarKind::AdminList => "list of name:email",
            VarKind::Path => "path",
            VarKind::EmailUrl => "email url",
        }
    }
}

/// One recognized environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvVarSpec {
    pub name: &'static str,
    pub kind: VarKind,
    /// Default rendered as it would be written in the environment.
    pub default: String,
}

fn spec(name: &'static str, kind: VarKind, default: impl Into<String>) -> EnvVarSpec {
    EnvVarSpec {
        name,
        kind,
        default: default.into(),
    }
}

/// All declared variables, with defaults resolved against `apps_dir`.
///
/// `DJANGO_EMAIL_BACKEND` is declared but never consulted; the email URL's
/// scheme alone selects the backend.
pub fn env_schema(apps_dir: &Path) -> Vec<EnvVarSpec> {
    vec![
        spec(ENV_DEBUG, VarKind::Bool, "false"),
        spec(ENV_SECRET_KEY, VarKind::Secret, ""),
        spec(ENV_ADMINS, VarKind::AdminList, ""),
        spec(ENV_ALLOWED_HOSTS, VarKind::List, ""),
        spec(
            ENV_STATIC_ROOT,
            VarKind::Path,
            default_static_root(apps_dir).display().to_string(),
        ),
        spec(
            ENV_MEDIA_ROOT,
            VarKind::Path,
            default_media_root(apps_dir).display().to_string(),
        ),
        spec(ENV_POSTGRES_HOST, VarKind::Str, DEFAULT_POSTGRES_HOST),
        spec(ENV_POSTGRES_PORT, VarKind::Port, DEFAULT_POSTGRES_PORT.to_string()),
        spec(ENV_POSTGRES_DB, VarKind::Str, ""),
        spec(ENV_POSTGRES_USER, VarKind::Str, ""),
        spec(ENV_POSTGRES_PASSWORD, VarKind::Secret, ""),
        spec(ENV_EMAIL_URL, VarKind::EmailUrl, DEFAULT_EMAIL_URL),
        spec(ENV_EMAIL_BACKEND, VarKind::Str, DEFAULT_EMAIL_BACKEND),
        spec(ENV_DEFAULT_FROM_EMAIL, VarKind::Str, DEFAULT_FROM_EMAIL),
        spec(ENV_SERVER_EMAIL, VarKind::Str, DEFAULT_SERVER_EMAIL),
        spec(ENV_BROKER_URL, VarKind::Str, DEFAULT_BROKER_URL),
        spec(ENV_RESULT_BACKEND, VarKind::Str, DEFAULT_RESULT_BACKEND),
        spec(ENV_ACCEPT_CONTENT, VarKind::List, DEFAULT_ACCEPT_CONTENT.join(",")),
        spec(ENV_TASK_SERIALIZER, VarKind::Str, DEFAULT_SERIALIZER),
        spec(ENV_RESULT_SERIALIZER, VarKind::Str, DEFAULT_SERIALIZER),
    ]
}
