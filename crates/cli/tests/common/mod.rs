//! Shared test utilities for redirects-settings integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Clear every variable the settings loader reads so host values never leak in.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - Tests that exercise `.env` loading remove `DOTENV_DISABLED` explicitly.

use assert_cmd::Command;
use std::path::Path;

/// Every variable the loader or the binary reads.
pub const LOADER_VARS: &[&str] = &[
    "DJANGO_DEBUG",
    "DJANGO_SECRET_KEY",
    "DJANGO_ADMINS",
    "DJANGO_ALLOWED_HOSTS",
    "DJANGO_STATIC_ROOT",
    "DJANGO_MEDIA_ROOT",
    "POSTGRES_HOST",
    "POSTGRES_PORT",
    "POSTGRES_DB",
    "POSTGRES_USER",
    "POSTGRES_PASSWORD",
    "DJANGO_EMAIL_URL",
    "DJANGO_EMAIL_BACKEND",
    "DJANGO_DEFAULT_FROM_EMAIL",
    "DJANGO_SERVER_EMAIL",
    "BROKER_URL",
    "CELERY_RESULT_BACKEND",
    "CELERY_ACCEPT_CONTENT",
    "CELERY_TASK_SERIALIZER",
    "CELERY_RESULT_SERIALIZER",
    "APP_ROOT_DIR",
    "RUST_LOG",
];

/// Returns a hermetic `redirects-settings` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - All loader variables are cleared.
pub fn settings_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("redirects-settings");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    for var in LOADER_VARS {
        cmd.env_remove(var);
    }

    cmd
}

/// Returns a hermetic command rooted at `root` with `.env` loading enabled.
#[allow(dead_code)]
pub fn settings_cmd_with_dotenv(root: &Path) -> Command {
    let mut cmd = settings_cmd();
    cmd.env_remove("DOTENV_DISABLED");
    cmd.arg("--root-dir").arg(root);
    cmd
}

/// Environment that passes `check --strict` with debug off.
#[allow(dead_code)]
pub fn production_env(cmd: &mut Command) -> &mut Command {
    cmd.env("DJANGO_SECRET_KEY", "prod-secret-key-value")
        .env("DJANGO_ALLOWED_HOSTS", "redirects.example.com")
        .env("POSTGRES_DB", "redirects")
        .env("POSTGRES_USER", "redirects")
        .env("POSTGRES_PASSWORD", "prod-db-password")
}
