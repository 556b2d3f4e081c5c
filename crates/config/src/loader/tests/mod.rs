//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test defaults and derived fields with explicit variable mappings.
//! - Test `.env` override loading and precedence over the process environment.
//! - Test process environment reading and empty/whitespace handling.
//! - Test coercion failures surface as configuration errors.
//!
//! Invariants:
//! - Tests that touch the process environment use `serial_test` and `temp_env`.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::collections::HashMap;
use std::sync::Mutex;

pub mod basic_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Build a variable mapping from `(name, value)` pairs.
pub fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
