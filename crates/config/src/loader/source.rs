//! Environment sources for the configuration loader.
//!
//! Responsibilities:
//! - Abstract "a mapping from variable name to string value" behind `EnvSource`.
//! - Read the process environment with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Type coercion (see parse.rs).
//! - .env file loading (handled by `ConfigLoader::load_dotenv`).
//!
//! Invariants:
//! - Empty or whitespace-only values are treated as unset by every source.
//! - `var()` values are trimmed; `secret()` values are returned verbatim.

use std::collections::{BTreeMap, HashMap};

/// A read-only mapping from environment variable names to values.
pub trait EnvSource {
    /// Return the raw value for `key`, or `None` if it is not set.
    fn raw(&self, key: &str) -> Option<String>;

    /// Return the trimmed value for `key`, treating empty and
    /// whitespace-only values as unset.
    fn var(&self, key: &str) -> Option<String> {
        self.raw(key).and_then(normalize)
    }

    /// Like `var()`, but keeps surrounding whitespace; it may be part of a
    /// password or key.
    fn secret(&self, key: &str) -> Option<String> {
        self.raw(key).filter(|s| !s.trim().is_empty())
    }
}

/// The environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn raw(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn raw(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn raw(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn raw(&self, key: &str) -> Option<String> {
        (**self).raw(key)
    }
}

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    ProcessEnv.var(key)
}

fn normalize(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == s.len() {
        // No trimming needed, return original to avoid allocation
        Some(s)
    } else {
        Some(trimmed.to_string())
    }
}
