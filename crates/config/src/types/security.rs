//! Security and identity settings.
//!
//! Responsibilities:
//! - Define the debug flag, secret key, allowed hosts, and admin contacts.
//! - Provide the redacting serde helper used by every secret field.
//!
//! Invariants:
//! - The secret key is a `secrecy::SecretString` and is never serialized in clear.
//! - Managers are always the same list as admins.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

/// Module for serializing `SecretString` as a fixed placeholder.
pub(crate) mod redacted {
    use secrecy::{ExposeSecret, SecretString};
    use serde::Serializer;

    use crate::constants::REDACTED;

    /// Empty secrets serialize as an empty string so "unset" stays visible.
    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if secret.expose_secret().is_empty() {
            serializer.serialize_str("")
        } else {
            serializer.serialize_str(REDACTED)
        }
    }
}

/// A site administrator that receives error reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Admin {
    pub name: String,
    pub email: String,
}

/// Identity and security settings.
#[derive(Debug, Clone, Serialize)]
pub struct SecuritySettings {
    /// Framework debug mode. Never enable in production.
    pub debug: bool,
    #[serde(serialize_with = "redacted::serialize")]
    pub secret_key: SecretString,
    /// Host names the server is allowed to answer for, in declaration order.
    pub allowed_hosts: Vec<String>,
    pub admins: Vec<Admin>,
    /// People notified about broken links; mirrors `admins`.
    pub managers: Vec<Admin>,
}

impl SecuritySettings {
    /// Returns true when no secret key has been configured.
    pub fn secret_key_is_empty(&self) -> bool {
        self.secret_key.expose_secret().is_empty()
    }
}
