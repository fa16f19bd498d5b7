//! Domain types and validators for crackle client configuration.
//!
//! Pure functions only. No I/O, no filesystem access.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const VALID_CONFIG_KEYS: &[&str] = &["auth.username"];

/// Environment variable that relocates the config file.
pub const CONFIG_ENV: &str = "CRACKLE_CONFIG";

/// Environment variable that overrides `auth.username`.
pub const USERNAME_ENV: &str = "CRACKLE_USERNAME";

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.crackle/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CrackleConfig {
    /// Registry credentials.
    pub auth: AuthConfig,
}

/// Authentication settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AuthConfig {
    /// Account recorded as the owner of packages created from descriptors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl CrackleConfig {
    /// Configured username, or `""` when unset.
    #[must_use]
    pub fn username(&self) -> &str {
        self.auth.username.as_deref().unwrap_or_default()
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a configuration key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<()> {
    if !VALID_CONFIG_KEYS.contains(&key) {
        return Err(ConfigError::UnknownKey {
            key: key.to_string(),
            valid: VALID_CONFIG_KEYS.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validates a configuration value for the given key.
///
/// # Errors
///
/// Returns an error if the value is not valid for the key.
pub fn validate_config_value(key: &str, value: &str) -> Result<()> {
    if key == "auth.username" && (value.is_empty() || value.chars().any(char::is_whitespace)) {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: "Usernames must be non-empty and contain no whitespace".to_string(),
        }
        .into());
    }
    Ok(())
}

// ── Unit tests ───────────────────────────────────────────────────────────────
