//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs`, or `std::process`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use std::fmt;

use thiserror::Error;

// ── Package errors ────────────────────────────────────────────────────────────

/// Which side of a port or volume pair a violation was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Container,
    Local,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Container => f.write_str("Container"),
            Self::Local => f.write_str("Local"),
        }
    }
}

/// Free-text fields with a length limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    ShortDescription,
    LongDescription,
    Homepage,
    CommandStart,
}

impl TextField {
    /// Maximum length in characters.
    #[must_use]
    pub const fn limit(self) -> usize {
        match self {
            Self::ShortDescription => 200,
            Self::LongDescription => 25_000,
            Self::Homepage | Self::CommandStart => 100,
        }
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::ShortDescription => "short description",
            Self::LongDescription => "long description",
            Self::Homepage => "homepage",
            Self::CommandStart => "command start",
        };
        f.write_str(label)
    }
}

/// Errors raised while decoding, validating or translating a package.
#[derive(Debug, Error)]
pub enum PackageError {
    #[error("Package name '{0}' is invalid: use 2-50 lowercase letters, digits, '-', '_' or '*', starting and ending with a letter or digit")]
    InvalidPackageName(String),

    #[error("Repository name '{0}' is invalid: use 3-141 characters from A-Z, a-z, 0-9, '.', '/', ':' and '-'")]
    InvalidRepositoryName(String),

    #[error("{side} port \"{value}\" is invalid")]
    InvalidPort { side: Side, value: String },

    #[error("{side} volume \"{value}\" is too long")]
    InvalidVolume { side: Side, value: String },

    #[error("{field} is too long (>{limit} chars)")]
    TextTooLong { field: TextField, limit: usize },

    #[error("Repository '{0}' must have the form <repository>:<version>")]
    MalformedRepository(String),

    #[error("Username is not set. Run: crackle config set auth.username <name>")]
    MissingIdentity,

    #[error("Cannot decode package descriptor {path}")]
    DecodeFailure {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl PackageError {
    /// Builds the length violation for `field`.
    #[must_use]
    pub fn too_long(field: TextField) -> Self {
        Self::TextTooLong {
            field,
            limit: field.limit(),
        }
    }

    /// Stable machine-readable code used by `--json` error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidPackageName(_) => "invalid_package_name",
            Self::InvalidRepositoryName(_) => "invalid_repository_name",
            Self::InvalidPort { .. } => "invalid_port",
            Self::InvalidVolume { .. } => "invalid_volume",
            Self::TextTooLong { .. } => "text_too_long",
            Self::MalformedRepository(_) => "malformed_repository",
            Self::MissingIdentity => "missing_identity",
            Self::DecodeFailure { .. } => "decode_failure",
        }
    }

    /// Returns `true` for rule violations (as opposed to decode or
    /// identity failures).
    #[must_use]
    pub fn is_violation(&self) -> bool {
        !matches!(
            self,
            Self::MissingIdentity | Self::DecodeFailure { .. }
        )
    }
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key/value validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: '{value}'\n\n{reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}
