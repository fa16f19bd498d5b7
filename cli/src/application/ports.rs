//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` and `crackle_common`, never
//! from `crate::infra`, `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};

use anyhow::Result;
use crackle_common::{Package, PackageDescriptor};

use crate::domain::config::CrackleConfig;

pub use crate::domain::package::IdentityProvider;

// ── Package Ports ─────────────────────────────────────────────────────────────

/// Decodes a package descriptor file.
///
/// Decode failures (missing file, malformed syntax) are returned as
/// `PackageError::DecodeFailure` so callers can pass them through unchanged.
pub trait DescriptorSource {
    /// Read and decode the descriptor at `path`.
    fn decode(&self, path: &Path) -> Result<PackageDescriptor>;
}

/// Loads a persisted package record.
pub trait PackageSource {
    /// Read and decode the record at `path`.
    fn load(&self, path: &Path) -> Result<Package>;
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts client configuration persistence.
pub trait ConfigStore {
    /// Load the configuration, returning defaults when no file exists.
    fn load(&self) -> Result<CrackleConfig>;
    /// Persist the configuration.
    fn save(&self, config: &CrackleConfig) -> Result<()>;
    /// Location of the configuration file.
    fn path(&self) -> Result<PathBuf>;
}
