//! Filesystem implementations of the package ports.

use std::path::Path;

use anyhow::{Context, Result};
use crackle_common::{Package, PackageDescriptor};

use crate::application::ports::{DescriptorSource, PackageSource};
use crate::domain::error::PackageError;

/// Reads descriptors from TOML files on disk.
pub struct TomlDescriptorFile;

impl DescriptorSource for TomlDescriptorFile {
    fn decode(&self, path: &Path) -> Result<PackageDescriptor> {
        let decode_failure = |source: Box<dyn std::error::Error + Send + Sync>| {
            PackageError::DecodeFailure {
                path: path.display().to_string(),
                source,
            }
        };
        let content = std::fs::read_to_string(path).map_err(|e| decode_failure(e.into()))?;
        let descriptor: PackageDescriptor =
            toml::from_str(&content).map_err(|e| decode_failure(e.into()))?;
        tracing::debug!(path = %path.display(), "decoded descriptor");
        Ok(descriptor)
    }
}

/// Reads persisted package records from JSON files on disk.
pub struct JsonPackageFile;

impl PackageSource for JsonPackageFile {
    fn load(&self, path: &Path) -> Result<Package> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("cannot parse {}", path.display()))
    }
}
