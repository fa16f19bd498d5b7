//! Shared mock infrastructure for unit tests.
//!
//! Provides canned port implementations so each test file doesn't have to
//! re-define the same boilerplate.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

use anyhow::Result;
use crackle_cli::application::ports::{ConfigStore, DescriptorSource, PackageSource};
use crackle_cli::domain::PackageError;
use crackle_cli::domain::config::CrackleConfig;
use crackle_common::{Package, PackageDescriptor, PortMapping, VolumeMount};

// ── Fixtures ──────────────────────────────────────────────────────────────────

/// The descriptor used by the launch-command example.
pub fn example_descriptor() -> PackageDescriptor {
    PackageDescriptor {
        name: "myapp".to_string(),
        repository: "myapp:1.0".to_string(),
        command_start: Some("--flag".to_string()),
        homepage: Some("https://example.com/myapp".to_string()),
        short_description: Some("Example application".to_string()),
        long_description: None,
        ports: vec![
            PortMapping {
                local: "8080".to_string(),
                container: "80".to_string(),
            },
            PortMapping {
                local: "8443".to_string(),
                container: "443".to_string(),
            },
        ],
        volumes: vec![VolumeMount {
            local: "/data".to_string(),
            container: "/var/data".to_string(),
        }],
    }
}

// ── Mock: descriptor decoder ──────────────────────────────────────────────────

/// Returns the same descriptor for every path and counts decode calls.
pub struct DescriptorFixture {
    descriptor: PackageDescriptor,
    pub calls: Cell<usize>,
}

impl DescriptorFixture {
    pub fn new(descriptor: PackageDescriptor) -> Self {
        Self {
            descriptor,
            calls: Cell::new(0),
        }
    }
}

impl DescriptorSource for DescriptorFixture {
    fn decode(&self, _: &Path) -> Result<PackageDescriptor> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.descriptor.clone())
    }
}

/// Always fails like a missing file.
pub struct MissingDescriptor;

impl DescriptorSource for MissingDescriptor {
    fn decode(&self, path: &Path) -> Result<PackageDescriptor> {
        Err(PackageError::DecodeFailure {
            path: path.display().to_string(),
            source: Box::new(std::io::Error::from(std::io::ErrorKind::NotFound)),
        }
        .into())
    }
}

// ── Mock: record loader ───────────────────────────────────────────────────────

pub struct RecordFixture(pub Package);

impl PackageSource for RecordFixture {
    fn load(&self, _: &Path) -> Result<Package> {
        Ok(self.0.clone())
    }
}

// ── Mock: config store ────────────────────────────────────────────────────────

/// In-memory config store recording the last saved config.
#[derive(Default)]
pub struct MemoryConfigStore {
    pub config: RefCell<CrackleConfig>,
    pub saves: Cell<usize>,
}

impl ConfigStore for MemoryConfigStore {
    fn load(&self) -> Result<CrackleConfig> {
        Ok(self.config.borrow().clone())
    }
    fn save(&self, config: &CrackleConfig) -> Result<()> {
        *self.config.borrow_mut() = config.clone();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
    fn path(&self) -> Result<PathBuf> {
        Ok(PathBuf::from("/tmp/crackle-test/config.yaml"))
    }
}
