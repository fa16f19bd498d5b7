// lib/crates/crackle-common/src/package.rs

use serde::{Deserialize, Serialize};

/// Package descriptor (`crackle.toml`) as authored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDescriptor {
    #[serde(alias = "package")]
    pub name: String,
    /// Combined `"<repo-path>:<version>"` image reference.
    pub repository: String,
    #[serde(
        default,
        alias = "command_start",
        skip_serializing_if = "Option::is_none"
    )]
    pub command_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(
        default,
        alias = "short_description",
        skip_serializing_if = "Option::is_none"
    )]
    pub short_description: Option<String>,
    #[serde(
        default,
        alias = "long_description",
        skip_serializing_if = "Option::is_none"
    )]
    pub long_description: Option<String>,
    #[serde(default)]
    pub ports: Vec<PortMapping>,
    #[serde(default)]
    pub volumes: Vec<VolumeMount>,
}

/// Canonical package record, as persisted by the registry.
///
/// `repository` holds the image path only; the tag lives in `version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub name: String,
    pub repository: String,
    pub version: String,
    /// Username of the account that published the package.
    pub owner: String,
    /// Download counter. Starts at zero; incremented by the registry.
    #[serde(default)]
    pub pulls: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(default)]
    pub ports: Vec<PortMapping>,
    #[serde(default)]
    pub volumes: Vec<VolumeMount>,
}

impl Package {
    /// Image reference with the version re-attached (`repo:version`).
    #[must_use]
    pub fn image_reference(&self) -> String {
        format!("{}:{}", self.repository, self.version)
    }
}

/// Host port published to a container port. Both sides are kept as the
/// authored strings; range checks happen during validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortMapping {
    pub local: String,
    pub container: String,
}

/// Host path bind-mounted into the container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeMount {
    pub local: String,
    pub container: String,
}
