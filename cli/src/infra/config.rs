//! YAML-backed `ConfigStore`.
//!
//! The file lives at `$CRACKLE_CONFIG` when that is set to a non-empty path,
//! otherwise at `~/.crackle/config.yaml`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::domain::config::{CONFIG_ENV, CrackleConfig, validate_config_value};

/// Client configuration persisted as YAML.
///
/// Without a pinned `location` the home-directory default is resolved on
/// every access.
#[derive(Debug, Clone, Default)]
pub struct YamlConfigStore {
    location: Option<PathBuf>,
}

impl YamlConfigStore {
    /// Store honouring the `CRACKLE_CONFIG` override.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            location: override_path(std::env::var(CONFIG_ENV).ok().as_deref()),
        }
    }

    /// Store pinned to an explicit file.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            location: Some(path.into()),
        }
    }

    fn read(path: &Path) -> Result<CrackleConfig> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let config: CrackleConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("cannot parse {}", path.display()))?;
        if let Some(username) = &config.auth.username {
            validate_config_value("auth.username", username)
                .with_context(|| format!("bad stored value in {}", path.display()))?;
        }
        Ok(config)
    }
}

/// An empty override counts as unset.
fn override_path(value: Option<&str>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<CrackleConfig> {
        let path = self.path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(CrackleConfig::default());
        }
        Self::read(&path)
    }

    fn save(&self, config: &CrackleConfig) -> Result<()> {
        let path = self.path()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("cannot create {}", parent.display()))?;
        }
        let content = serde_yaml::to_string(config).context("cannot serialize config")?;
        std::fs::write(&path, content)
            .with_context(|| format!("cannot write {}", path.display()))?;

        // Holds the registry account name; keep it owner-only.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600))
                .with_context(|| format!("cannot set permissions on {}", path.display()))?;
        }
        tracing::debug!(path = %path.display(), "saved config");
        Ok(())
    }

    fn path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.location {
            return Ok(path.clone());
        }
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
        Ok(home.join(".crackle").join("config.yaml"))
    }
}
