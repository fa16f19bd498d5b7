//! Application service: configuration use-cases.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::config::{CrackleConfig, validate_config_key, validate_config_value};

/// Load configuration.
pub fn load_config(store: &impl ConfigStore) -> Result<CrackleConfig> {
    store.load()
}

/// Save configuration.
pub fn save_config(store: &impl ConfigStore, config: &CrackleConfig) -> Result<()> {
    store.save(config)
}

/// Validate and apply a single `key = value` setting, then persist it.
///
/// # Errors
///
/// Returns an error if the key or value is rejected, or the store fails.
pub fn set_value(store: &impl ConfigStore, key: &str, value: &str) -> Result<CrackleConfig> {
    validate_config_key(key)?;
    validate_config_value(key, value)?;

    let mut config = load_config(store)?;
    match key {
        "auth.username" => config.auth.username = Some(value.to_string()),
        _ => anyhow::bail!("Unknown setting: {key}"),
    }
    save_config(store, &config)?;
    tracing::debug!(key, "configuration updated");
    Ok(config)
}
