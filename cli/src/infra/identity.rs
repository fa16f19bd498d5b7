//! Identity provider backed by the client configuration.

use anyhow::Result;

use crate::application::ports::{ConfigStore, IdentityProvider};
use crate::domain::config::USERNAME_ENV;

/// Username resolved once from the environment and client config.
#[derive(Debug, Clone, Default)]
pub struct ConfigIdentity {
    username: String,
}

impl ConfigIdentity {
    /// Resolve the username: a non-empty `CRACKLE_USERNAME` wins, otherwise
    /// `auth.username` from `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read.
    pub fn resolve(store: &impl ConfigStore) -> Result<Self> {
        let env = std::env::var(USERNAME_ENV).ok();
        Self::from_sources(env.as_deref(), store)
    }

    fn from_sources(env: Option<&str>, store: &impl ConfigStore) -> Result<Self> {
        if let Some(name) = env.filter(|n| !n.is_empty()) {
            return Ok(Self {
                username: name.to_string(),
            });
        }
        let config = store.load()?;
        Ok(Self {
            username: config.username().to_string(),
        })
    }
}

impl IdentityProvider for ConfigIdentity {
    fn current_username(&self) -> String {
        self.username.clone()
    }
}
