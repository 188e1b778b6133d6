use tracing::{debug, info, warn};

use super::backend::ConfigBackend;
use super::{ConfigKey, Configuration};
use crate::error::ConfigError;

/// Single source of truth for the content toggles.
///
/// Reads fail open: callers that only need a usable configuration go through
/// [`ConfigStore::get_config`], which never errors. [`ConfigStore::load`]
/// exposes the underlying failure for callers that care.
pub struct ConfigStore {
    backend: Box<dyn ConfigBackend + Send + Sync>,
}

impl ConfigStore {
    pub fn new(backend: impl ConfigBackend + Send + Sync + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Read the stored configuration without any defaulting
    pub fn load(&self) -> Result<Configuration, ConfigError> {
        let value = self.backend.read()?.ok_or(ConfigError::Missing)?;
        Ok(serde_json::from_value(value)?)
    }

    /// Current configuration, or the defaults if the store can't supply one.
    ///
    /// An absent or malformed mapping is overwritten with the defaults so the
    /// next read sees a complete mapping.
    pub fn get_config(&self) -> Configuration {
        match self.load() {
            Ok(cfg) => cfg,
            Err(e) => {
                let repair = matches!(e, ConfigError::Missing | ConfigError::Malformed(_));
                if repair {
                    debug!("Replacing stored options with defaults: {}", e);
                    self.save_config(&Configuration::DEFAULT);
                } else {
                    warn!("Falling back to default options: {}", e);
                }
                Configuration::DEFAULT
            }
        }
    }

    /// Persist the whole mapping, replacing whatever was stored
    pub fn save_config(&self, cfg: &Configuration) -> bool {
        let result = serde_json::to_value(cfg)
            .map_err(ConfigError::from)
            .and_then(|value| self.backend.write(&value));

        match result {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to save options: {}", e);
                false
            }
        }
    }

    /// Overwrite a single option. Not atomic with respect to other writers.
    pub fn update_config(&self, key: ConfigKey, value: bool) -> bool {
        let mut cfg = self.get_config();
        cfg.set(key, value);
        info!("Setting {} = {}", key, value);
        self.save_config(&cfg)
    }

    pub fn restore_defaults(&self) -> bool {
        info!("Restoring default options");
        self.save_config(&Configuration::DEFAULT)
    }
}
