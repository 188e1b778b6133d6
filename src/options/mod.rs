pub mod backend;
pub mod store;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

// Re-export common types
pub use backend::{ConfigBackend, JsonFileBackend, MemoryBackend};
pub use store::ConfigStore;

/// The user's content toggles.
///
/// Both keys are required when reading a stored mapping; a partial mapping is
/// rejected as a whole so the store can replace it with the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub include_synonyms: bool,
    pub include_examples: bool,
}

impl Configuration {
    pub const DEFAULT: Configuration = Configuration {
        include_synonyms: true,
        include_examples: true,
    };

    pub fn get(&self, key: ConfigKey) -> bool {
        match key {
            ConfigKey::IncludeSynonyms => self.include_synonyms,
            ConfigKey::IncludeExamples => self.include_examples,
        }
    }

    pub fn set(&mut self, key: ConfigKey, value: bool) {
        match key {
            ConfigKey::IncludeSynonyms => self.include_synonyms = value,
            ConfigKey::IncludeExamples => self.include_examples = value,
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Names of the recognized options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    IncludeSynonyms,
    IncludeExamples,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 2] = [ConfigKey::IncludeSynonyms, ConfigKey::IncludeExamples];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::IncludeSynonyms => "include_synonyms",
            ConfigKey::IncludeExamples => "include_examples",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "include_synonyms" => Ok(ConfigKey::IncludeSynonyms),
            "include_examples" => Ok(ConfigKey::IncludeExamples),
            other => Err(ConfigError::UnknownKey(other.to_string())),
        }
    }
}
