use serde_json::Value;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

use crate::error::ConfigError;

/// Raw key/value persistence used by [`ConfigStore`](super::ConfigStore).
///
/// `read` returns `Ok(None)` when nothing has been stored yet.
pub trait ConfigBackend {
    fn read(&self) -> Result<Option<Value>, ConfigError>;
    fn write(&self, value: &Value) -> Result<(), ConfigError>;
}

/// Stores the mapping as a JSON document on disk
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigBackend for JsonFileBackend {
    fn read(&self) -> Result<Option<Value>, ConfigError> {
        debug!("Reading options from {:?}", self.path);

        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if content.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        // Bytes that aren't UTF-8 surface as Malformed, like any other bad JSON
        Ok(Some(serde_json::from_slice(&content)?))
    }

    fn write(&self, value: &Value) -> Result<(), ConfigError> {
        debug!("Writing options to {:?}", self.path);

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(value)?;

        // Write to a sibling temp file, then rename over the target
        let temp_path = self.path.with_extension("tmp");
        {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(content.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&temp_path, &self.path)?;

        Ok(())
    }
}

/// Keeps the mapping in process memory, for hosts that persist it themselves
#[derive(Debug, Default)]
pub struct MemoryBackend {
    value: Mutex<Option<Value>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: Value) -> Self {
        Self {
            value: Mutex::new(Some(value)),
        }
    }

    /// Current stored value, if any
    pub fn snapshot(&self) -> Option<Value> {
        self.value.lock().ok().and_then(|guard| guard.clone())
    }
}

impl ConfigBackend for MemoryBackend {
    fn read(&self) -> Result<Option<Value>, ConfigError> {
        let guard = self
            .value
            .lock()
            .map_err(|e| ConfigError::Backend(e.to_string()))?;
        Ok(guard.clone())
    }

    fn write(&self, value: &Value) -> Result<(), ConfigError> {
        let mut guard = self
            .value
            .lock()
            .map_err(|e| ConfigError::Backend(e.to_string()))?;
        *guard = Some(value.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_as_none() -> std::io::Result<()> {
        let dir = TempDir::new()?;
        let backend = JsonFileBackend::new(dir.path().join("wordgpt.json"));

        assert!(backend.read().unwrap().is_none());
        Ok(())
    }

    #[test]
    fn test_blank_file_reads_as_none() -> std::io::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("wordgpt.json");
        fs::write(&path, "  \n")?;

        let backend = JsonFileBackend::new(&path);
        assert!(backend.read().unwrap().is_none());
        Ok(())
    }

    #[test]
    fn test_corrupt_file_is_malformed() -> std::io::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("wordgpt.json");
        fs::write(&path, "{not json")?;

        let backend = JsonFileBackend::new(&path);
        assert!(matches!(backend.read(), Err(ConfigError::Malformed(_))));
        Ok(())
    }

    #[test]
    fn test_invalid_utf8_is_malformed() -> std::io::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("wordgpt.json");
        fs::write(&path, b"\xff\xfe\x00{")?;

        let backend = JsonFileBackend::new(&path);
        assert!(matches!(backend.read(), Err(ConfigError::Malformed(_))));
        Ok(())
    }

    #[test]
    fn test_write_creates_parent_directories() -> std::io::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("nested").join("wordgpt.json");
        let backend = JsonFileBackend::new(&path);

        backend.write(&json!({"include_synonyms": true})).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
        assert_eq!(
            backend.read().unwrap(),
            Some(json!({"include_synonyms": true}))
        );
        Ok(())
    }

    #[test]
    fn test_memory_backend() {
        let backend = MemoryBackend::new();
        assert!(backend.read().unwrap().is_none());

        backend.write(&json!({"a": 1})).unwrap();
        assert_eq!(backend.snapshot(), Some(json!({"a": 1})));
    }
}
