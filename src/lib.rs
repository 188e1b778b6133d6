pub mod config;
pub mod editor;
pub mod error;
pub mod generation;
pub mod options;

// Re-export error types for convenience
pub use error::{ConfigError, Error, GenerationError, Result};

// Common types used across the application
pub use editor::{Editor, Note, Notifier, Outcome};
pub use generation::{render, GeneratedContent, GenerationClient, GenerationResult};
pub use options::{ConfigKey, ConfigStore, Configuration};
