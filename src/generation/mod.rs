pub mod client;
pub mod render;

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::options::Configuration;

// Re-export common types
pub use client::{GenerationClient, REQUEST_TIMEOUT};
pub use render::{render, SEPARATOR};

/// Body posted to the generation service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    pub word: String,
    pub include_synonyms: bool,
    pub include_examples: bool,
}

impl GenerationRequest {
    pub fn new(word: &str, cfg: &Configuration) -> Self {
        Self {
            word: word.to_string(),
            include_synonyms: cfg.include_synonyms,
            include_examples: cfg.include_examples,
        }
    }
}

/// Content returned by a successful generation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneratedContent {
    pub definition: String,
    #[serde(default)]
    pub synonyms: Option<Vec<String>>,
    #[serde(default)]
    pub example: Option<String>,
}

pub type GenerationResult = std::result::Result<GeneratedContent, GenerationError>;
