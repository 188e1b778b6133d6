use tracing::{info, warn};

use crate::error::GenerationError;
use crate::generation::{render, GenerationClient};
use crate::options::ConfigStore;

pub const FRONT: usize = 0;
pub const BACK: usize = 1;

/// A flashcard note as an ordered list of field strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Note {
    pub fields: Vec<String>,
}

impl Note {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            fields: vec![front.into(), back.into()],
        }
    }

    pub fn front(&self) -> Option<&str> {
        self.fields.get(FRONT).map(String::as_str)
    }

    pub fn back(&self) -> Option<&str> {
        self.fields.get(BACK).map(String::as_str)
    }
}

/// Surface for showing a message to the user
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// How a single generate action ended
#[derive(Debug)]
pub enum Outcome {
    /// Nothing to generate; no request was made
    Aborted,
    /// The back field now holds this content
    Succeeded(String),
    Failed(GenerationError),
}

/// Wires the note, the option store and the client together for one editor
pub struct Editor<'a> {
    store: &'a ConfigStore,
    client: &'a GenerationClient,
    notifier: &'a dyn Notifier,
}

impl<'a> Editor<'a> {
    pub fn new(
        store: &'a ConfigStore,
        client: &'a GenerationClient,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            store,
            client,
            notifier,
        }
    }

    /// Fill the note's back field from its front field.
    ///
    /// The note is only written on success. Every failure is reported through
    /// the notifier.
    pub async fn generate(&self, note: &mut Note) -> Outcome {
        let word = note.front().unwrap_or_default().to_string();

        if note.fields.len() <= BACK {
            warn!("Note has {} field(s), cannot write back field", note.fields.len());
            self.notifier.notify("This note needs a front and a back field.");
            return Outcome::Aborted;
        }

        let content = match self.client.generate(&word, self.store).await {
            Ok(content) => content,
            Err(e @ GenerationError::EmptyInput) => {
                self.notifier.notify(&e.to_string());
                return Outcome::Aborted;
            }
            Err(e) => {
                self.notifier.notify(&e.to_string());
                return Outcome::Failed(e);
            }
        };

        // Options are read again so rendering reflects what is stored now
        let rendered = render(&content, &self.store.get_config());
        note.fields[BACK] = rendered.clone();

        info!("Updated back field for '{}'", word.trim());
        Outcome::Succeeded(rendered)
    }
}
