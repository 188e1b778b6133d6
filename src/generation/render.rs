use super::GeneratedContent;
use crate::options::Configuration;

pub const SEPARATOR: &str = "<br><br>";

/// Format generated content for the note's back field.
///
/// Toggles are taken from `cfg`, which callers read after the response
/// arrives. An enabled toggle whose field the service left out contributes
/// nothing.
pub fn render(content: &GeneratedContent, cfg: &Configuration) -> String {
    let mut out = format!("Definition: {}", content.definition);

    if cfg.include_synonyms {
        if let Some(synonyms) = content.synonyms.as_deref().filter(|s| !s.is_empty()) {
            out.push_str(SEPARATOR);
            out.push_str("Synonyms: ");
            out.push_str(&synonyms.join(", "));
        }
    }

    if cfg.include_examples {
        if let Some(example) = &content.example {
            out.push_str(SEPARATOR);
            out.push_str("Example: ");
            out.push_str(example);
        }
    }

    out
}
