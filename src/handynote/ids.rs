//! Readable ids derived from the persisted "highest index" counters.
//!
//! Generating an id never advances a counter. Callers that hand the id out
//! must bump the matching counter themselves (see [`Counters::next_section_id`]).

use crate::error::{HandyNoteError, Result};
use crate::model::Counters;

fn next_index(highest: u64, counter: &'static str) -> Result<u64> {
    highest
        .checked_add(1)
        .ok_or(HandyNoteError::CounterExhausted(counter))
}

/// `"VS Code  Shortcuts"` with a highest index of 4 becomes `"vs-code-shortcuts-5"`.
///
/// The title is trimmed first. A blank title falls back to a `section` stem.
pub fn generate_section_id(title: &str, highest_section_index: u64) -> Result<String> {
    let slug = title
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    let stem = if slug.is_empty() { "section" } else { slug.as_str() };
    let index = next_index(highest_section_index, "section")?;
    Ok(format!("{}-{}", stem, index))
}

pub fn generate_item_id(highest_item_index: u64) -> Result<String> {
    Ok(next_index(highest_item_index, "item")?.to_string())
}

impl Counters {
    /// Generates a section id and advances the section counter past it.
    pub fn next_section_id(&mut self, title: &str) -> Result<String> {
        let id = generate_section_id(title, self.highest_section_index)?;
        self.highest_section_index += 1;
        Ok(id)
    }

    /// Generates an item id and advances the item counter past it.
    pub fn next_item_id(&mut self) -> Result<String> {
        let id = generate_item_id(self.highest_item_index)?;
        self.highest_item_index += 1;
        Ok(id)
    }
}
