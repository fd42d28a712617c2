use crate::error::{HandyNoteError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub shortcut: String,
    pub description: String,
}

impl Item {
    pub fn new(
        id: impl Into<String>,
        shortcut: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            shortcut: shortcut.into(),
            description: description.into(),
        }
    }

    /// An item with empty fields, as added by "add item".
    pub fn blank(id: impl Into<String>) -> Self {
        Self::new(id, "", "")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Section {
    pub fn new(id: impl Into<String>, title: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            items,
        }
    }

    pub fn item(&self, item_id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == item_id)
    }

    pub fn item_mut(&mut self, item_id: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == item_id)
    }

    /// First item id that occurs more than once, if any.
    pub fn duplicate_item_id(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .map(|item| item.id.as_str())
            .find(|id| !seen.insert(*id))
    }

    /// Fails with [`HandyNoteError::DuplicateItemId`] when two items share an id.
    pub fn ensure_unique_item_ids(&self) -> Result<()> {
        match self.duplicate_item_id() {
            Some(item) => Err(HandyNoteError::DuplicateItemId {
                section: self.id.clone(),
                item: item.to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// The whole ordered list of sections. This is the unit of persistence.
pub type Collection = Vec<Section>;

/// Highest indexes handed out so far, used to derive readable ids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    pub highest_section_index: u64,
    pub highest_item_index: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_item_id() {
        let mut section = Section::new(
            "a-1",
            "A",
            vec![Item::new("1", "F1", "Help"), Item::new("2", "F2", "Rename")],
        );
        assert_eq!(section.duplicate_item_id(), None);
        assert!(section.ensure_unique_item_ids().is_ok());

        section.items.push(Item::new("1", "F3", "Search"));
        assert_eq!(section.duplicate_item_id(), Some("1"));
        let err = section.ensure_unique_item_ids().unwrap_err();
        assert!(matches!(
            err,
            HandyNoteError::DuplicateItemId { section, item } if section == "a-1" && item == "1"
        ));
    }
}
