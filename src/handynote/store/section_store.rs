use super::backend::KeyValueStore;
use super::{HIGHEST_ITEM_INDEX_KEY, HIGHEST_SECTION_INDEX_KEY, SECTIONS_KEY};
use crate::error::{HandyNoteError, Result};
use crate::ids;
use crate::model::{Collection, Counters, Section};
use serde_json::{json, Map, Value};

/// Reads and writes the section collection and the id counters.
///
/// Every mutation is a whole-document replacement of the collection. The
/// convenience operations (`add_section`, `update_section`, `delete_section`)
/// are read-modify-write sequences over the full collection.
pub struct SectionStore<B: KeyValueStore> {
    backend: B,
}

impl<B: KeyValueStore> SectionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn location(&self) -> String {
        self.backend.location()
    }

    /// Makes sure the collection and both counters exist, without touching
    /// values that are already stored. Safe to call any number of times.
    pub async fn initialize_storage(&self) -> Result<()> {
        let existing = self
            .backend
            .get(&[SECTIONS_KEY, HIGHEST_SECTION_INDEX_KEY, HIGHEST_ITEM_INDEX_KEY])
            .await?;

        let mut missing = Map::new();
        if !existing.contains_key(SECTIONS_KEY) {
            missing.insert(SECTIONS_KEY.to_string(), json!([]));
        }
        if !existing.contains_key(HIGHEST_SECTION_INDEX_KEY) {
            missing.insert(HIGHEST_SECTION_INDEX_KEY.to_string(), json!(0));
        }
        if !existing.contains_key(HIGHEST_ITEM_INDEX_KEY) {
            missing.insert(HIGHEST_ITEM_INDEX_KEY.to_string(), json!(0));
        }

        if missing.is_empty() {
            tracing::debug!("storage already initialized");
            return Ok(());
        }

        let keys: Vec<&String> = missing.keys().collect();
        tracing::info!(?keys, "initializing storage");
        self.backend.set(missing).await
    }

    pub async fn get_sections(&self) -> Result<Collection> {
        let found = self.backend.get(&[SECTIONS_KEY]).await?;
        match found.get(SECTIONS_KEY) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(value) => {
                serde_json::from_value(value.clone()).map_err(HandyNoteError::Serialization)
            }
        }
    }

    /// Replaces the whole stored collection.
    pub async fn set_sections(&self, sections: &[Section]) -> Result<()> {
        let mut entries = Map::new();
        entries.insert(SECTIONS_KEY.to_string(), sections_value(sections)?);
        self.write(entries).await
    }

    pub async fn get_highest_section_index(&self) -> Result<u64> {
        let found = self.backend.get(&[HIGHEST_SECTION_INDEX_KEY]).await?;
        read_counter(&found, HIGHEST_SECTION_INDEX_KEY)
    }

    pub async fn get_highest_item_index(&self) -> Result<u64> {
        let found = self.backend.get(&[HIGHEST_ITEM_INDEX_KEY]).await?;
        read_counter(&found, HIGHEST_ITEM_INDEX_KEY)
    }

    pub async fn get_counters(&self) -> Result<Counters> {
        let found = self
            .backend
            .get(&[HIGHEST_SECTION_INDEX_KEY, HIGHEST_ITEM_INDEX_KEY])
            .await?;
        Ok(Counters {
            highest_section_index: read_counter(&found, HIGHEST_SECTION_INDEX_KEY)?,
            highest_item_index: read_counter(&found, HIGHEST_ITEM_INDEX_KEY)?,
        })
    }

    pub async fn set_highest_section_index(&self, index: u64) -> Result<()> {
        let mut entries = Map::new();
        entries.insert(HIGHEST_SECTION_INDEX_KEY.to_string(), json!(index));
        self.write(entries).await
    }

    pub async fn set_highest_item_index(&self, index: u64) -> Result<()> {
        let mut entries = Map::new();
        entries.insert(HIGHEST_ITEM_INDEX_KEY.to_string(), json!(index));
        self.write(entries).await
    }

    /// Writes the collection and both counters in a single backend `set`.
    pub async fn commit(&self, sections: &[Section], counters: Counters) -> Result<()> {
        let mut entries = Map::new();
        entries.insert(SECTIONS_KEY.to_string(), sections_value(sections)?);
        entries.insert(
            HIGHEST_SECTION_INDEX_KEY.to_string(),
            json!(counters.highest_section_index),
        );
        entries.insert(
            HIGHEST_ITEM_INDEX_KEY.to_string(),
            json!(counters.highest_item_index),
        );
        self.write(entries).await
    }

    /// Next section id for `title`. The stored counter is not advanced.
    pub async fn generate_section_id(&self, title: &str) -> Result<String> {
        let highest = self.get_highest_section_index().await?;
        ids::generate_section_id(title, highest)
    }

    /// Next item id. The stored counter is not advanced.
    pub async fn generate_item_id(&self) -> Result<String> {
        let highest = self.get_highest_item_index().await?;
        ids::generate_item_id(highest)
    }

    pub async fn add_section(&self, section: Section) -> Result<()> {
        section.ensure_unique_item_ids()?;
        let mut sections = self.get_sections().await?;
        if sections.iter().any(|s| s.id == section.id) {
            return Err(HandyNoteError::DuplicateSectionId(section.id));
        }
        sections.push(section);
        self.set_sections(&sections).await
    }

    /// Replaces the section stored under `id`. The replacement may carry a
    /// new id as long as no other section already uses it.
    pub async fn update_section(&self, id: &str, section: Section) -> Result<()> {
        section.ensure_unique_item_ids()?;
        let mut sections = self.get_sections().await?;
        if section.id != id && sections.iter().any(|s| s.id == section.id) {
            return Err(HandyNoteError::DuplicateSectionId(section.id));
        }
        let slot = sections
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| HandyNoteError::SectionNotFound(id.to_string()))?;
        *slot = section;
        self.set_sections(&sections).await
    }

    pub async fn delete_section(&self, id: &str) -> Result<Section> {
        let mut sections = self.get_sections().await?;
        let position = sections
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| HandyNoteError::SectionNotFound(id.to_string()))?;
        let removed = sections.remove(position);
        self.set_sections(&sections).await?;
        Ok(removed)
    }

    async fn write(&self, entries: Map<String, Value>) -> Result<()> {
        let keys: Vec<String> = entries.keys().cloned().collect();
        match self.backend.set(entries).await {
            Ok(()) => {
                tracing::debug!(?keys, "persisted");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(?keys, error = %e, "write failed");
                Err(e)
            }
        }
    }
}

fn sections_value(sections: &[Section]) -> Result<Value> {
    serde_json::to_value(sections).map_err(HandyNoteError::Serialization)
}

fn read_counter(found: &Map<String, Value>, key: &str) -> Result<u64> {
    match found.get(key) {
        None | Some(Value::Null) => Ok(0),
        Some(value) => value.as_u64().ok_or_else(|| {
            HandyNoteError::Store(format!("{} is not a non-negative integer: {}", key, value))
        }),
    }
}
