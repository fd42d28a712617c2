use crate::error::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Abstract interface for raw key-value storage.
///
/// Shaped like a browser extension's local storage area: values are JSON,
/// reads ask for a set of keys, writes hand over a set of entries that land
/// together. This trait handles the "how" of storage (filesystem vs memory),
/// while [`SectionStore`](super::section_store::SectionStore) handles the
/// "what" (sections, counters, defaults).
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the given keys. Keys that are not stored are left out of the map.
    async fn get(&self, keys: &[&str]) -> Result<Map<String, Value>>;

    /// Write all entries. Either every entry is stored or none is.
    async fn set(&self, entries: Map<String, Value>) -> Result<()>;

    /// Where the data lives, for display purposes.
    fn location(&self) -> String;
}
