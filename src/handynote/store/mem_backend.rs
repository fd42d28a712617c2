use super::backend::KeyValueStore;
use crate::error::{HandyNoteError, Result};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Mutex;

/// In-memory storage backend for testing.
///
/// Keeps a log of every successful `set` so tests can check what was, and
/// what was not, persisted.
#[derive(Default)]
pub struct MemBackend {
    data: Mutex<Map<String, Value>>,
    writes: Mutex<Vec<Map<String, Value>>>,
    simulate_write_error: Mutex<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *lock(&self.simulate_write_error) = simulate;
    }

    /// Every successful `set`, oldest first.
    pub fn writes(&self) -> Vec<Map<String, Value>> {
        lock(&self.writes).clone()
    }

    /// Values written for one key, oldest first.
    pub fn writes_to(&self, key: &str) -> Vec<Value> {
        lock(&self.writes)
            .iter()
            .filter_map(|entries| entries.get(key).cloned())
            .collect()
    }

    pub fn clear_writes(&self) {
        lock(&self.writes).clear();
    }

    /// Current raw value of a key.
    pub fn raw(&self, key: &str) -> Option<Value> {
        lock(&self.data).get(key).cloned()
    }
}

// A poisoned lock only means a test panicked mid-write; the map is still usable.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl KeyValueStore for MemBackend {
    async fn get(&self, keys: &[&str]) -> Result<Map<String, Value>> {
        let data = lock(&self.data);
        Ok(keys
            .iter()
            .filter_map(|key| data.get(*key).map(|v| ((*key).to_string(), v.clone())))
            .collect())
    }

    async fn set(&self, entries: Map<String, Value>) -> Result<()> {
        if *lock(&self.simulate_write_error) {
            return Err(HandyNoteError::Store("Simulated write error".to_string()));
        }
        lock(&self.data).extend(entries.clone());
        lock(&self.writes).push(entries);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
