use super::backend::KeyValueStore;
use crate::error::{HandyNoteError, Result};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

const STORAGE_FILENAME: &str = "storage.json";

/// File-backed store: every key lives in one JSON object file.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn storage_file(&self) -> PathBuf {
        self.root.join(STORAGE_FILENAME)
    }

    async fn ensure_dir(&self) -> Result<()> {
        if !fs::try_exists(&self.root).await.map_err(HandyNoteError::Io)? {
            fs::create_dir_all(&self.root)
                .await
                .map_err(HandyNoteError::Io)?;
        }
        Ok(())
    }

    async fn load_all(&self) -> Result<Map<String, Value>> {
        let path = self.storage_file();
        if !fs::try_exists(&path).await.map_err(HandyNoteError::Io)? {
            return Ok(Map::new());
        }
        let content = fs::read_to_string(&path)
            .await
            .map_err(HandyNoteError::Io)?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str(&content).map_err(HandyNoteError::Serialization)? {
            Value::Object(map) => Ok(map),
            _ => Err(HandyNoteError::Store(format!(
                "{} does not contain a JSON object",
                path.display()
            ))),
        }
    }

    async fn save_all(&self, data: &Map<String, Value>) -> Result<()> {
        self.ensure_dir().await?;

        let content =
            serde_json::to_string_pretty(data).map_err(HandyNoteError::Serialization)?;

        // Atomic write
        let tmp_file = self.root.join(format!(".storage-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content)
            .await
            .map_err(HandyNoteError::Io)?;
        fs::rename(&tmp_file, self.storage_file())
            .await
            .map_err(HandyNoteError::Io)?;

        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FsBackend {
    async fn get(&self, keys: &[&str]) -> Result<Map<String, Value>> {
        let mut data = self.load_all().await?;
        let mut found = Map::new();
        for key in keys {
            if let Some(value) = data.remove(*key) {
                found.insert((*key).to_string(), value);
            }
        }
        tracing::debug!(?keys, found = found.len(), "read from storage file");
        Ok(found)
    }

    async fn set(&self, entries: Map<String, Value>) -> Result<()> {
        let keys: Vec<String> = entries.keys().cloned().collect();
        let mut data = self.load_all().await?;
        data.extend(entries);
        self.save_all(&data).await?;
        tracing::debug!(?keys, "wrote to storage file");
        Ok(())
    }

    fn location(&self) -> String {
        self.storage_file().display().to_string()
    }
}
