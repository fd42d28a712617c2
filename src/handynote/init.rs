use crate::api::HandyNoteApi;
use crate::config::HandyNoteConfig;
use crate::defaults::{SeedSection, DEFAULT_SECTIONS};
use crate::error::{HandyNoteError, Result};
use crate::notebook::Notebook;
use crate::store::fs_backend::FsBackend;
use crate::store::SectionStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Overrides the platform data dir. Used by tests and for portable setups.
pub const HOME_ENV: &str = "HANDYNOTE_HOME";

pub struct HandyNoteContext {
    pub api: HandyNoteApi<FsBackend>,
    pub config: HandyNoteConfig,
}

/// `$HANDYNOTE_HOME` if set and non-empty, otherwise the platform data dir.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }

    ProjectDirs::from("com", "handynote", "handynote")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            HandyNoteError::Api(format!(
                "Could not determine a data directory; set {}",
                HOME_ENV
            ))
        })
}

/// Loads config, opens the store in `data_dir`, and loads the notebook,
/// seeding defaults into an empty collection when the config allows it.
pub async fn initialize(data_dir: &Path) -> Result<HandyNoteContext> {
    let config = HandyNoteConfig::load(data_dir)?;
    let seed: &[SeedSection] = if config.seed_defaults {
        DEFAULT_SECTIONS
    } else {
        &[]
    };

    let store = SectionStore::new(FsBackend::new(data_dir.to_path_buf()));
    let notebook = Notebook::load(store, config.rules(), seed).await?;
    tracing::debug!(data_dir = %data_dir.display(), "context initialized");

    let api = HandyNoteApi::new(notebook, data_dir.to_path_buf());
    Ok(HandyNoteContext { api, config })
}
