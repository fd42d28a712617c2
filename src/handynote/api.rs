//! # API Facade
//!
//! A thin layer over the commands and the single entry point for UI clients.
//! It dispatches to `commands/*.rs`, turns raw user input (selectors, 1-based
//! positions) into what the commands expect, and returns `CmdResult`s.
//!
//! It does no printing and holds no business logic.
//!
//! `HandyNoteApi<B>` is generic over the storage backend: `FsBackend` in the
//! binary, `MemBackend` in tests.

use crate::commands;
use crate::error::Result;
use crate::notebook::{Confirm, Notebook};
use crate::store::KeyValueStore;
use std::path::{Path, PathBuf};

pub struct HandyNoteApi<B: KeyValueStore> {
    notebook: Notebook<B>,
    data_dir: PathBuf,
}

impl<B: KeyValueStore> HandyNoteApi<B> {
    pub fn new(notebook: Notebook<B>, data_dir: PathBuf) -> Self {
        Self { notebook, data_dir }
    }

    pub fn list_sections(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.notebook)
    }

    pub fn view_sections<I: AsRef<str>>(&self, selectors: &[I]) -> Result<commands::CmdResult> {
        commands::view::run(&self.notebook, selectors)
    }

    pub async fn add_section(
        &mut self,
        input: commands::SectionInput,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.notebook, input).await
    }

    pub async fn edit_section(
        &mut self,
        selector: &str,
        edit: commands::SectionEdit,
    ) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.notebook, selector, edit).await
    }

    pub async fn delete_sections<I: AsRef<str>, C: Confirm + ?Sized>(
        &mut self,
        selectors: &[I],
        confirm: &C,
    ) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.notebook, selectors, confirm).await
    }

    pub async fn move_section(&mut self, from: usize, to: usize) -> Result<commands::CmdResult> {
        commands::reorder::run(&mut self.notebook, from, to).await
    }

    pub async fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.notebook).await
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn notebook(&self) -> &Notebook<B> {
        &self.notebook
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{
    CmdMessage, CmdResult, ItemChange, ListedSection, MessageLevel, SectionEdit, SectionInput,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Item, Section};
    use crate::notebook::AssumeYes;
    use crate::store::mem_backend::MemBackend;
    use crate::store::SectionStore;
    use crate::validation::ValidationRules;
    use tempfile::TempDir;

    async fn api(temp: &TempDir) -> HandyNoteApi<MemBackend> {
        let store = SectionStore::new(MemBackend::new());
        store
            .set_sections(&[
                Section::new("a-1", "A", vec![Item::new("1", "F1", "Help")]),
                Section::new("b-2", "B", Vec::new()),
            ])
            .await
            .unwrap();
        let notebook = Notebook::load(store, ValidationRules::default(), &[])
            .await
            .unwrap();
        HandyNoteApi::new(notebook, temp.path().to_path_buf())
    }

    #[tokio::test]
    async fn dispatches_reads() {
        let temp = TempDir::new().unwrap();
        let api = api(&temp).await;

        assert_eq!(api.list_sections().unwrap().listed_sections.len(), 2);
        let viewed = api.view_sections(&["b-2"]).unwrap();
        assert_eq!(viewed.listed_sections[0].section.title, "B");
    }

    #[tokio::test]
    async fn dispatches_writes() {
        let temp = TempDir::new().unwrap();
        let mut api = api(&temp).await;

        api.add_section(SectionInput::new("C").item("F2", "Rename"))
            .await
            .unwrap();
        api.move_section(3, 1).await.unwrap();
        api.edit_section(
            "1",
            SectionEdit {
                title: Some("Cee".into()),
                ..SectionEdit::default()
            },
        )
        .await
        .unwrap();
        api.delete_sections(&["a-1"], &AssumeYes).await.unwrap();

        let titles: Vec<&str> = api
            .notebook()
            .sections()
            .iter()
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Cee", "B"]);
    }

    #[tokio::test]
    async fn config_uses_data_dir() {
        let temp = TempDir::new().unwrap();
        let api = api(&temp).await;

        api.config(ConfigAction::Set("seed-defaults".into(), "false".into()))
            .unwrap();
        assert!(temp.path().join("config.json").exists());
        assert_eq!(api.data_dir(), temp.path());
    }
}
