use handynote::defaults::{build_sections, DEFAULT_SECTIONS};
use handynote::model::{Counters, Item, Section};
use handynote::notebook::{AssumeYes, ItemUpdate, Notebook, SaveOutcome, SectionUpdate};
use handynote::store::fs_backend::FsBackend;
use handynote::store::{KeyValueStore, SectionStore, SECTIONS_KEY};
use handynote::validation::ValidationRules;
use tempfile::TempDir;

fn store(dir: &TempDir) -> SectionStore<FsBackend> {
    SectionStore::new(FsBackend::new(dir.path().to_path_buf()))
}

async fn open(dir: &TempDir) -> Notebook<FsBackend> {
    Notebook::load(store(dir), ValidationRules::default(), DEFAULT_SECTIONS)
        .await
        .unwrap()
}

#[tokio::test]
async fn test_empty_store_to_defaults() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);

    store.initialize_storage().await.unwrap();
    assert!(store.get_sections().await.unwrap().is_empty());

    let mut counters = Counters::default();
    let defaults = build_sections(DEFAULT_SECTIONS, &mut counters).unwrap();
    store.set_sections(&defaults).await.unwrap();
    assert_eq!(store.get_sections().await.unwrap(), defaults);
}

#[tokio::test]
async fn test_roundtrip_including_empty() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);

    let sections = vec![Section::new(
        "tmux-1",
        "tmux",
        vec![Item::new("1", "Ctrl+B %", "Split vertically")],
    )];
    store.set_sections(&sections).await.unwrap();
    assert_eq!(store.get_sections().await.unwrap(), sections);

    store.set_sections(&[]).await.unwrap();
    assert!(store.get_sections().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_edit_session_survives_restart() {
    let dir = TempDir::new().unwrap();

    {
        let mut notebook = open(&dir).await;
        let id = notebook.add_section().unwrap();
        let item = notebook.draft().unwrap().items[0].id.clone();
        notebook
            .update_section(&id, SectionUpdate::title("tmux"))
            .unwrap();
        notebook
            .update_item(
                &id,
                ItemUpdate::new(item)
                    .shortcut("Ctrl+B c")
                    .description("New window"),
            )
            .unwrap();
        assert!(matches!(
            notebook.save_section(&id).await.unwrap(),
            SaveOutcome::Saved(_)
        ));
        notebook.reorder_sections(3, 0).await.unwrap();
    }

    let mut notebook = open(&dir).await;
    let titles: Vec<&str> = notebook.sections().iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "tmux",
            "VS Code Shortcuts",
            "Terminator Shortcuts",
            "Ubuntu Shortcuts"
        ]
    );

    // Counters were persisted with the save, so new ids do not collide
    let next = notebook.add_section().unwrap();
    assert_eq!(next, "new-section-5");
    notebook.cancel_section(&next).unwrap();

    let id = notebook.sections()[1].id.clone();
    notebook.delete_section(&id, &AssumeYes).await.unwrap();
    assert_eq!(open(&dir).await.sections().len(), 3);
}

#[tokio::test]
async fn test_cancel_never_touches_disk() {
    let dir = TempDir::new().unwrap();
    let mut notebook = open(&dir).await;
    let before = std::fs::read_to_string(dir.path().join("storage.json")).unwrap();

    let id = notebook.sections()[0].id.clone();
    notebook.edit_section(&id).unwrap();
    notebook
        .update_section(&id, SectionUpdate::title("Mutated"))
        .unwrap();
    notebook.cancel_section(&id).unwrap();

    let new_id = notebook.add_section().unwrap();
    notebook.cancel_section(&new_id).unwrap();

    let after = std::fs::read_to_string(dir.path().join("storage.json")).unwrap();
    assert_eq!(before, after);
    assert_eq!(notebook.sections()[0].title, "VS Code Shortcuts");
}

#[tokio::test]
async fn test_stored_layout_uses_known_keys() {
    let dir = TempDir::new().unwrap();
    let notebook = open(&dir).await;

    let raw = notebook
        .store()
        .backend()
        .get(&[
            SECTIONS_KEY,
            "handynote_highest_section_index",
            "handynote_highest_item_index",
        ])
        .await
        .unwrap();

    assert_eq!(raw.len(), 3);
    assert_eq!(raw["handynote_highest_section_index"], 3);
    assert_eq!(raw["handynote_highest_item_index"], 13);
    assert_eq!(raw[SECTIONS_KEY][0]["title"], "VS Code Shortcuts");
    assert_eq!(raw[SECTIONS_KEY][0]["items"][0]["shortcut"], "F12");
}
