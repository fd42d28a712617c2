use crate::commands::{CmdMessage, ListedSection};
use crate::error::{HandyNoteError, Result};
use crate::model::Section;
use crate::notebook::Notebook;
use crate::store::KeyValueStore;
use crate::validation::SectionReport;

/// Resolves a selector to a section id. A selector is either a 1-based
/// position or a section id.
pub fn resolve_section<B: KeyValueStore>(notebook: &Notebook<B>, selector: &str) -> Result<String> {
    let selector = selector.trim();

    if let Ok(position) = selector.parse::<usize>() {
        return position
            .checked_sub(1)
            .and_then(|i| notebook.sections().get(i))
            .map(|s| s.id.clone())
            .ok_or_else(|| {
                HandyNoteError::Api(format!(
                    "No section at position {} ({} sections)",
                    position,
                    notebook.sections().len()
                ))
            });
    }

    notebook
        .section(selector)
        .map(|s| s.id.clone())
        .ok_or_else(|| HandyNoteError::Api(format!("No section matches: {}", selector)))
}

pub fn resolve_sections<B: KeyValueStore, I: AsRef<str>>(
    notebook: &Notebook<B>,
    selectors: &[I],
) -> Result<Vec<String>> {
    selectors
        .iter()
        .map(|s| resolve_section(notebook, s.as_ref()))
        .collect()
}

/// Item id at a 1-based position within a section.
pub fn resolve_item(section: &Section, position: usize) -> Result<String> {
    position
        .checked_sub(1)
        .and_then(|i| section.items.get(i))
        .map(|item| item.id.clone())
        .ok_or_else(|| {
            HandyNoteError::Api(format!(
                "No item at position {} in \"{}\" ({} items)",
                position,
                section.title,
                section.items.len()
            ))
        })
}

pub fn listed<B: KeyValueStore>(notebook: &Notebook<B>, id: &str) -> Option<ListedSection> {
    let position = notebook.position(id)?;
    Some(ListedSection {
        position: position + 1,
        section: notebook.sections()[position].clone(),
    })
}

/// One error message per validation error, naming the item where there is one.
pub fn report_messages(report: &SectionReport, section: &Section) -> Vec<CmdMessage> {
    let mut messages: Vec<CmdMessage> = report
        .title
        .iter()
        .map(|e| CmdMessage::error(e.message.clone()))
        .collect();

    for item_report in &report.items {
        let shortcut = section
            .item(&item_report.item_id)
            .map(|item| item.shortcut.trim())
            .unwrap_or_default();
        let label = if shortcut.is_empty() {
            format!("Item {}", item_report.position)
        } else {
            format!("Item {} ({})", item_report.position, shortcut)
        };
        for error in &item_report.errors {
            messages.push(CmdMessage::error(format!("{}: {}", label, error.message)));
        }
    }

    messages
}

#[cfg(test)]
pub(crate) async fn test_notebook(
    sections: Vec<Section>,
) -> Notebook<crate::store::mem_backend::MemBackend> {
    let store = crate::store::SectionStore::new(crate::store::mem_backend::MemBackend::new());
    store.set_sections(&sections).await.unwrap();
    let notebook = Notebook::load(store, Default::default(), &[]).await.unwrap();
    notebook.store().backend().clear_writes();
    notebook
}
