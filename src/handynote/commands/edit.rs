use crate::commands::{CmdMessage, CmdResult, SectionEdit};
use crate::error::{HandyNoteError, Result};
use crate::notebook::{ItemUpdate, Notebook, SaveOutcome, SectionUpdate};
use crate::store::KeyValueStore;

use super::helpers::{report_messages, resolve_item, resolve_section};

/// Applies `edit` to one section and saves it. If the result does not
/// validate, the edit is cancelled and the stored section is left alone.
pub async fn run<B: KeyValueStore>(
    notebook: &mut Notebook<B>,
    selector: &str,
    edit: SectionEdit,
) -> Result<CmdResult> {
    let id = resolve_section(notebook, selector)?;

    if edit.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("Nothing to change."));
        return Ok(result);
    }

    notebook.edit_section(&id)?;

    if let Err(e) = apply(notebook, &id, edit) {
        notebook.cancel_section(&id)?;
        return Err(e);
    }

    let outcome = match notebook.save_section(&id).await {
        Ok(outcome) => outcome,
        Err(e) => {
            notebook.cancel_section(&id)?;
            return Err(e);
        }
    };

    let mut result = CmdResult::default();
    match outcome {
        SaveOutcome::Saved(section) => {
            result.add_message(CmdMessage::success(format!(
                "Section updated: {}",
                section.title
            )));
            result.affected_sections.push(section);
        }
        SaveOutcome::Invalid(report) => {
            let draft = notebook.draft().map(|d| (**d).clone());
            notebook.cancel_section(&id)?;
            if let Some(draft) = draft {
                result.messages.extend(report_messages(&report, &draft));
            }
            result.add_message(CmdMessage::warning("Changes discarded."));
            result = result.with_report(report);
        }
    }
    Ok(result)
}

fn apply<B: KeyValueStore>(notebook: &mut Notebook<B>, id: &str, edit: SectionEdit) -> Result<()> {
    if let Some(title) = edit.title {
        notebook.update_section(id, SectionUpdate::title(title))?;
    }

    let draft = notebook
        .draft()
        .map(|d| (**d).clone())
        .ok_or_else(|| HandyNoteError::NotEditing(id.to_string()))?;

    // Positions refer to the section as it was before any removal.
    for change in edit.item_changes {
        let item_id = resolve_item(&draft, change.position)?;
        notebook.update_item(
            id,
            ItemUpdate {
                id: item_id,
                shortcut: change.shortcut,
                description: change.description,
            },
        )?;
    }

    let removals = edit
        .remove_items
        .iter()
        .map(|position| resolve_item(&draft, *position))
        .collect::<Result<Vec<String>>>()?;
    for item_id in removals {
        // Same position given twice
        if notebook
            .draft()
            .is_some_and(|d| d.item(&item_id).is_some())
        {
            notebook.delete_item(id, &item_id)?;
        }
    }

    for (shortcut, description) in edit.add_items {
        let item_id = notebook.add_item(id)?;
        notebook.update_item(
            id,
            ItemUpdate::new(item_id)
                .shortcut(shortcut)
                .description(description),
        )?;
    }

    Ok(())
}
