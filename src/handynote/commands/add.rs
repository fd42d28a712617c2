use crate::commands::{CmdMessage, CmdResult, SectionInput};
use crate::error::Result;
use crate::notebook::{ItemUpdate, Notebook, SaveOutcome, SectionUpdate};
use crate::store::KeyValueStore;

use super::helpers::report_messages;

/// Creates a section through the edit protocol: add, fill the draft, save.
/// A draft that fails validation is discarded and its report returned.
pub async fn run<B: KeyValueStore>(
    notebook: &mut Notebook<B>,
    input: SectionInput,
) -> Result<CmdResult> {
    let id = notebook.add_section()?;

    if let Err(e) = fill_draft(notebook, &id, input) {
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
                "Section added ({}): {}",
                notebook.sections().len(),
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
            result.add_message(CmdMessage::warning("Section not added."));
            result = result.with_report(report);
        }
    }
    Ok(result)
}

fn fill_draft<B: KeyValueStore>(
    notebook: &mut Notebook<B>,
    id: &str,
    input: SectionInput,
) -> Result<()> {
    notebook.update_section(id, SectionUpdate::title(input.title))?;

    // A new section starts with one blank item; it takes the first pair.
    let blank_id = notebook
        .draft()
        .and_then(|d| d.items.first())
        .map(|item| item.id.clone());

    let mut pairs = input.items.into_iter();
    match (blank_id, pairs.next()) {
        (Some(blank_id), Some((shortcut, description))) => {
            notebook.update_item(
                id,
                ItemUpdate::new(blank_id)
                    .shortcut(shortcut)
                    .description(description),
            )?;
        }
        (Some(blank_id), None) => {
            notebook.delete_item(id, &blank_id)?;
        }
        (None, Some((shortcut, description))) => {
            let item_id = notebook.add_item(id)?;
            notebook.update_item(
                id,
                ItemUpdate::new(item_id)
                    .shortcut(shortcut)
                    .description(description),
            )?;
        }
        (None, None) => {}
    }

    for (shortcut, description) in pairs {
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
