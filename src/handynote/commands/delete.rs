use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::notebook::{Confirm, DeleteOutcome, Notebook};
use crate::store::KeyValueStore;

use super::helpers::resolve_sections;

pub async fn run<B: KeyValueStore, I: AsRef<str>, C: Confirm + ?Sized>(
    notebook: &mut Notebook<B>,
    selectors: &[I],
    confirm: &C,
) -> Result<CmdResult> {
    // Resolve everything up front; positions shift once deletions start.
    let ids = resolve_sections(notebook, selectors)?;
    let mut result = CmdResult::default();

    for id in ids {
        if notebook.section(&id).is_none() {
            continue;
        }
        match notebook.delete_section(&id, confirm).await? {
            DeleteOutcome::Deleted(section) => {
                result.add_message(CmdMessage::success(format!(
                    "Section deleted: {}",
                    section.title
                )));
                result.affected_sections.push(section);
            }
            DeleteOutcome::Declined => {
                let title = notebook
                    .section(&id)
                    .map(|s| s.title.clone())
                    .unwrap_or(id);
                result.add_message(CmdMessage::info(format!("Kept: {}", title)));
            }
        }
    }

    Ok(result)
}
