use crate::commands::{CmdResult, ListedSection};
use crate::error::{HandyNoteError, Result};
use crate::notebook::Notebook;
use crate::store::KeyValueStore;

use super::helpers::{listed, resolve_sections};

/// Full sections by selector. No selectors means every section.
pub fn run<B: KeyValueStore, I: AsRef<str>>(
    notebook: &Notebook<B>,
    selectors: &[I],
) -> Result<CmdResult> {
    if selectors.is_empty() {
        return super::list::run(notebook);
    }

    let ids = resolve_sections(notebook, selectors)?;
    let sections = ids
        .iter()
        .map(|id| listed(notebook, id).ok_or_else(|| HandyNoteError::SectionNotFound(id.clone())))
        .collect::<Result<Vec<ListedSection>>>()?;

    Ok(CmdResult::default().with_listed_sections(sections))
}
