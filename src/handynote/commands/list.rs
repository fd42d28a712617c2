use crate::commands::{CmdMessage, CmdResult, ListedSection};
use crate::error::Result;
use crate::notebook::Notebook;
use crate::store::KeyValueStore;

pub fn run<B: KeyValueStore>(notebook: &Notebook<B>) -> Result<CmdResult> {
    let listed: Vec<ListedSection> = notebook
        .sections()
        .iter()
        .enumerate()
        .map(|(i, section)| ListedSection {
            position: i + 1,
            section: section.clone(),
        })
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info(
            "No sections yet. Add one with `handynote add`.",
        ));
    }
    Ok(result.with_listed_sections(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::test_notebook;
    use crate::model::Section;

    #[tokio::test]
    async fn lists_in_order_with_positions() {
        let notebook = test_notebook(vec![
            Section::new("b-1", "B", Vec::new()),
            Section::new("a-2", "A", Vec::new()),
        ])
        .await;

        let result = run(&notebook).unwrap();
        assert_eq!(result.listed_sections.len(), 2);
        assert_eq!(result.listed_sections[0].position, 1);
        assert_eq!(result.listed_sections[0].section.title, "B");
        assert_eq!(result.listed_sections[1].section.title, "A");
        assert!(result.messages.is_empty());
    }

    #[tokio::test]
    async fn empty_collection_gets_a_hint() {
        let notebook = test_notebook(Vec::new()).await;
        let result = run(&notebook).unwrap();
        assert!(result.listed_sections.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert!(!result.has_errors());
    }
}
