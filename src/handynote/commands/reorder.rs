use crate::commands::{CmdMessage, CmdResult};
use crate::error::{HandyNoteError, Result};
use crate::notebook::Notebook;
use crate::store::KeyValueStore;

/// Moves the section at `from` to `to`. Both are 1-based.
pub async fn run<B: KeyValueStore>(
    notebook: &mut Notebook<B>,
    from: usize,
    to: usize,
) -> Result<CmdResult> {
    if from == 0 || to == 0 {
        return Err(HandyNoteError::Api("Positions start at 1".to_string()));
    }

    notebook.reorder_sections(from - 1, to - 1).await?;

    let moved = notebook.sections()[to - 1].clone();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Moved {} to position {}",
        moved.title, to
    )));
    Ok(result.with_affected_sections(vec![moved]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::test_notebook;
    use crate::model::Section;

    async fn notebook() -> Notebook<crate::store::mem_backend::MemBackend> {
        test_notebook(vec![
            Section::new("a-1", "A", Vec::new()),
            Section::new("b-2", "B", Vec::new()),
            Section::new("c-3", "C", Vec::new()),
        ])
        .await
    }

    #[tokio::test]
    async fn moves_first_to_last() {
        let mut notebook = notebook().await;
        let result = run(&mut notebook, 1, 3).await.unwrap();

        assert_eq!(result.messages[0].content, "Moved A to position 3");
        let titles: Vec<String> = notebook
            .store()
            .get_sections()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(titles, vec!["B", "C", "A"]);
    }

    #[tokio::test]
    async fn rejects_zero_and_out_of_range() {
        let mut notebook = notebook().await;
        assert!(matches!(
            run(&mut notebook, 0, 1).await.unwrap_err(),
            HandyNoteError::Api(_)
        ));
        assert!(matches!(
            run(&mut notebook, 1, 4).await.unwrap_err(),
            HandyNoteError::IndexOutOfRange { index: 3, len: 3 }
        ));
    }
}
