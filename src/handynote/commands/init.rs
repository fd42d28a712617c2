use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::notebook::Notebook;
use crate::store::KeyValueStore;

pub async fn run<B: KeyValueStore>(notebook: &Notebook<B>) -> Result<CmdResult> {
    notebook.store().initialize_storage().await?;
    let location = notebook.store().location();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized handynote store at {} ({} sections)",
        location,
        notebook.sections().len()
    )));
    Ok(result.with_location(location))
}
