use super::render::{
    render_config, render_full_sections, render_messages, render_section_list,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use handynote::api::{ConfigAction, ItemChange, SectionEdit, SectionInput};
use handynote::commands::CmdResult;
use handynote::error::{HandyNoteError, Result};
use handynote::init::{data_dir, initialize, HandyNoteContext};
use handynote::notebook::{AssumeYes, Confirm};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_ENV: &str = "HANDYNOTE_LOG";

pub async fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dir = data_dir()?;
    let mut ctx = initialize(&dir).await?;

    let result = match cli.command {
        None | Some(Commands::List) => handle_list(&ctx)?,
        Some(Commands::View { sections }) => handle_view(&ctx, &sections)?,
        Some(Commands::Add { title, items }) => handle_add(&mut ctx, title, items).await?,
        Some(Commands::Edit {
            section,
            title,
            shortcut,
            description,
            add_items,
            remove_items,
        }) => {
            let edit = build_edit(title, shortcut, description, add_items, remove_items)?;
            handle_edit(&mut ctx, &section, edit).await?
        }
        Some(Commands::Delete { sections, yes }) => {
            handle_delete(&mut ctx, &sections, yes).await?
        }
        Some(Commands::Move { from, to }) => handle_move(&mut ctx, from, to).await?,
        Some(Commands::Init) => handle_init(&ctx).await?,
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value)?,
    };

    Ok(if result.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Logs go to stderr so stdout only carries command output.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("handynote=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .try_init();
}

fn handle_list(ctx: &HandyNoteContext) -> Result<CmdResult> {
    let result = ctx.api.list_sections()?;
    print!("{}", render_section_list(&result.listed_sections));
    print!("{}", render_messages(&result.messages));
    Ok(result)
}

fn handle_view(ctx: &HandyNoteContext, sections: &[String]) -> Result<CmdResult> {
    let result = ctx.api.view_sections(sections)?;
    print!("{}", render_full_sections(&result.listed_sections));
    print!("{}", render_messages(&result.messages));
    Ok(result)
}

async fn handle_add(
    ctx: &mut HandyNoteContext,
    title: Vec<String>,
    items: Vec<String>,
) -> Result<CmdResult> {
    let input = SectionInput {
        title: title.join(" "),
        items: pairs(items),
    };
    let result = ctx.api.add_section(input).await?;
    print!("{}", render_messages(&result.messages));
    Ok(result)
}

async fn handle_edit(
    ctx: &mut HandyNoteContext,
    section: &str,
    edit: SectionEdit,
) -> Result<CmdResult> {
    let result = ctx.api.edit_section(section, edit).await?;
    print!("{}", render_messages(&result.messages));
    Ok(result)
}

async fn handle_delete(
    ctx: &mut HandyNoteContext,
    sections: &[String],
    yes: bool,
) -> Result<CmdResult> {
    let result = if yes {
        ctx.api.delete_sections(sections, &AssumeYes).await?
    } else {
        ctx.api.delete_sections(sections, &StdinConfirm).await?
    };
    print!("{}", render_messages(&result.messages));
    Ok(result)
}

async fn handle_move(ctx: &mut HandyNoteContext, from: usize, to: usize) -> Result<CmdResult> {
    let result = ctx.api.move_section(from, to).await?;
    print!("{}", render_messages(&result.messages));
    Ok(result)
}

async fn handle_init(ctx: &HandyNoteContext) -> Result<CmdResult> {
    let result = ctx.api.init().await?;
    print!("{}", render_messages(&result.messages));
    Ok(result)
}

fn handle_config(
    ctx: &HandyNoteContext,
    key: Option<String>,
    value: Option<String>,
) -> Result<CmdResult> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print!("{}", render_messages(&result.messages));
    Ok(result)
}

/// Reads y/N from stdin. Anything but yes, including a closed stdin, is no.
struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{} [y/N]: ", prompt);
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut input = String::new();
        match io::stdin().lock().read_line(&mut input) {
            Ok(_) => is_yes(&input),
            Err(_) => false,
        }
    }
}

fn is_yes(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Flat `[a, b, c, d]` from a two-valued option into `[(a, b), (c, d)]`.
fn pairs(values: Vec<String>) -> Vec<(String, String)> {
    let mut iter = values.into_iter();
    let mut out = Vec::new();
    while let (Some(a), Some(b)) = (iter.next(), iter.next()) {
        out.push((a, b));
    }
    out
}

fn build_edit(
    title: Option<String>,
    shortcut: Vec<String>,
    description: Vec<String>,
    add_items: Vec<String>,
    remove_items: Vec<usize>,
) -> Result<SectionEdit> {
    let mut item_changes = Vec::new();
    for (position, value) in pairs(shortcut) {
        item_changes.push(ItemChange {
            position: parse_position(&position)?,
            shortcut: Some(value),
            description: None,
        });
    }
    for (position, value) in pairs(description) {
        item_changes.push(ItemChange {
            position: parse_position(&position)?,
            shortcut: None,
            description: Some(value),
        });
    }

    Ok(SectionEdit {
        title,
        item_changes,
        remove_items,
        add_items: pairs(add_items),
    })
}

fn parse_position(s: &str) -> Result<usize> {
    s.trim()
        .parse()
        .map_err(|_| HandyNoteError::Api(format!("Invalid item position: {}", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_up_values() {
        let values = vec!["a".into(), "b".into(), "c".into(), "d".into()];
        assert_eq!(
            pairs(values),
            vec![("a".into(), "b".into()), ("c".into(), "d".into())]
        );
        assert!(pairs(Vec::new()).is_empty());
    }

    #[test]
    fn yes_answers() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes("\n"));
        assert!(!is_yes("nope"));
    }

    #[test]
    fn builds_edit_from_flags() {
        let edit = build_edit(
            Some("Vim".into()),
            vec!["2".into(), "yy".into()],
            vec!["1".into(), "Delete line".into()],
            vec!["p".into(), "Paste".into()],
            vec![3],
        )
        .unwrap();

        assert_eq!(edit.title.as_deref(), Some("Vim"));
        assert_eq!(edit.item_changes.len(), 2);
        assert_eq!(edit.item_changes[0].position, 2);
        assert_eq!(edit.item_changes[0].shortcut.as_deref(), Some("yy"));
        assert_eq!(edit.item_changes[1].description.as_deref(), Some("Delete line"));
        assert_eq!(edit.add_items, vec![("p".to_string(), "Paste".to_string())]);
        assert_eq!(edit.remove_items, vec![3]);
    }

    #[test]
    fn bad_position_is_an_error() {
        let err = build_edit(None, vec!["two".into(), "yy".into()], vec![], vec![], vec![])
            .unwrap_err();
        assert!(matches!(err, HandyNoteError::Api(_)));
    }
}
