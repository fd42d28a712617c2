//! Terminal output. Everything here builds strings; `commands.rs` prints them.
//!
//! Width math uses `unicode-width` so shortcuts like `⌘K` line up.

use colored::*;
use handynote::api::{CmdMessage, ListedSection, MessageLevel};
use handynote::config::{HandyNoteConfig, CONFIG_KEYS};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
const INDENT: &str = "    ";

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

/// One line per section: position, title, item count.
pub fn render_section_list(sections: &[ListedSection]) -> String {
    let mut out = String::new();
    for listed in sections {
        let idx = format!("{}. ", listed.position);
        let count = match listed.section.items.len() {
            1 => "1 shortcut".to_string(),
            n => format!("{} shortcuts", n),
        };

        let available = LINE_WIDTH
            .saturating_sub(INDENT.width() + idx.width() + count.width() + 2);
        let title = truncate_to_width(&listed.section.title, available);
        let padding = available.saturating_sub(title.width());

        out.push_str(&format!(
            "{}{}{}{}  {}\n",
            INDENT,
            idx.yellow(),
            title.bold(),
            " ".repeat(padding),
            count.dimmed()
        ));
    }
    out
}

/// Sections with every item, shortcuts aligned in a column.
pub fn render_full_sections(sections: &[ListedSection]) -> String {
    let mut out = String::new();
    for (i, listed) in sections.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "{} {} {}\n",
            format!("{}.", listed.position).yellow(),
            listed.section.title.bold(),
            format!("({})", listed.section.id).dimmed()
        ));

        if listed.section.items.is_empty() {
            out.push_str(&format!("{}{}\n", INDENT, "(no shortcuts)".dimmed()));
            continue;
        }

        let column = listed
            .section
            .items
            .iter()
            .map(|item| item.shortcut.width())
            .max()
            .unwrap_or(0);

        for (n, item) in listed.section.items.iter().enumerate() {
            let num = format!("{:>2}. ", n + 1);
            let padding = column.saturating_sub(item.shortcut.width());
            let available = LINE_WIDTH
                .saturating_sub(INDENT.width() + num.width() + column + 2);
            out.push_str(&format!(
                "{}{}{}{}  {}\n",
                INDENT,
                num.dimmed(),
                item.shortcut.cyan(),
                " ".repeat(padding),
                truncate_to_width(&item.description, available)
            ));
        }
    }
    out
}

pub fn render_config(config: &HandyNoteConfig) -> String {
    let mut out = String::new();
    for key in CONFIG_KEYS {
        if let Some(value) = config.get(key) {
            out.push_str(&format!("{} = {}\n", key, value));
        }
    }
    out
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use handynote::model::{Item, Section};

    fn listed(position: usize, section: Section) -> ListedSection {
        ListedSection { position, section }
    }

    #[test]
    fn truncates_by_display_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
        // Wide chars count double
        assert_eq!(truncate_to_width("日本語テキスト", 6), "日本…");
    }

    #[test]
    fn list_shows_position_title_and_count() {
        colored::control::set_override(false);
        let out = render_section_list(&[
            listed(1, Section::new("a-1", "Alpha", vec![Item::new("1", "F1", "Help")])),
            listed(2, Section::new("b-2", "Beta", Vec::new())),
        ]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("1. Alpha"));
        assert!(lines[0].ends_with("1 shortcut"));
        assert!(lines[1].ends_with("0 shortcuts"));
    }

    #[test]
    fn full_sections_align_shortcuts() {
        colored::control::set_override(false);
        let out = render_full_sections(&[listed(
            3,
            Section::new(
                "vim-3",
                "Vim",
                vec![Item::new("1", "dd", "Delete line"), Item::new("2", "Ctrl+R", "Redo")],
            ),
        )]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "3. Vim (vim-3)");
        assert_eq!(lines[1], "     1. dd      Delete line");
        assert_eq!(lines[2], "     2. Ctrl+R  Redo");
    }

    #[test]
    fn empty_section_says_so() {
        colored::control::set_override(false);
        let out = render_full_sections(&[listed(1, Section::new("e-1", "Empty", Vec::new()))]);
        assert!(out.contains("(no shortcuts)"));
    }

    #[test]
    fn config_lists_every_key() {
        let out = render_config(&HandyNoteConfig::default());
        assert_eq!(out.lines().count(), CONFIG_KEYS.len());
        assert!(out.contains("shortcut-max = 20"));
        assert!(out.contains("seed-defaults = true"));
    }

    #[test]
    fn messages_end_with_newline() {
        colored::control::set_override(false);
        let out = render_messages(&[CmdMessage::success("done"), CmdMessage::error("oops")]);
        assert_eq!(out, "done\noops\n");
    }
}
