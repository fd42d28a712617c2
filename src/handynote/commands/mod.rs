use crate::config::HandyNoteConfig;
use crate::model::Section;
use crate::validation::SectionReport;

pub mod add;
pub mod config;
pub mod delete;
pub mod edit;
pub mod helpers;
pub mod init;
pub mod list;
pub mod reorder;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A section together with its 1-based display position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedSection {
    pub position: usize,
    pub section: Section,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_sections: Vec<Section>,
    pub listed_sections: Vec<ListedSection>,
    pub report: Option<SectionReport>,
    pub config: Option<HandyNoteConfig>,
    pub location: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_sections(mut self, sections: Vec<Section>) -> Self {
        self.affected_sections = sections;
        self
    }

    pub fn with_listed_sections(mut self, sections: Vec<ListedSection>) -> Self {
        self.listed_sections = sections;
        self
    }

    pub fn with_report(mut self, report: SectionReport) -> Self {
        self.report = Some(report);
        self
    }

    pub fn with_config(mut self, config: HandyNoteConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// True if any message is error level. The CLI exits non-zero on these.
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}

/// A new section: title plus `(shortcut, description)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionInput {
    pub title: String,
    pub items: Vec<(String, String)>,
}

impl SectionInput {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn item(mut self, shortcut: impl Into<String>, description: impl Into<String>) -> Self {
        self.items.push((shortcut.into(), description.into()));
        self
    }
}

/// Change to one existing item, addressed by 1-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemChange {
    pub position: usize,
    pub shortcut: Option<String>,
    pub description: Option<String>,
}

/// Everything one `edit` call does to a section, applied in field order:
/// title, item changes, removals, then additions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionEdit {
    pub title: Option<String>,
    pub item_changes: Vec<ItemChange>,
    /// 1-based positions, as they were before the edit.
    pub remove_items: Vec<usize>,
    pub add_items: Vec<(String, String)>,
}

impl SectionEdit {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.item_changes.is_empty()
            && self.remove_items.is_empty()
            && self.add_items.is_empty()
    }
}
