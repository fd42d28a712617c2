//! Built-in sections used to seed an empty collection.

use crate::error::Result;
use crate::model::{Collection, Counters, Item, Section};

/// A section template: a title and `(shortcut, description)` pairs.
#[derive(Debug, Clone, Copy)]
pub struct SeedSection {
    pub title: &'static str,
    pub items: &'static [(&'static str, &'static str)],
}

pub const DEFAULT_SECTIONS: &[SeedSection] = &[
    SeedSection {
        title: "VS Code Shortcuts",
        items: &[
            ("F12", "Go to Definition"),
            ("Ctrl+Shift+-", "Go Forward"),
            ("Ctrl+Alt+-", "Go Back"),
            ("Ctrl+Alt+I", "Toggle Copilot Chat View"),
        ],
    },
    SeedSection {
        title: "Terminator Shortcuts",
        items: &[
            ("Ctrl+Alt+T", "Launch Terminator"),
            ("Ctrl+Shift+T", "New Tab"),
            ("Ctrl+PageDown", "Navigate Tab"),
            ("Ctrl+Shift+O", "Horizontal Split"),
            ("Ctrl+Shift+E", "Vertical Split"),
            ("Ctrl+Tab", "Navigate Split"),
        ],
    },
    SeedSection {
        title: "Ubuntu Shortcuts",
        items: &[
            ("Ctrl+Shift+I", "Toggle Browser Inspect"),
            ("Win+Space", "Toggle Language"),
            ("Alt+PrtSc", "Take a Screenshot of Current Window"),
        ],
    },
];

/// Turns seed templates into sections, drawing every id from `counters`.
pub fn build_sections(seed: &[SeedSection], counters: &mut Counters) -> Result<Collection> {
    seed.iter()
        .map(|template| {
            let id = counters.next_section_id(template.title)?;
            let items = template
                .items
                .iter()
                .map(|(shortcut, description)| {
                    Ok(Item::new(counters.next_item_id()?, *shortcut, *description))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(Section::new(id, template.title, items))
        })
        .collect()
}
