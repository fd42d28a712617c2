//! # Collection Edit Model
//!
//! [`Notebook`] holds the committed section list, at most one pending edit, and
//! the validation reports from failed saves.
//!
//! ## Edit protocol
//!
//! ```text
//!        edit_section / add_section
//!   View ──────────────────────────▶ Editing
//!    ▲                                  │
//!    │   save_section (valid, written)  │
//!    ├──────────────────────────────────┤
//!    │   cancel_section                 │
//!    └──────────────────────────────────┘
//! ```
//!
//! While a section is being edited, changes go to a [`Draft`], never to the
//! committed list. The view ([`Notebook::view`]) shows the draft in place of
//! the committed section so edits are visible before they are saved. A save
//! that fails validation keeps the draft and records a [`SectionReport`]. A
//! save that fails to write keeps the draft and leaves the committed list as
//! it was.
//!
//! Reordering and deleting write immediately and are not part of the edit
//! protocol.
//!
//! Only one section can be in edit at a time. Asking to edit a second one is
//! an error rather than a silent switch.

use crate::defaults::{self, SeedSection};
use crate::error::{HandyNoteError, Result};
use crate::model::{Collection, Counters, Item, Section};
use crate::store::{KeyValueStore, SectionStore};
use crate::validation::{SectionReport, ValidationRules};
use std::collections::HashMap;
use std::ops::Deref;

/// Title given to sections created by [`Notebook::add_section`].
pub const NEW_SECTION_TITLE: &str = "New Section";

/// An uncommitted value. Reading goes through `Deref`; the only way back to a
/// plain value is [`Draft::commit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft<T>(T);

impl<T> Draft<T> {
    fn new(value: T) -> Self {
        Self(value)
    }

    fn get_mut(&mut self) -> &mut T {
        &mut self.0
    }

    fn commit(self) -> T {
        self.0
    }
}

impl<T> Deref for Draft<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

#[derive(Debug, Clone)]
enum Origin {
    /// Pre-edit copy, restored on cancel.
    Existing { snapshot: Section },
    /// Never persisted; cancel drops it.
    New,
}

#[derive(Debug, Clone)]
struct PendingEdit {
    draft: Draft<Section>,
    origin: Origin,
}

/// Yes/no decision point for destructive actions.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Always answers yes.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Partial update of a draft section. `None` leaves a field alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionUpdate {
    pub title: Option<String>,
    pub items: Option<Vec<Item>>,
}

impl SectionUpdate {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            items: None,
        }
    }

    pub fn items(items: Vec<Item>) -> Self {
        Self {
            title: None,
            items: Some(items),
        }
    }
}

/// Partial update of one item in a draft section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemUpdate {
    pub id: String,
    pub shortcut: Option<String>,
    pub description: Option<String>,
}

impl ItemUpdate {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            shortcut: None,
            description: None,
        }
    }

    pub fn shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Written to storage; the section is back in view mode.
    Saved(Section),
    /// Validation failed; still editing.
    Invalid(SectionReport),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelOutcome {
    /// The section is back to its pre-edit state.
    Reverted(Section),
    /// A new, never saved section was thrown away.
    Discarded(Section),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(Section),
    Declined,
}

/// One row of the rendered collection.
#[derive(Debug, Clone, Copy)]
pub struct SectionView<'a> {
    pub section: &'a Section,
    pub editing: bool,
    pub is_new: bool,
    pub report: Option<&'a SectionReport>,
}

pub struct Notebook<B: KeyValueStore> {
    store: SectionStore<B>,
    rules: ValidationRules,
    sections: Collection,
    counters: Counters,
    pending: Option<PendingEdit>,
    reports: HashMap<String, SectionReport>,
}

impl<B: KeyValueStore> Notebook<B> {
    /// Initializes storage and loads the collection. An empty collection is
    /// filled from `seed` (pass `&[]` to skip seeding) and written back.
    pub async fn load(
        store: SectionStore<B>,
        rules: ValidationRules,
        seed: &[SeedSection],
    ) -> Result<Self> {
        store.initialize_storage().await?;
        let mut sections = store.get_sections().await?;
        let mut counters = store.get_counters().await?;

        if sections.is_empty() && !seed.is_empty() {
            let mut seeded_counters = counters;
            let seeded = defaults::build_sections(seed, &mut seeded_counters)?;
            store.commit(&seeded, seeded_counters).await?;
            tracing::info!(sections = seeded.len(), "seeded default sections");
            sections = seeded;
            counters = seeded_counters;
        }

        tracing::debug!(sections = sections.len(), ?counters, "notebook loaded");
        Ok(Self {
            store,
            rules,
            sections,
            counters,
            pending: None,
            reports: HashMap::new(),
        })
    }

    /// Committed sections, in display order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    pub fn counters(&self) -> Counters {
        self.counters
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    pub fn store(&self) -> &SectionStore<B> {
        &self.store
    }

    /// Id of the section being edited, if any.
    pub fn editing(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.draft.id.as_str())
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.editing() == Some(id)
    }

    pub fn draft(&self) -> Option<&Draft<Section>> {
        self.pending.as_ref().map(|p| &p.draft)
    }

    /// Whether the draft differs from the section it was opened from. New
    /// sections always count as changed.
    pub fn has_unsaved_changes(&self) -> bool {
        match &self.pending {
            Some(PendingEdit {
                draft,
                origin: Origin::Existing { snapshot },
            }) => **draft != *snapshot,
            Some(PendingEdit {
                origin: Origin::New,
                ..
            }) => true,
            None => false,
        }
    }

    /// Validation report from the last failed save of a section.
    pub fn report(&self, id: &str) -> Option<&SectionReport> {
        self.reports.get(id)
    }

    /// The collection as it should be rendered: the draft replaces its
    /// committed section, a new draft comes last.
    pub fn view(&self) -> Vec<SectionView<'_>> {
        let mut rows: Vec<SectionView<'_>> = self
            .sections
            .iter()
            .map(|section| match &self.pending {
                Some(p) if p.draft.id == section.id => SectionView {
                    section: &p.draft,
                    editing: true,
                    is_new: false,
                    report: self.reports.get(&section.id),
                },
                _ => SectionView {
                    section,
                    editing: false,
                    is_new: false,
                    report: self.reports.get(&section.id),
                },
            })
            .collect();

        if let Some(PendingEdit {
            draft,
            origin: Origin::New,
        }) = &self.pending
        {
            rows.push(SectionView {
                section: draft,
                editing: true,
                is_new: true,
                report: self.reports.get(&draft.id),
            });
        }

        rows
    }

    pub fn edit_section(&mut self, id: &str) -> Result<()> {
        if let Some(current) = self.editing() {
            if current == id {
                return Ok(());
            }
            return Err(HandyNoteError::AlreadyEditing(current.to_string()));
        }

        let section = self
            .section(id)
            .cloned()
            .ok_or_else(|| HandyNoteError::SectionNotFound(id.to_string()))?;

        self.reports.remove(id);
        self.pending = Some(PendingEdit {
            draft: Draft::new(section.clone()),
            origin: Origin::Existing { snapshot: section },
        });
        tracing::debug!(section = id, "editing section");
        Ok(())
    }

    /// Starts a new section with one blank item, already in edit mode.
    /// Returns its id.
    pub fn add_section(&mut self) -> Result<String> {
        if let Some(current) = self.editing() {
            return Err(HandyNoteError::AlreadyEditing(current.to_string()));
        }

        let mut id = self.counters.next_section_id(NEW_SECTION_TITLE)?;
        while self.section(&id).is_some() {
            id = self.counters.next_section_id(NEW_SECTION_TITLE)?;
        }
        let item_id = self.counters.next_item_id()?;

        self.pending = Some(PendingEdit {
            draft: Draft::new(Section::new(
                id.clone(),
                NEW_SECTION_TITLE,
                vec![Item::blank(item_id)],
            )),
            origin: Origin::New,
        });
        tracing::debug!(section = %id, "added new section");
        Ok(id)
    }

    /// Applies `update` to the draft. Replacement items must have distinct
    /// ids; otherwise nothing is changed.
    pub fn update_section(&mut self, id: &str, update: SectionUpdate) -> Result<()> {
        let draft = self.draft_mut(id)?;
        if let Some(items) = update.items {
            let candidate = Section::new(id, "", items);
            candidate.ensure_unique_item_ids()?;
            draft.items = candidate.items;
        }
        if let Some(title) = update.title {
            draft.title = title;
        }
        Ok(())
    }

    pub fn update_item(&mut self, section_id: &str, update: ItemUpdate) -> Result<()> {
        let draft = self.draft_mut(section_id)?;
        let item = draft
            .item_mut(&update.id)
            .ok_or_else(|| HandyNoteError::ItemNotFound {
                section: section_id.to_string(),
                item: update.id.clone(),
            })?;
        if let Some(shortcut) = update.shortcut {
            item.shortcut = shortcut;
        }
        if let Some(description) = update.description {
            item.description = description;
        }
        Ok(())
    }

    /// Appends a blank item to the draft and returns its id.
    pub fn add_item(&mut self, section_id: &str) -> Result<String> {
        // Check first so a failed call does not use up an id.
        self.draft_mut(section_id)?;

        let mut id = self.counters.next_item_id()?;
        while self.draft_has_item(&id) {
            id = self.counters.next_item_id()?;
        }

        let draft = self.draft_mut(section_id)?;
        draft.items.push(Item::blank(id.clone()));
        Ok(id)
    }

    pub fn delete_item(&mut self, section_id: &str, item_id: &str) -> Result<Item> {
        let draft = self.draft_mut(section_id)?;
        let position = draft
            .items
            .iter()
            .position(|item| item.id == item_id)
            .ok_or_else(|| HandyNoteError::ItemNotFound {
                section: section_id.to_string(),
                item: item_id.to_string(),
            })?;
        Ok(draft.items.remove(position))
    }

    /// Validates the draft and, if it is clean, writes the whole collection.
    pub async fn save_section(&mut self, id: &str) -> Result<SaveOutcome> {
        let pending = match self.pending.take() {
            Some(p) if p.draft.id == id => p,
            other => {
                self.pending = other;
                return Err(HandyNoteError::NotEditing(id.to_string()));
            }
        };

        let report = self.rules.validate_section(&pending.draft);
        if !report.is_valid() {
            tracing::debug!(
                section = id,
                errors = report.error_count(),
                "save blocked by validation"
            );
            self.reports.insert(id.to_string(), report.clone());
            self.pending = Some(pending);
            return Ok(SaveOutcome::Invalid(report));
        }

        if let Err(e) = pending.draft.ensure_unique_item_ids() {
            self.pending = Some(pending);
            return Err(e);
        }

        let mut next = self.sections.clone();
        if matches!(pending.origin, Origin::New) {
            next.push((*pending.draft).clone());
        } else if let Some(slot) = next.iter_mut().find(|s| s.id == id) {
            *slot = (*pending.draft).clone();
        } else {
            self.pending = Some(pending);
            return Err(HandyNoteError::SectionNotFound(id.to_string()));
        }

        if let Err(e) = self.store.commit(&next, self.counters).await {
            self.pending = Some(pending);
            return Err(e);
        }

        self.sections = next;
        self.reports.remove(id);
        let saved = pending.draft.commit();
        tracing::info!(section = id, title = %saved.title, "section saved");
        Ok(SaveOutcome::Saved(saved))
    }

    /// Drops the draft. Existing sections go back to their snapshot, new ones
    /// disappear. Nothing is written.
    pub fn cancel_section(&mut self, id: &str) -> Result<CancelOutcome> {
        let pending = match self.pending.take() {
            Some(p) if p.draft.id == id => p,
            other => {
                self.pending = other;
                return Err(HandyNoteError::NotEditing(id.to_string()));
            }
        };
        self.reports.remove(id);

        let outcome = match pending.origin {
            Origin::Existing { snapshot } => {
                if let Some(slot) = self.sections.iter_mut().find(|s| s.id == id) {
                    *slot = snapshot.clone();
                }
                CancelOutcome::Reverted(snapshot)
            }
            Origin::New => CancelOutcome::Discarded(pending.draft.commit()),
        };
        tracing::debug!(section = id, "edit cancelled");
        Ok(outcome)
    }

    /// Removes a section after `confirm` agrees, then writes the collection.
    /// A new, never saved section is dropped without writing.
    pub async fn delete_section<C: Confirm + ?Sized>(
        &mut self,
        id: &str,
        confirm: &C,
    ) -> Result<DeleteOutcome> {
        let is_new_draft = matches!(
            &self.pending,
            Some(PendingEdit { draft, origin: Origin::New }) if draft.id == id
        );

        let title = if is_new_draft {
            self.draft().map(|d| d.title.clone()).unwrap_or_default()
        } else {
            self.section(id)
                .map(|s| s.title.clone())
                .ok_or_else(|| HandyNoteError::SectionNotFound(id.to_string()))?
        };

        if !confirm.confirm(&format!(
            "Are you sure you want to delete the section \"{}\"?",
            title
        )) {
            return Ok(DeleteOutcome::Declined);
        }

        if is_new_draft {
            return match self.cancel_section(id)? {
                CancelOutcome::Discarded(section) | CancelOutcome::Reverted(section) => {
                    Ok(DeleteOutcome::Deleted(section))
                }
            };
        }

        let mut next = self.sections.clone();
        let position = next
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| HandyNoteError::SectionNotFound(id.to_string()))?;
        let removed = next.remove(position);

        self.store.set_sections(&next).await?;

        self.sections = next;
        self.reports.remove(id);
        if self.is_editing(id) {
            self.pending = None;
        }
        tracing::info!(section = id, "section deleted");
        Ok(DeleteOutcome::Deleted(removed))
    }

    /// Moves the committed section at `from` to `to` (0-based) and writes the
    /// collection. A new, unsaved section is not part of the order yet.
    pub async fn reorder_sections(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.sections.len();
        for index in [from, to] {
            if index >= len {
                return Err(HandyNoteError::IndexOutOfRange { index, len });
            }
        }

        let mut next = self.sections.clone();
        let moved = next.remove(from);
        next.insert(to, moved);

        self.store.set_sections(&next).await?;
        self.sections = next;
        tracing::info!(from, to, "sections reordered");
        Ok(())
    }

    fn draft_mut(&mut self, id: &str) -> Result<&mut Section> {
        match &mut self.pending {
            Some(p) if p.draft.id == id => Ok(p.draft.get_mut()),
            _ => Err(HandyNoteError::NotEditing(id.to_string())),
        }
    }

    fn draft_has_item(&self, item_id: &str) -> bool {
        self.draft()
            .map(|d| d.item(item_id).is_some())
            .unwrap_or(false)
    }
}
