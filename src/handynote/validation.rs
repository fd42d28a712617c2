//! Field validation for sections and items.
//!
//! Every rule is checked against the trimmed input:
//! - Shorter than the field minimum: `"<Field> cannot be empty"`
//! - Longer than the field maximum: `"<Field> cannot exceed N characters"`
//!
//! The two checks run independently of each other. Lengths are counted in
//! characters, not bytes.
//!
//! Validating a whole section also flags repeated shortcuts. Shortcuts are
//! compared case-insensitively and the first occurrence is never flagged:
//!
//! ```
//! use handynote::model::{Item, Section};
//! use handynote::validation::ValidationRules;
//!
//! let section = Section::new(
//!     "editing-1",
//!     "Editing",
//!     vec![
//!         Item::new("1", "Ctrl+A", "Select all"),
//!         Item::new("2", "ctrl+a", "Also select all"),
//!         Item::new("3", "Ctrl+B", "Bold"),
//!     ],
//! );
//! let report = ValidationRules::default().validate_section(&section);
//! assert_eq!(report.items.len(), 1);
//! assert_eq!(report.items[0].item_id, "2");
//! ```

use crate::model::{Item, Section};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The user-editable fields that carry validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Shortcut,
    Description,
}

impl Field {
    fn label(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Shortcut => "Shortcut",
            Field::Description => "Description",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Title => write!(f, "title"),
            Field::Shortcut => write!(f, "shortcut"),
            Field::Description => write!(f, "description"),
        }
    }
}

/// A single user-correctable problem with one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Inclusive length bounds for a field, in characters of the trimmed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldLimits {
    pub min_length: usize,
    pub max_length: usize,
}

impl FieldLimits {
    pub const fn new(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
        }
    }
}

pub const TITLE_LIMITS: FieldLimits = FieldLimits::new(1, 30);
pub const SHORTCUT_LIMITS: FieldLimits = FieldLimits::new(1, 20);
pub const DESCRIPTION_LIMITS: FieldLimits = FieldLimits::new(1, 50);

/// The limits applied to each field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    pub title: FieldLimits,
    pub shortcut: FieldLimits,
    pub description: FieldLimits,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            title: TITLE_LIMITS,
            shortcut: SHORTCUT_LIMITS,
            description: DESCRIPTION_LIMITS,
        }
    }
}

impl ValidationRules {
    pub fn validate_title(&self, value: &str) -> Vec<ValidationError> {
        check_length(Field::Title, value, self.title)
    }

    pub fn validate_shortcut(&self, value: &str) -> Vec<ValidationError> {
        check_length(Field::Shortcut, value, self.shortcut)
    }

    pub fn validate_description(&self, value: &str) -> Vec<ValidationError> {
        check_length(Field::Description, value, self.description)
    }

    /// Base rules for one item: shortcut errors first, then description.
    pub fn validate_item(&self, item: &Item) -> Vec<ValidationError> {
        let mut errors = self.validate_shortcut(&item.shortcut);
        errors.extend(self.validate_description(&item.description));
        errors
    }

    /// Validates the title, every item, and shortcut uniqueness.
    pub fn validate_section(&self, section: &Section) -> SectionReport {
        let mut report = SectionReport {
            section_id: section.id.clone(),
            title: self.validate_title(&section.title),
            items: Vec::new(),
        };

        // normalized shortcut -> 1-based position of its first occurrence
        let mut first_seen: HashMap<String, usize> = HashMap::new();

        for (index, item) in section.items.iter().enumerate() {
            let position = index + 1;
            let mut errors = self.validate_item(item);

            let normalized = normalize_shortcut(&item.shortcut);
            if !normalized.is_empty() {
                match first_seen.get(&normalized) {
                    Some(first) => errors.push(ValidationError::new(
                        Field::Shortcut,
                        format!("Shortcut is a duplicate of item at position {}", first),
                    )),
                    None => {
                        first_seen.insert(normalized, position);
                    }
                }
            }

            if !errors.is_empty() {
                report.items.push(ItemReport {
                    item_id: item.id.clone(),
                    position,
                    errors,
                });
            }
        }

        report
    }
}

pub fn validate_title(value: &str) -> Vec<ValidationError> {
    ValidationRules::default().validate_title(value)
}

pub fn validate_shortcut(value: &str) -> Vec<ValidationError> {
    ValidationRules::default().validate_shortcut(value)
}

pub fn validate_description(value: &str) -> Vec<ValidationError> {
    ValidationRules::default().validate_description(value)
}

fn check_length(field: Field, value: &str, limits: FieldLimits) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let length = value.trim().chars().count();

    if length < limits.min_length {
        errors.push(ValidationError::new(
            field,
            format!("{} cannot be empty", field.label()),
        ));
    }

    if length > limits.max_length {
        errors.push(ValidationError::new(
            field,
            format!(
                "{} cannot exceed {} characters",
                field.label(),
                limits.max_length
            ),
        ));
    }

    errors
}

fn normalize_shortcut(shortcut: &str) -> String {
    shortcut.trim().to_lowercase()
}

/// Errors for one item, keyed by its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemReport {
    pub item_id: String,
    /// 1-based position of the item within its section.
    pub position: usize,
    pub errors: Vec<ValidationError>,
}

/// Outcome of validating a section. Only items with errors are listed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SectionReport {
    pub section_id: String,
    pub title: Vec<ValidationError>,
    pub items: Vec<ItemReport>,
}

impl SectionReport {
    pub fn is_valid(&self) -> bool {
        self.title.is_empty() && self.items.is_empty()
    }

    pub fn item_errors(&self, item_id: &str) -> &[ValidationError] {
        self.items
            .iter()
            .find(|report| report.item_id == item_id)
            .map(|report| report.errors.as_slice())
            .unwrap_or(&[])
    }

    pub fn error_count(&self) -> usize {
        self.title.len() + self.items.iter().map(|r| r.errors.len()).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(errors: &[ValidationError]) -> Vec<&str> {
        errors.iter().map(|e| e.message.as_str()).collect()
    }

    #[test]
    fn test_empty_values_are_rejected() {
        assert_eq!(messages(&validate_title("")), vec!["Title cannot be empty"]);
        assert_eq!(
            messages(&validate_shortcut("")),
            vec!["Shortcut cannot be empty"]
        );
        assert_eq!(
            messages(&validate_description("")),
            vec!["Description cannot be empty"]
        );
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let errors = validate_title("   \t ");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::Title);
        assert_eq!(errors[0].message, "Title cannot be empty");
    }

    #[test]
    fn test_too_long_reports_configured_maximum() {
        assert_eq!(
            messages(&validate_title(&"t".repeat(31))),
            vec!["Title cannot exceed 30 characters"]
        );
        assert_eq!(
            messages(&validate_shortcut(&"s".repeat(21))),
            vec!["Shortcut cannot exceed 20 characters"]
        );
        assert_eq!(
            messages(&validate_description(&"d".repeat(51))),
            vec!["Description cannot exceed 50 characters"]
        );
    }

    #[test]
    fn test_every_length_within_bounds_is_accepted() {
        let rules = ValidationRules::default();
        for len in 1..=30 {
            assert!(rules.validate_title(&"a".repeat(len)).is_empty(), "len {}", len);
        }
        for len in 1..=20 {
            assert!(rules.validate_shortcut(&"a".repeat(len)).is_empty());
        }
        for len in 1..=50 {
            assert!(rules.validate_description(&"a".repeat(len)).is_empty());
        }
    }

    #[test]
    fn test_every_length_over_maximum_is_rejected() {
        for len in 31..40 {
            let errors = validate_title(&"a".repeat(len));
            assert_eq!(messages(&errors), vec!["Title cannot exceed 30 characters"]);
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_not_counted() {
        let padded = format!("   {}   ", "a".repeat(30));
        assert!(validate_title(&padded).is_empty());
    }

    #[test]
    fn test_length_counts_characters() {
        // 20 multi-byte characters fit a 20 character shortcut
        assert!(validate_shortcut(&"⌘".repeat(20)).is_empty());
        assert_eq!(validate_shortcut(&"⌘".repeat(21)).len(), 1);
    }

    #[test]
    fn test_both_checks_apply_independently() {
        let rules = ValidationRules {
            title: FieldLimits::new(5, 3),
            ..ValidationRules::default()
        };
        let errors = rules.validate_title("abcd");
        assert_eq!(
            messages(&errors),
            vec!["Title cannot be empty", "Title cannot exceed 3 characters"]
        );
    }

    #[test]
    fn test_custom_minimum() {
        let rules = ValidationRules {
            shortcut: FieldLimits::new(2, 20),
            ..ValidationRules::default()
        };
        assert_eq!(
            messages(&rules.validate_shortcut("a")),
            vec!["Shortcut cannot be empty"]
        );
        assert!(rules.validate_shortcut("ab").is_empty());
    }

    #[test]
    fn test_validation_is_pure() {
        let first = validate_description(&"x".repeat(60));
        let second = validate_description(&"x".repeat(60));
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_shortcuts_flag_later_occurrences_only() {
        let section = Section::new(
            "s-1",
            "Shortcuts",
            vec![
                Item::new("1", "Ctrl+A", "Select all"),
                Item::new("2", "ctrl+a", "Again"),
                Item::new("3", "Ctrl+B", "Bold"),
            ],
        );
        let report = ValidationRules::default().validate_section(&section);

        assert!(report.title.is_empty());
        assert!(report.item_errors("1").is_empty());
        assert!(report.item_errors("3").is_empty());
        assert_eq!(
            messages(report.item_errors("2")),
            vec!["Shortcut is a duplicate of item at position 1"]
        );
        assert_eq!(report.items[0].position, 2);
    }

    #[test]
    fn test_duplicate_points_to_first_occurrence() {
        let section = Section::new(
            "s-1",
            "Shortcuts",
            vec![
                Item::new("1", "F12", "Definition"),
                Item::new("2", "Ctrl+Tab", "Next"),
                Item::new("3", "f12", "Again"),
                Item::new("4", "F12", "And again"),
            ],
        );
        let report = ValidationRules::default().validate_section(&section);
        assert_eq!(
            messages(report.item_errors("3")),
            vec!["Shortcut is a duplicate of item at position 1"]
        );
        assert_eq!(
            messages(report.item_errors("4")),
            vec!["Shortcut is a duplicate of item at position 1"]
        );
    }

    #[test]
    fn test_duplicate_is_added_to_base_errors() {
        let long = "d".repeat(51);
        let section = Section::new(
            "s-1",
            "Shortcuts",
            vec![
                Item::new("1", "Ctrl+C", "Copy"),
                Item::new("2", "CTRL+C", &long),
            ],
        );
        let report = ValidationRules::default().validate_section(&section);
        assert_eq!(
            messages(report.item_errors("2")),
            vec![
                "Description cannot exceed 50 characters",
                "Shortcut is a duplicate of item at position 1"
            ]
        );
    }

    #[test]
    fn test_blank_shortcuts_are_not_duplicates() {
        let section = Section::new(
            "s-1",
            "Shortcuts",
            vec![Item::new("1", "", "One"), Item::new("2", " ", "Two")],
        );
        let report = ValidationRules::default().validate_section(&section);
        assert_eq!(
            messages(report.item_errors("2")),
            vec!["Shortcut cannot be empty"]
        );
    }

    #[test]
    fn test_section_report_counts() {
        let section = Section::new("s-1", "", vec![Item::blank("1")]);
        let report = ValidationRules::default().validate_section(&section);
        assert!(!report.is_valid());
        assert_eq!(report.error_count(), 3);
        assert_eq!(report.section_id, "s-1");
    }

    #[test]
    fn test_field_serializes_lowercase() {
        let error = ValidationError::new(Field::Shortcut, "Shortcut cannot be empty");
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(
            json,
            r#"{"field":"shortcut","message":"Shortcut cannot be empty"}"#
        );
    }
}
