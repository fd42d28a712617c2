use thiserror::Error;

#[derive(Error, Debug)]
pub enum HandyNoteError {
    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("Item {item} not found in section {section}")]
    ItemNotFound { section: String, item: String },

    #[error("Section {0} is not being edited")]
    NotEditing(String),

    #[error("Section {0} is already being edited")]
    AlreadyEditing(String),

    #[error("Section id already exists: {0}")]
    DuplicateSectionId(String),

    #[error("Item id {item} appears more than once in section {section}")]
    DuplicateItemId { section: String, item: String },

    #[error("The {0} counter cannot go any higher")]
    CounterExhausted(&'static str),

    #[error("Position {index} is out of range for {len} sections")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, HandyNoteError>;
