//! # Storage Layer
//!
//! Storage is split in two:
//!
//! - [`backend::KeyValueStore`]: raw JSON key-value I/O. This is all a backend
//!   has to provide.
//! - [`section_store::SectionStore`]: the section collection and id counters
//!   on top of any backend. Everything that knows what a section is lives here.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production, one `storage.json` object file,
//!   written atomically.
//! - [`mem_backend::MemBackend`]: in-memory, for tests. Can simulate write
//!   failures and records every write.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── storage.json     # { "handynote_sections": [...],
//! │                    #   "handynote_highest_section_index": 3,
//! │                    #   "handynote_highest_item_index": 13 }
//! └── config.json      # Validation limits and seeding
//! ```
//!
//! The whole collection is one value and is always replaced as a whole. There
//! is no version check: the last write wins.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod section_store;

pub use backend::KeyValueStore;
pub use section_store::SectionStore;

pub const SECTIONS_KEY: &str = "handynote_sections";
pub const HIGHEST_SECTION_INDEX_KEY: &str = "handynote_highest_section_index";
pub const HIGHEST_ITEM_INDEX_KEY: &str = "handynote_highest_item_index";
