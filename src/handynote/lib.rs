//! # HandyNote Architecture
//!
//! HandyNote keeps keyboard shortcut cheat sheets: named **sections**, each an
//! ordered list of `shortcut → description` **items**. The library owns the
//! data, the edit protocol and persistence. The CLI is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints output, asks for confirmation   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One user intent each: add, edit, delete, move...         │
//! │  - Returns CmdResult (messages, sections, reports)          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Edit Model (notebook.rs)                                   │
//! │  - Committed sections, one pending Draft, validation        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - SectionStore over an async KeyValueStore                 │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. Diagnostics go through `tracing`; whoever runs the library
//! decides where they end up. Destructive actions ask a [`notebook::Confirm`]
//! rather than reading a terminal.
//!
//! ## Validation Is Data
//!
//! A save that fails validation is not an error. It returns a
//! [`validation::SectionReport`] and the section stays in edit. Errors
//! ([`error::HandyNoteError`]) are for storage failures and misuse, such as
//! saving a section that is not being edited.
//!
//! ## Testing Strategy
//!
//! 1. **Edit model and commands**: unit tests on `MemBackend`, which records
//!    every write and can be told to fail. Most tests live here.
//! 2. **Storage**: `FsBackend` tests in temp dirs.
//! 3. **API**: dispatch only.
//! 4. **CLI**: `tests/` runs the binary against a temp `HANDYNOTE_HOME`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per user intent
//! - [`notebook`]: The collection edit model (drafts, save, cancel, reorder)
//! - [`validation`]: Field limits and section validation
//! - [`store`]: Key-value backends and the section gateway
//! - [`model`]: `Section`, `Item`, `Counters`
//! - [`ids`]: Readable id generation
//! - [`defaults`]: Built-in sections for a fresh install
//! - [`config`]: Configuration management
//! - [`init`]: Data dir lookup and context setup
//! - [`error`]: Error types
//! - `cli`: Argument parsing and printing for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod defaults;
pub mod error;
pub mod ids;
pub mod init;
pub mod model;
pub mod notebook;
pub mod store;
pub mod validation;
