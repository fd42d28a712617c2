//! # CLI Behavior
//!
//! One UI client for handynote. It is the only place that knows about
//! terminal I/O, exit codes and output formatting.
//!
//! ## Naked Execution (`handynote`)
//!
//! Running `handynote` with no arguments lists the sections. Looking things up
//! is what a cheat sheet is for.
//!
//! ## Editing From the Shell
//!
//! The edit protocol (edit, change the draft, save or cancel) runs inside a
//! single command. `add` and `edit` build the draft from their flags and save
//! it. If the draft does not validate, every error is printed, nothing is
//! written, and the exit code is 1.
//!
//! Sections are addressed by 1-based position (as shown by `list`) or by id.
//! Items are addressed by their 1-based position within the section (as shown
//! by `view`).
//!
//! ## Confirmation
//!
//! `delete` asks on stdin unless `--yes` is given.
//!
//! ## Logging
//!
//! `HANDYNOTE_LOG` takes a `tracing` filter (default `warn`). `--verbose`
//! turns on debug output for handynote. Logs go to stderr.
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch, per-command handlers, stdin confirmation
//! - `render`: Output formatting (columns, colors, messages)
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
