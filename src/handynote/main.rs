//! # HandyNote CLI
//!
//! The binary is thin: the CLI lives in `cli/`, and this file only starts the
//! runtime, calls `cli::run()`, and turns the outcome into an exit code.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/handynote/cli/)                             │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Dispatch, logging setup, confirmation (commands.rs)      │
//! │  - Terminal rendering (render.rs)                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Library (src/handynote/lib.rs)                             │
//! │  - API facade, commands, edit model, storage                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Exit code is 1 when the command fails or reports an error message (for
//! example a section that does not validate), 0 otherwise.

mod cli;

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
