//! # CLI Error Type
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockroom                              │
//! │                                                                         │
//! │  ValidationError (bad number, empty name)                               │
//! │       └──► handled inside the command: re-prompt or "Invalid id."       │
//! │                                                                         │
//! │  StoreError (save/load failed)                                          │
//! │       └──► "Error: <message>" on stdout, loop keeps running             │
//! │                                                                         │
//! │  CliError::Terminal (stdin/stdout broken)                               │
//! │       └──► session ends, propagated to main                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;

use thiserror::Error;

/// Errors that end a session.
///
/// Store failures never appear here; the session reports them and carries on.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading the operator's input or writing the transcript failed.
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
