//! # Store Error Types
//!
//! Error types for store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error (open / read / write)                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the file path                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CliError (in app) ← Printed as "Error: ..." and the loop continues     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A missing data file is not an error: it loads as an empty store.

use std::io;
use std::path::PathBuf;

use stockroom_core::ItemId;
use thiserror::Error;

/// Store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The data file exists but could not be read.
    ///
    /// ## When This Occurs
    /// - Permission denied
    /// - The path is a directory
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The data file could not be created, truncated or written.
    ///
    /// ## When This Occurs
    /// - Parent directory missing or read-only
    /// - Disk full
    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No item carries the requested id.
    #[error("item not found: {id}")]
    NotFound { id: ItemId },

    /// Every representable id has been handed out.
    #[error("no item ids left to assign")]
    IdsExhausted,
}

impl StoreError {
    /// Creates a Read error for the given path.
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a Write error for the given path.
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Write {
            path: path.into(),
            source,
        }
    }

    /// Creates a NotFound error for the given id.
    pub fn not_found(id: ItemId) -> Self {
        StoreError::NotFound { id }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
