//! # stockroom-store: Record Store for Stockroom
//!
//! This crate owns the inventory collection and the flat file it lives in.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Data Flow                              │
//! │                                                                         │
//! │  Startup                         Operator command                       │
//! │     │                                   │                               │
//! │     ▼                                   ▼                               │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   stockroom-store (THIS CRATE)                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌──────────────────────────────────┐    │   │
//! │  │   │ StoreConfig   │    │ ItemStore                        │    │   │
//! │  │   │ (config.rs)   │───►│ (store.rs)                       │    │   │
//! │  │   │ data_file     │    │ Vec<Item> + next id              │    │   │
//! │  │   └───────────────┘    │ load · save · add · update       │    │   │
//! │  │                        │ find · remove · search           │    │   │
//! │  │                        └──────────────────────────────────┘    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │     │  load (startup)                   ▲  save (save / quit)           │
//! │     ▼                                   │                               │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  inventory.csv (working directory)              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - Where the data file lives
//! - [`store`] - The item collection and its file operations
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stockroom_store::{ItemStore, StoreConfig};
//!
//! let config = StoreConfig::default();
//! let (mut store, _report) = ItemStore::open(&config)?;
//!
//! let id = store.add("Widget", 5, 2.5)?;
//! assert!(store.find_by_id(id).is_some());
//!
//! store.save(config.data_file())?;
//! # Ok::<(), stockroom_store::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use store::{DefaultedLine, ItemPatch, ItemStore, LoadReport, SkipCause, SkippedLine};
