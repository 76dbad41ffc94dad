//! # stockroom-core: Pure Inventory Logic for Stockroom
//!
//! This crate holds everything about an inventory record that can be decided
//! without touching a file or a terminal.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/cli (command loop)                      │   │
//! │  │    list ── add ── update ── remove ── search ── save ── quit    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ stockroom-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ validation │  │   codec   │  │   error   │  │   │
//! │  │   │   Item    │  │ id / qty / │  │ line <->  │  │ Validation│  │   │
//! │  │   │           │  │ price/name │  │   Item    │  │   Error   │  │   │
//! │  │   └───────────┘  └────────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO TERMINAL • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                stockroom-store (File Layer)                     │   │
//! │  │            inventory.csv load/save, id assignment               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The `Item` record
//! - [`validation`] - Strict parsing of operator input
//! - [`codec`] - Delimited line format with an explicit defaulting policy
//! - [`error`] - Validation error types
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::codec::{decode_line, encode_line};
//!
//! let decoded = decode_line("1,Widget,5,2.5").unwrap();
//! assert_eq!(decoded.item.name, "Widget");
//! assert!(decoded.defaults.is_empty());
//! assert_eq!(encode_line(&decoded.item), "1,Widget,5,2.5");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod codec;
pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use codec::{DecodedLine, DefaultCause, FieldDefault, ItemField, SkipReason};
pub use error::{ValidationError, ValidationResult};
pub use types::{Item, ItemId};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default data file, resolved against the working directory.
pub const DEFAULT_DATA_FILE: &str = "inventory.csv";

/// Field separator of the persisted line format.
///
/// Names containing this character are written unescaped; on reload the
/// remaining fields shift right. The format has always behaved this way and
/// existing files depend on it.
pub const FIELD_DELIMITER: char = ',';

/// The id handed out by an empty store.
pub const FIRST_ITEM_ID: ItemId = 1;
