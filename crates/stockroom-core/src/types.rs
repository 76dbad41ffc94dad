//! # Domain Types
//!
//! The single record kept by Stockroom.
//!
//! ## Item Layout
//! ```text
//! ┌─────────────────────────────────┐
//! │              Item               │
//! │  ─────────────────────────────  │
//! │  id          ItemId (u32, > 0)  │  assigned by the store, never reused
//! │  name        String             │  non-empty when entered by operator
//! │  quantity    i64                │  no lower bound
//! │  unit_price  f64                │  no lower bound
//! └─────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

/// Identifier of an inventory item.
///
/// Positive, unique within a store, handed out in increasing order.
pub type ItemId = u32;

// =============================================================================
// Item
// =============================================================================

/// One inventory entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Store-assigned identifier.
    pub id: ItemId,

    /// Display name. Matched by substring search.
    pub name: String,

    /// Units on hand.
    pub quantity: i64,

    /// Price of a single unit.
    pub unit_price: f64,
}

impl Item {
    /// Creates an item with the given fields.
    pub fn new(id: ItemId, name: impl Into<String>, quantity: i64, unit_price: f64) -> Self {
        Item {
            id,
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    /// Case-sensitive substring match against the name.
    #[inline]
    pub fn name_contains(&self, term: &str) -> bool {
        self.name.contains(term)
    }
}
