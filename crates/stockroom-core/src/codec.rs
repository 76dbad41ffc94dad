//! # Line Codec
//!
//! Converts between [`Item`] and one line of the data file.
//!
//! ## Line Format
//! ```text
//! <id>,<name>,<quantity>,<price>
//!
//!   1,Widget,5,2.5
//!   │   │    │  └── f64, shortest round-trip form
//!   │   │    └───── i64
//!   │   └────────── verbatim, NOT escaped
//!   └────────────── u32 > 0
//! ```
//!
//! ## Decoding Policy
//! Decoding is lenient so that a partly damaged file still loads. Every
//! decision is reported back to the caller instead of happening silently:
//!
//! ```text
//! ┌──────────┬──────────────────────────┬───────────────────────────────────┐
//! │ field    │ missing                  │ unparseable                       │
//! ├──────────┼──────────────────────────┼───────────────────────────────────┤
//! │ id       │ line skipped (MissingId) │ line skipped (InvalidId)          │
//! │ name     │ "" + FieldDefault        │ n/a (any text is a name)          │
//! │ quantity │ 0  + FieldDefault        │ 0   + FieldDefault(Unparseable)   │
//! │ price    │ 0.0 + FieldDefault       │ 0.0 + FieldDefault(Unparseable)   │
//! └──────────┴──────────────────────────┴───────────────────────────────────┘
//! ```
//!
//! Fields past the fourth are ignored. An empty field counts as missing.

use std::fmt;

use crate::types::{Item, ItemId};
use crate::FIELD_DELIMITER;

// =============================================================================
// Decoding Outcome Types
// =============================================================================

/// A field of the line format that can be defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Name,
    Quantity,
    Price,
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ItemField::Name => "name",
            ItemField::Quantity => "quantity",
            ItemField::Price => "price",
        };
        f.write_str(label)
    }
}

/// Why a field fell back to its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultCause {
    /// The line ended before this field, or the field was empty.
    Missing,
    /// The field was present but did not parse. Holds the raw text.
    Unparseable(String),
}

/// Record of one defaulting decision made while decoding a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefault {
    pub field: ItemField,
    pub cause: DefaultCause,
}

/// Why a whole line was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Empty or whitespace-only line.
    Blank,
    /// The id field was empty.
    MissingId,
    /// The id field was not a positive integer. Holds the raw text.
    InvalidId(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Blank => f.write_str("blank line"),
            SkipReason::MissingId => f.write_str("missing id"),
            SkipReason::InvalidId(raw) => write!(f, "invalid id '{}'", raw),
        }
    }
}

/// A successfully decoded line.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedLine {
    pub item: Item,
    /// Fields that were not taken from the line. Empty for a clean line.
    pub defaults: Vec<FieldDefault>,
}

// =============================================================================
// Encoding
// =============================================================================

/// Encodes an item as one line, without the trailing newline.
///
/// ## Example
/// ```rust
/// use stockroom_core::{codec::encode_line, Item};
///
/// assert_eq!(encode_line(&Item::new(1, "Widget", 5, 2.5)), "1,Widget,5,2.5");
/// assert_eq!(encode_line(&Item::new(2, "Bolt", 0, 3.0)), "2,Bolt,0,3");
/// ```
pub fn encode_line(item: &Item) -> String {
    format!(
        "{id}{d}{name}{d}{qty}{d}{price}",
        id = item.id,
        name = item.name,
        qty = item.quantity,
        price = item.unit_price,
        d = FIELD_DELIMITER,
    )
}

// =============================================================================
// Decoding
// =============================================================================

/// Decodes one line of the data file.
///
/// ## Returns
/// * `Ok(DecodedLine)` - An item, plus the list of defaulted fields
/// * `Err(SkipReason)` - The line carries no usable id and must be dropped
pub fn decode_line(line: &str) -> Result<DecodedLine, SkipReason> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.trim().is_empty() {
        return Err(SkipReason::Blank);
    }

    let mut fields = line.split(FIELD_DELIMITER).map(present);
    let mut defaults = Vec::new();

    let id = decode_id(fields.next().flatten())?;

    let name = match fields.next().flatten() {
        Some(name) => name.to_string(),
        None => {
            defaults.push(FieldDefault {
                field: ItemField::Name,
                cause: DefaultCause::Missing,
            });
            String::new()
        }
    };

    let quantity = decode_or_default(
        fields.next().flatten(),
        ItemField::Quantity,
        &mut defaults,
        |raw| raw.parse::<i64>().ok(),
    )
    .unwrap_or(0);

    let unit_price = decode_or_default(
        fields.next().flatten(),
        ItemField::Price,
        &mut defaults,
        |raw| raw.parse::<f64>().ok().filter(|p| p.is_finite()),
    )
    .unwrap_or(0.0);

    Ok(DecodedLine {
        item: Item {
            id,
            name,
            quantity,
            unit_price,
        },
        defaults,
    })
}

/// Treats an empty field the same as an absent one.
fn present(field: &str) -> Option<&str> {
    if field.is_empty() {
        None
    } else {
        Some(field)
    }
}

fn decode_id(field: Option<&str>) -> Result<ItemId, SkipReason> {
    let raw = field.ok_or(SkipReason::MissingId)?;
    match raw.trim().parse::<ItemId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(SkipReason::InvalidId(raw.to_string())),
    }
}

fn decode_or_default<T>(
    field: Option<&str>,
    which: ItemField,
    defaults: &mut Vec<FieldDefault>,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    let cause = match field {
        None => DefaultCause::Missing,
        Some(raw) => match parse(raw.trim()) {
            Some(value) => return Some(value),
            None => DefaultCause::Unparseable(raw.to_string()),
        },
    };
    defaults.push(FieldDefault { field: which, cause });
    None
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decode_clean_line() {
        let decoded = decode_line("1,Widget,5,2.5").unwrap();
        assert_eq!(decoded.item, Item::new(1, "Widget", 5, 2.5));
        assert!(decoded.defaults.is_empty());
    }

    #[test]
    fn test_decode_strips_carriage_return() {
        let decoded = decode_line("3,Bolt,10,0.1\r").unwrap();
        assert_eq!(decoded.item, Item::new(3, "Bolt", 10, 0.1));
        assert!(decoded.defaults.is_empty());
    }

    #[test]
    fn test_decode_skips_bad_ids() {
        assert_eq!(decode_line(""), Err(SkipReason::Blank));
        assert_eq!(decode_line("   "), Err(SkipReason::Blank));
        assert_eq!(decode_line(",Widget,5,2.5"), Err(SkipReason::MissingId));
        assert_eq!(
            decode_line("abc,Widget,5,2.5"),
            Err(SkipReason::InvalidId("abc".to_string()))
        );
        assert_eq!(
            decode_line("0,Widget,5,2.5"),
            Err(SkipReason::InvalidId("0".to_string()))
        );
        assert_eq!(
            decode_line("-4,Widget,5,2.5"),
            Err(SkipReason::InvalidId("-4".to_string()))
        );
    }

    #[test]
    fn test_decode_defaults_missing_fields() {
        let decoded = decode_line("7").unwrap();
        assert_eq!(decoded.item, Item::new(7, "", 0, 0.0));
        assert_eq!(
            decoded.defaults,
            vec![
                FieldDefault { field: ItemField::Name, cause: DefaultCause::Missing },
                FieldDefault { field: ItemField::Quantity, cause: DefaultCause::Missing },
                FieldDefault { field: ItemField::Price, cause: DefaultCause::Missing },
            ]
        );

        let decoded = decode_line("8,Nut,,").unwrap();
        assert_eq!(decoded.item, Item::new(8, "Nut", 0, 0.0));
        assert_eq!(decoded.defaults.len(), 2);
    }

    #[test]
    fn test_decode_defaults_unparseable_numbers() {
        let decoded = decode_line("2,Gear,lots,cheap").unwrap();
        assert_eq!(decoded.item, Item::new(2, "Gear", 0, 0.0));
        assert_eq!(
            decoded.defaults,
            vec![
                FieldDefault {
                    field: ItemField::Quantity,
                    cause: DefaultCause::Unparseable("lots".to_string()),
                },
                FieldDefault {
                    field: ItemField::Price,
                    cause: DefaultCause::Unparseable("cheap".to_string()),
                },
            ]
        );
    }

    #[test]
    fn test_decode_ignores_extra_fields() {
        let decoded = decode_line("4,Spring,9,1.5,extra,fields").unwrap();
        assert_eq!(decoded.item, Item::new(4, "Spring", 9, 1.5));
        assert!(decoded.defaults.is_empty());
    }

    #[test]
    fn test_unescaped_delimiter_shifts_fields() {
        let line = encode_line(&Item::new(5, "Nuts, assorted", 12, 0.5));
        assert_eq!(line, "5,Nuts, assorted,12,0.5");

        let decoded = decode_line(&line).unwrap();
        assert_eq!(decoded.item.name, "Nuts");
        assert_eq!(
            decoded.defaults,
            vec![FieldDefault {
                field: ItemField::Quantity,
                cause: DefaultCause::Unparseable(" assorted".to_string()),
            }]
        );
        assert_eq!(decoded.item.unit_price, 12.0);
    }

    #[test]
    fn test_encode_formats_prices_compactly() {
        assert_eq!(encode_line(&Item::new(1, "Widget", 5, 2.50)), "1,Widget,5,2.5");
        assert_eq!(encode_line(&Item::new(1, "Widget", -1, 0.0)), "1,Widget,-1,0");
        assert_eq!(encode_line(&Item::new(9, "Gizmo", 2, 3.75)), "9,Gizmo,2,3.75");
    }

    proptest! {
        #[test]
        fn prop_encode_decode_preserves_items(
            id in 1u32..,
            name in "[^,\r\n]{1,24}",
            quantity in any::<i64>(),
            unit_price in -1.0e9f64..1.0e9f64,
        ) {
            let item = Item::new(id, name, quantity, unit_price);
            let decoded = decode_line(&encode_line(&item)).unwrap();
            prop_assert_eq!(decoded.item, item);
            prop_assert!(decoded.defaults.is_empty());
        }
    }
}
