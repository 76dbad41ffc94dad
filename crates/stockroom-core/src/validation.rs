//! # Validation Module
//!
//! Strict parsing of text the operator types at a prompt.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Input Is Checked                             │
//! │                                                                         │
//! │  Operator types "  12 "                                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Command handler (apps/cli)                                             │
//! │  └── THIS MODULE: trim, reject empty, parse the WHOLE token             │
//! │           │                                                             │
//! │           ├── "12"    → Ok(12)                                          │
//! │           ├── "12abc" → InvalidNumber (nothing may be left over)        │
//! │           └── ""      → Required                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  ItemStore (stockroom-store) receives only valid values                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The data file is decoded by [`crate::codec`] instead, which defaults bad
//! fields rather than rejecting them.
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::{parse_quantity, parse_unit_price};
//!
//! assert_eq!(parse_quantity(" 5 ").unwrap(), 5);
//! assert_eq!(parse_unit_price("2.50").unwrap(), 2.5);
//! assert!(parse_quantity("5 boxes").is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::ItemId;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name and returns it exactly as typed.
///
/// ## Rules
/// - Must contain at least one non-whitespace character
/// - Surrounding whitespace is kept
pub fn validate_item_name(name: &str) -> ValidationResult<String> {
    if name.trim().is_empty() {
        return Err(ValidationError::required("name"));
    }

    Ok(name.to_string())
}

/// Validates a search term.
///
/// ## Rules
/// - Must not be empty
/// - Not trimmed: a single space is a legitimate substring to look for
pub fn validate_search_term(term: &str) -> ValidationResult<&str> {
    if term.is_empty() {
        return Err(ValidationError::required("search term"));
    }

    Ok(term)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses an item id.
///
/// ## Rules
/// - Trimmed token must be a whole unsigned integer
/// - Zero is rejected (ids start at 1)
pub fn parse_item_id(raw: &str) -> ValidationResult<ItemId> {
    let token = non_empty_token(raw, "id")?;

    match token.parse::<ItemId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ValidationError::invalid_number("id", token)),
    }
}

/// Parses a quantity.
///
/// ## Rules
/// - Trimmed token must be a whole signed integer
/// - Negative values are accepted
pub fn parse_quantity(raw: &str) -> ValidationResult<i64> {
    let token = non_empty_token(raw, "quantity")?;

    token
        .parse::<i64>()
        .map_err(|_| ValidationError::invalid_number("quantity", token))
}

/// Parses a unit price.
///
/// ## Rules
/// - Trimmed token must be a complete floating-point literal
/// - `inf` and `NaN` are rejected; they cannot be meaningfully listed or summed
/// - Negative values are accepted
pub fn parse_unit_price(raw: &str) -> ValidationResult<f64> {
    let token = non_empty_token(raw, "price")?;

    match token.parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(price),
        _ => Err(ValidationError::invalid_number("price", token)),
    }
}

fn non_empty_token<'a>(raw: &'a str, field: &str) -> ValidationResult<&'a str> {
    let token = raw.trim();
    if token.is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(token)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert_eq!(validate_item_name("Widget").unwrap(), "Widget");
        assert_eq!(validate_item_name("  Blue Widget ").unwrap(), "  Blue Widget ");
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
    }

    #[test]
    fn test_validate_search_term() {
        assert_eq!(validate_search_term("Wid").unwrap(), "Wid");
        assert_eq!(validate_search_term(" ").unwrap(), " ");
        assert_eq!(
            validate_search_term(""),
            Err(ValidationError::required("search term"))
        );
    }

    #[test]
    fn test_parse_item_id() {
        assert_eq!(parse_item_id("1").unwrap(), 1);
        assert_eq!(parse_item_id(" 42\t").unwrap(), 42);

        assert!(parse_item_id("").is_err());
        assert!(parse_item_id("0").is_err());
        assert!(parse_item_id("-3").is_err());
        assert!(parse_item_id("1.5").is_err());
        assert!(parse_item_id("7x").is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("5").unwrap(), 5);
        assert_eq!(parse_quantity(" -2 ").unwrap(), -2);
        assert_eq!(parse_quantity("0").unwrap(), 0);

        assert_eq!(parse_quantity("   "), Err(ValidationError::required("quantity")));
        assert_eq!(
            parse_quantity("2.5"),
            Err(ValidationError::invalid_number("quantity", "2.5"))
        );
        assert!(parse_quantity("five").is_err());
    }

    #[test]
    fn test_parse_unit_price() {
        assert_eq!(parse_unit_price("2.50").unwrap(), 2.5);
        assert_eq!(parse_unit_price("3").unwrap(), 3.0);
        assert_eq!(parse_unit_price("-0.75").unwrap(), -0.75);
        assert_eq!(parse_unit_price("1e2").unwrap(), 100.0);

        assert!(parse_unit_price("").is_err());
        assert!(parse_unit_price("2.5.0").is_err());
        assert!(parse_unit_price("$3").is_err());
        assert!(parse_unit_price("inf").is_err());
        assert!(parse_unit_price("NaN").is_err());
    }
}
