//! # Error Types
//!
//! Validation errors for operator input.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                      │
//! │  └── ValidationError  - Operator input failures                         │
//! │                                                                         │
//! │  stockroom-store errors (separate crate)                                │
//! │  └── StoreError       - File read/write failures                        │
//! │                                                                         │
//! │  CLI errors (in app)                                                    │
//! │  └── CliError         - Terminal I/O and store failures                 │
//! │                                                                         │
//! │  Flow: ValidationError → message to operator (never fatal)              │
//! │        StoreError      → CliError → message to operator                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Malformed lines in the data file are not errors; see
//! [`crate::codec::SkipReason`] and [`crate::codec::FieldDefault`].

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Operator input that failed validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Text that was not a valid number for the field.
    #[error("{field} '{value}' is not a valid number")]
    InvalidNumber { field: String, value: String },
}

impl ValidationError {
    /// Creates a Required error for the given field.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    /// Creates an InvalidNumber error for the given field and raw input.
    pub fn invalid_number(field: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::InvalidNumber {
            field: field.into(),
            value: value.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;
