//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  stockroom-store errors (separate crate)                               │
//! │  └── StoreError       - Remote table-store failures                    │
//! │                                                                         │
//! │  stockroom-guard errors (separate crate)                               │
//! │  └── GuardError       - What callers see (public taxonomy)             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → GuardError → Caller  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, field, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations. They should be caught
/// and translated to user-friendly messages by the calling layer.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Insufficient stock to apply a negative adjustment.
    ///
    /// ## When This Occurs
    /// - A stock withdrawal would drive quantity below zero
    ///
    /// ## User Workflow
    /// ```text
    /// Withdraw 20 from product with quantity 7
    ///      │
    ///      ▼
    /// q + delta = 7 + (-20) = -13 < 0
    ///      │
    ///      ▼
    /// InsufficientStock { product: "Kabel", available: 7, requested: -20 }
    ///      │
    ///      ▼
    /// UI shows: "cannot remove 20 (available: 7)"
    /// ```
    #[error("Insufficient stock for {product}: available {available}, requested change {requested}")]
    InsufficientStock {
        product: String,
        available: i64,
        requested: i64,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before any store call is made.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// A reference field does not point at an existing record.
    #[error("{field} {value} does not reference an existing record")]
    InvalidReference { field: String, value: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            product: "Kabel".to_string(),
            available: 7,
            requested: -20,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Kabel: available 7, requested change -20"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::InvalidReference {
            field: "category_id".to_string(),
            value: 42,
        };
        assert_eq!(
            err.to_string(),
            "category_id 42 does not reference an existing record"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBeNonNegative {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
