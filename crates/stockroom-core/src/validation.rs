//! # Validation Module
//!
//! Input validation utilities for Stockroom.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation (external)                                      │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Inventory Guard (Rust)                                       │
//! │  └── THIS MODULE: field validation before any store call               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Table Store (remote)                                         │
//! │  ├── NOT NULL constraints                                              │
//! │  ├── UNIQUE constraints                                                │
//! │  └── Foreign key constraints                                           │
//! │                                                                         │
//! │  Defense in depth: multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::{validate_product_name, validate_initial_quantity};
//!
//! validate_product_name("Kabel HDMI").unwrap();
//! validate_initial_quantity(10).unwrap();
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_CODE_LEN, MAX_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a category display name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 200 characters
///
/// ## Returns
/// The trimmed name, ready for insertion.
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::validate_category_name;
///
/// assert_eq!(validate_category_name(" Elektronika ").unwrap(), "Elektronika");
/// assert!(validate_category_name("").is_err());
/// assert!(validate_category_name("   ").is_err());
/// ```
pub fn validate_category_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

/// Validates a category short code.
///
/// Only called when the deployment requires codes; deployments with codes
/// disabled never reach this check.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 50 characters
///
/// ## Returns
/// The trimmed code.
pub fn validate_category_code(code: Option<&str>) -> ValidationResult<String> {
    let code = code.unwrap_or("").trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "code".to_string(),
        });
    }

    if code.len() > MAX_CODE_LEN {
        return Err(ValidationError::TooLong {
            field: "code".to_string(),
            max: MAX_CODE_LEN,
        });
    }

    Ok(code.to_string())
}

/// Validates a product display name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 200 characters
///
/// ## Returns
/// The trimmed name.
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Kabel HDMI 2m").is_ok());
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an initial stock quantity.
///
/// ## Rules
/// - Must be zero or greater (zero-stock products are allowed; they just
///   show up as low stock)
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::validate_initial_quantity;
///
/// assert!(validate_initial_quantity(0).is_ok());
/// assert!(validate_initial_quantity(10).is_ok());
/// assert!(validate_initial_quantity(-1).is_err());
/// ```
pub fn validate_initial_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must not be negative
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use stockroom_core::money::Money;
/// use stockroom_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(500)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-1)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_category_name() {
        assert_eq!(validate_category_name("Elektronika").unwrap(), "Elektronika");
        assert_eq!(validate_category_name("  AGD  ").unwrap(), "AGD");

        assert!(validate_category_name("").is_err());
        assert!(validate_category_name("   ").is_err());
        assert!(validate_category_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_category_code() {
        assert_eq!(validate_category_code(Some("ELK")).unwrap(), "ELK");
        assert_eq!(validate_category_code(Some(" ELK ")).unwrap(), "ELK");

        assert!(validate_category_code(None).is_err());
        assert!(validate_category_code(Some("")).is_err());
        assert!(validate_category_code(Some("   ")).is_err());
        assert!(validate_category_code(Some(&"A".repeat(100))).is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Kabel HDMI 2m").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_initial_quantity() {
        assert!(validate_initial_quantity(0).is_ok());
        assert!(validate_initial_quantity(999).is_ok());
        assert!(validate_initial_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(1099)).is_ok());
        assert!(validate_price(Money::from_cents(-100)).is_err());
    }
}
