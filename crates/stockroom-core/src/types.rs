//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Category     │   │    Product      │   │  InventoryLine  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (store)     │   │  id (store)     │   │  product + name │       │
//! │  │  code?          │   │  name           │   │  of its category│       │
//! │  │  name           │   │  quantity       │   │  line_value =   │       │
//! │  │  description?   │   │  price_cents    │   │  qty × price    │       │
//! │  └─────────────────┘   │  category_id    │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! │                                                                         │
//! │  NewCategory / NewProduct: caller-supplied input, no id yet            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Identifiers are assigned by the table store on insert (integer sequence).
//! Input types (`NewCategory`, `NewProduct`) therefore carry no id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// A named grouping that products belong to.
///
/// Categories are created once and never updated or deleted; products
/// reference them by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier, assigned by the store on insert.
    pub id: i64,

    /// Optional short code. Whether a code is required is a deployment
    /// setting, not a property of the type.
    pub code: Option<String>,

    /// Display name shown in listings and category pickers.
    pub name: String,

    /// Optional free-text description.
    pub description: Option<String>,

    /// When the category was created (assigned by the store).
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied input for creating a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCategory {
    pub code: Option<String>,
    pub name: String,
    pub description: Option<String>,
}

// =============================================================================
// Product
// =============================================================================

/// An inventory item with a quantity on hand and a unit price.
///
/// Name, price, and category are fixed at creation; only `quantity`
/// changes afterwards, through stock adjustments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, assigned by the store on insert.
    pub id: i64,

    /// Display name shown in listings.
    pub name: String,

    /// Units on hand. Never negative.
    pub quantity: i64,

    /// Unit price in cents (smallest currency unit).
    pub price_cents: i64,

    /// The category this product belongs to.
    pub category_id: i64,

    /// When the product was created (assigned by the store).
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the total value of the units on hand.
    #[inline]
    pub fn stock_value(&self) -> Money {
        self.price().multiply_quantity(self.quantity)
    }

    /// Computes the quantity after applying a signed stock adjustment.
    ///
    /// ## Algorithm
    /// `q' = q + delta`; a result below zero is rejected without any
    /// state change, carrying what was available and what was asked for.
    ///
    /// ## Example
    /// ```rust
    /// # use chrono::Utc;
    /// use stockroom_core::types::Product;
    ///
    /// # let product = Product {
    /// #     id: 1,
    /// #     name: "Kabel".to_string(),
    /// #     quantity: 10,
    /// #     price_cents: 500,
    /// #     category_id: 1,
    /// #     created_at: Utc::now(),
    /// # };
    /// assert_eq!(product.quantity_after(-3).unwrap(), 7);
    /// assert!(product.quantity_after(-20).is_err());
    /// ```
    pub fn quantity_after(&self, delta: i64) -> CoreResult<i64> {
        let next = self.quantity + delta;
        if next < 0 {
            return Err(CoreError::InsufficientStock {
                product: self.name.clone(),
                available: self.quantity,
                requested: delta,
            });
        }
        Ok(next)
    }
}

/// Caller-supplied input for creating a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    /// Initial units on hand (must be ≥ 0).
    pub quantity: i64,
    /// Unit price (must not be negative).
    pub price: Money,
    /// Id of an existing category.
    pub category_id: i64,
}

// =============================================================================
// Inventory Line
// =============================================================================

/// Name shown for a product whose category row cannot be resolved.
pub const MISSING_CATEGORY_NAME: &str = "none";

/// A product joined with its category for listing and reporting.
///
/// The join is performed client-side from two selects; a dangling
/// `category_id` yields [`MISSING_CATEGORY_NAME`] rather than an error so
/// listings stay renderable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryLine {
    pub product_id: i64,
    pub name: String,
    pub quantity: i64,
    pub price_cents: i64,
    /// Display name of the category, or [`MISSING_CATEGORY_NAME`].
    pub category_name: String,
    /// quantity × unit price, in cents.
    pub line_value_cents: i64,
}

impl InventoryLine {
    /// Builds a line from a product and its (possibly missing) category name.
    pub fn from_product(product: &Product, category_name: Option<&str>) -> Self {
        InventoryLine {
            product_id: product.id,
            name: product.name.clone(),
            quantity: product.quantity,
            price_cents: product.price_cents,
            category_name: category_name
                .unwrap_or(MISSING_CATEGORY_NAME)
                .to_string(),
            line_value_cents: product.stock_value().cents(),
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the line value as Money.
    #[inline]
    pub fn line_value(&self) -> Money {
        Money::from_cents(self.line_value_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(quantity: i64, price_cents: i64) -> Product {
        Product {
            id: 1,
            name: "Kabel".to_string(),
            quantity,
            price_cents,
            category_id: 1,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_stock_value() {
        let p = product(10, 500);
        assert_eq!(p.stock_value(), Money::from_cents(5000));
    }

    #[test]
    fn test_quantity_after_in_both_directions() {
        let p = product(10, 500);
        assert_eq!(p.quantity_after(-3).unwrap(), 7);
        assert_eq!(p.quantity_after(5).unwrap(), 15);
        // Down to exactly zero is allowed
        assert_eq!(p.quantity_after(-10).unwrap(), 0);
    }

    #[test]
    fn test_quantity_after_rejects_negative_result() {
        let p = product(7, 500);
        let err = p.quantity_after(-20).unwrap_err();
        match err {
            CoreError::InsufficientStock {
                product,
                available,
                requested,
            } => {
                assert_eq!(product, "Kabel");
                assert_eq!(available, 7);
                assert_eq!(requested, -20);
            }
            _ => panic!("Expected InsufficientStock"),
        }
    }

    #[test]
    fn test_line_from_product_with_category() {
        let p = product(10, 500);
        let line = InventoryLine::from_product(&p, Some("Elektronika"));
        assert_eq!(line.category_name, "Elektronika");
        assert_eq!(line.line_value_cents, 5000);
        assert_eq!(line.line_value(), Money::from_cents(5000));
    }

    #[test]
    fn test_line_from_product_missing_category() {
        let p = product(2, 10000);
        let line = InventoryLine::from_product(&p, None);
        assert_eq!(line.category_name, MISSING_CATEGORY_NAME);
        assert_eq!(line.line_value_cents, 20000);
    }
}
