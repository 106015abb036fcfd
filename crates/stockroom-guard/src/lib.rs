//! # stockroom-guard: Inventory Operations for Stockroom
//!
//! This crate is the public surface of Stockroom. A presentation layer
//! collects raw input, calls one of the operations here, matches on the
//! error kind for messaging, and re-queries to refresh whatever it
//! displays. Refresh is pull-based and caller-initiated; the guard never
//! refreshes anything behind the caller's back.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Presentation Layer (external)                      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ calls, catches error kinds             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ stockroom-guard (THIS CRATE) ★                  │   │
//! │  │                                                                 │   │
//! │  │   create_category   create_product   adjust_stock               │   │
//! │  │   delete_product    list_inventory   summarize                  │   │
//! │  │                                                                 │   │
//! │  └───────────┬─────────────────────────────────────┬───────────────┘   │
//! │              │ validation, money, report math      │ rows              │
//! │  ┌───────────▼───────────┐             ┌───────────▼───────────────┐   │
//! │  │   stockroom-core      │             │    stockroom-store        │   │
//! │  └───────────────────────┘             └───────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use stockroom_core::{Money, NewCategory, NewProduct};
//! use stockroom_guard::InventoryGuard;
//! use stockroom_store::MemoryTableStore;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let guard = InventoryGuard::new(MemoryTableStore::new());
//!
//! let category = guard
//!     .create_category(NewCategory {
//!         code: None,
//!         name: "Elektronika".to_string(),
//!         description: None,
//!     })
//!     .await?;
//!
//! let product = guard
//!     .create_product(NewProduct {
//!         name: "Kabel".to_string(),
//!         quantity: 10,
//!         price: Money::from_cents(500),
//!         category_id: category.id,
//!     })
//!     .await?;
//!
//! assert_eq!(guard.adjust_stock(product.id, -3).await?, 7);
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod guard;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::GuardConfig;
pub use error::{GuardError, GuardResult};
pub use guard::{InventoryGuard, CATEGORY_TABLE, PRODUCT_TABLE};
