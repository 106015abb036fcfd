//! # Table Store Contract
//!
//! The generic by-table-name contract every store backend implements.
//!
//! ## The Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        TableStore                                       │
//! │                                                                         │
//! │  select(table, filters)              → rows matching all filters       │
//! │  insert(table, row)                  → created row with assigned id    │
//! │  update(table, id, patch)            → () or NotFound                  │
//! │  update_where(table, id, guard, ..)  → did a row match? (CAS)          │
//! │  delete(table, id)                   → () or NotFound                  │
//! │                                                                         │
//! │  Rows are open field → scalar maps. No transactions, no batches.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why update_where?
//! The stock-adjustment flow must not lose updates between its read and
//! its write. `update_where` applies the patch only while a guard column
//! still holds the value the caller observed, so a stale read shows up as
//! "no row matched" instead of silently overwriting a concurrent change.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::StoreResult;

/// A store row: an open mapping of field name to scalar value.
pub type Row = Map<String, Value>;

// =============================================================================
// Filter
// =============================================================================

/// An equality filter on one column.
///
/// The only filter shape the inventory flows need; richer predicates stay
/// at the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub column: String,
    pub value: Value,
}

impl Filter {
    /// Creates an equality filter.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_store::Filter;
    ///
    /// let by_category = Filter::eq("category_id", 3);
    /// assert_eq!(by_category.column, "category_id");
    /// ```
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Filter {
            column: column.into(),
            value: value.into(),
        }
    }
}

// =============================================================================
// TableStore Trait
// =============================================================================

/// The table-store contract consumed by the inventory guard.
///
/// ## Usage
/// ```rust,ignore
/// let rows = store.select("product", &[Filter::eq("category_id", 3)]).await?;
/// let created = store.insert("category", row).await?;
/// ```
///
/// Implementations: [`crate::RestTableStore`] for the hosted backend,
/// [`crate::MemoryTableStore`] for tests.
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Returns all rows of `table` matching every filter.
    async fn select(&self, table: &str, filters: &[Filter]) -> StoreResult<Vec<Row>>;

    /// Inserts one row and returns it as created, including the
    /// store-assigned `id` (and any other store-assigned fields).
    ///
    /// ## Errors
    /// `UniqueViolation` / `ForeignKeyViolation` when a backend constraint
    /// rejects the row.
    async fn insert(&self, table: &str, row: Row) -> StoreResult<Row>;

    /// Applies `patch` to the row with the given id.
    ///
    /// ## Errors
    /// `NotFound` when the id matches no row.
    async fn update(&self, table: &str, id: i64, patch: Row) -> StoreResult<()>;

    /// Applies `patch` to the row with the given id only while `guard`
    /// still matches (compare-and-set).
    ///
    /// ## Returns
    /// * `Ok(true)` - a row matched id + guard and was patched
    /// * `Ok(false)` - the row exists with a different guard value, or is
    ///   gone; the caller decides whether to re-read and retry
    async fn update_where(
        &self,
        table: &str,
        id: i64,
        guard: Filter,
        patch: Row,
    ) -> StoreResult<bool>;

    /// Deletes the row with the given id.
    ///
    /// ## Errors
    /// `NotFound` when the id matches no row.
    async fn delete(&self, table: &str, id: i64) -> StoreResult<()>;
}
