//! # Inventory Guard
//!
//! The operations a presentation layer calls, and the invariants they
//! enforce before anything reaches the table store.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Guard Operation Flow                                 │
//! │                                                                         │
//! │  caller input                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate fields (stockroom-core, no I/O)                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  check preconditions against the store (category exists, ...)          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  one insert / patch / delete by table name                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  return the affected row — the caller re-queries to refresh            │
//! │  anything it displays; there is no hidden refresh                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Stock Adjustment Without Lost Updates
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ❌ WRONG: unguarded read-modify-write                                  │
//! │     read q=10 ─ compute 7 ─ write 7    (a concurrent -5 vanishes)      │
//! │                                                                         │
//! │  ✅ CORRECT: compare-and-set on the observed quantity                   │
//! │     read q=10 ─ compute 7 ─ patch WHERE quantity=10                    │
//! │     no row matched? someone moved first → re-read and retry            │
//! │                                                                         │
//! │  Two terminals can both withdraw, but neither can overwrite the        │
//! │  other or sneak past the ≥ 0 check on a stale read.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use stockroom_core::report::{self, InventorySummary};
use stockroom_core::validation::{
    validate_category_code, validate_category_name, validate_initial_quantity,
    validate_price, validate_product_name,
};
use stockroom_core::{Category, InventoryLine, NewCategory, NewProduct, Product, ValidationError};
use stockroom_store::{Filter, Row, TableStore};

use crate::config::GuardConfig;
use crate::error::{GuardError, GuardResult};

/// Backend table holding categories.
pub const CATEGORY_TABLE: &str = "category";

/// Backend table holding products.
pub const PRODUCT_TABLE: &str = "product";

// =============================================================================
// Inventory Guard
// =============================================================================

/// The inventory guard: validates operations and applies them through an
/// injected table store.
///
/// ## Construction
/// The store client is dependency-injected; its lifecycle belongs to the
/// process entry point, not to this type.
///
/// ```rust
/// use stockroom_guard::{GuardConfig, InventoryGuard};
/// use stockroom_store::MemoryTableStore;
///
/// let guard = InventoryGuard::new(MemoryTableStore::new());
/// let strict = InventoryGuard::with_config(
///     MemoryTableStore::new(),
///     GuardConfig::default().require_category_code(true),
/// );
/// ```
#[derive(Debug)]
pub struct InventoryGuard<S> {
    store: S,
    config: GuardConfig,
}

impl<S: TableStore> InventoryGuard<S> {
    /// Creates a guard with default configuration.
    pub fn new(store: S) -> Self {
        Self::with_config(store, GuardConfig::default())
    }

    /// Creates a guard with explicit configuration.
    pub fn with_config(store: S, config: GuardConfig) -> Self {
        InventoryGuard { store, config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    // =========================================================================
    // Category Operations
    // =========================================================================

    /// Creates a category.
    ///
    /// ## Rules
    /// - `name` must be non-empty after trimming
    /// - `code` is required only when the deployment says so; otherwise a
    ///   blank code is stored as absent
    /// - with name uniqueness enforcement on, an existing category with
    ///   the same name is a conflict
    ///
    /// ## Returns
    /// The created category with its store-assigned id.
    ///
    /// ## Errors
    /// * `Validation` - empty name, or missing code when required
    /// * `Conflict` - duplicate name/code (pre-check or backend constraint)
    pub async fn create_category(&self, input: NewCategory) -> GuardResult<Category> {
        let name = validate_category_name(&input.name)?;

        let code = if self.config.require_category_code {
            Some(validate_category_code(input.code.as_deref())?)
        } else {
            // Optional code: keep it if present, drop pure whitespace
            input
                .code
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string)
        };

        if self.config.enforce_unique_category_names {
            let existing = self
                .store
                .select(CATEGORY_TABLE, &[Filter::eq("name", name.clone())])
                .await?;
            if !existing.is_empty() {
                return Err(GuardError::Conflict(format!(
                    "category '{}' already exists",
                    name
                )));
            }
        }

        let mut row = Row::new();
        row.insert("code".to_string(), code.map(Value::from).unwrap_or(Value::Null));
        row.insert("name".to_string(), Value::from(name.clone()));
        row.insert(
            "description".to_string(),
            input
                .description
                .map(Value::from)
                .unwrap_or(Value::Null),
        );

        let created = self.store.insert(CATEGORY_TABLE, row).await?;
        let category: Category = decode(CATEGORY_TABLE, created)?;

        info!(id = category.id, name = %category.name, "category created");
        Ok(category)
    }

    /// Lists all categories.
    pub async fn list_categories(&self) -> GuardResult<Vec<Category>> {
        let rows = self.store.select(CATEGORY_TABLE, &[]).await?;
        rows.into_iter()
            .map(|row| decode(CATEGORY_TABLE, row))
            .collect()
    }

    // =========================================================================
    // Product Operations
    // =========================================================================

    /// Creates a product.
    ///
    /// ## Rules
    /// - `name` must be non-empty after trimming
    /// - `quantity` ≥ 0, `price` ≥ 0
    /// - at least one category must exist, and `category_id` must
    ///   reference one of them
    ///
    /// ## Returns
    /// The created product; quantity and price are stored exactly as
    /// given.
    ///
    /// ## Errors
    /// * `NoCategories` - nothing to attach the product to yet; the caller
    ///   should steer the user towards creating a category first
    /// * `Validation` - empty name, negative quantity/price, or a
    ///   `category_id` that matches no existing category
    pub async fn create_product(&self, input: NewProduct) -> GuardResult<Product> {
        let name = validate_product_name(&input.name)?;
        validate_initial_quantity(input.quantity)?;
        validate_price(input.price)?;

        // Categories are never deleted, so a reference that passes this
        // check cannot dangle by the time the insert lands.
        let categories = self.store.select(CATEGORY_TABLE, &[]).await?;
        if categories.is_empty() {
            return Err(GuardError::NoCategories);
        }

        let category_exists = categories
            .iter()
            .any(|row| row.get("id").and_then(Value::as_i64) == Some(input.category_id));
        if !category_exists {
            return Err(ValidationError::InvalidReference {
                field: "category_id".to_string(),
                value: input.category_id,
            }
            .into());
        }

        let mut row = Row::new();
        row.insert("name".to_string(), Value::from(name));
        row.insert("quantity".to_string(), Value::from(input.quantity));
        row.insert("price_cents".to_string(), Value::from(input.price.cents()));
        row.insert("category_id".to_string(), Value::from(input.category_id));

        let created = self.store.insert(PRODUCT_TABLE, row).await?;
        let product: Product = decode(PRODUCT_TABLE, created)?;

        info!(
            id = product.id,
            name = %product.name,
            quantity = product.quantity,
            "product created"
        );
        Ok(product)
    }

    /// Applies a signed stock adjustment to a product.
    ///
    /// Negative deltas withdraw stock, positive deltas restock; both go
    /// through the same path. An adjustment that would drive quantity
    /// below zero is rejected without mutating anything.
    ///
    /// ## Arguments
    /// * `product_id` - the product to adjust
    /// * `delta` - signed change to apply
    ///
    /// ## Returns
    /// The quantity after the adjustment.
    ///
    /// ## Errors
    /// * `NotFound` - no such product
    /// * `InsufficientStock` - `quantity + delta < 0`; carries the
    ///   available quantity and the requested change
    /// * `Conflict` - concurrent adjustments kept winning for the whole
    ///   retry budget; the caller may simply try again
    pub async fn adjust_stock(&self, product_id: i64, delta: i64) -> GuardResult<i64> {
        // Initial attempt plus the configured number of retries
        for attempt in 0..=self.config.adjust_retries {
            let product = self.fetch_product(product_id).await?;
            let next = product.quantity_after(delta)?;

            // Patch only while the quantity is still what we just read;
            // a concurrent writer turns this into a clean miss.
            let mut patch = Row::new();
            patch.insert("quantity".to_string(), Value::from(next));

            let applied = self
                .store
                .update_where(
                    PRODUCT_TABLE,
                    product_id,
                    Filter::eq("quantity", product.quantity),
                    patch,
                )
                .await?;

            if applied {
                info!(
                    id = product_id,
                    delta = delta,
                    quantity = next,
                    "stock adjusted"
                );
                return Ok(next);
            }

            debug!(
                id = product_id,
                attempt = attempt,
                "stock adjustment lost a race, re-reading"
            );
        }

        Err(GuardError::Conflict(format!(
            "concurrent stock adjustments on product {}; retries exhausted",
            product_id
        )))
    }

    /// Deletes a product.
    ///
    /// Strict semantics: deleting an id that no longer exists reports
    /// `NotFound` rather than succeeding silently, so double submissions
    /// are visible to the caller.
    pub async fn delete_product(&self, product_id: i64) -> GuardResult<()> {
        self.store.delete(PRODUCT_TABLE, product_id).await?;
        info!(id = product_id, "product deleted");
        Ok(())
    }

    /// Lists all products (unjoined).
    pub async fn list_products(&self) -> GuardResult<Vec<Product>> {
        let rows = self.store.select(PRODUCT_TABLE, &[]).await?;
        rows.into_iter()
            .map(|row| decode(PRODUCT_TABLE, row))
            .collect()
    }

    // =========================================================================
    // Listing and Reporting
    // =========================================================================

    /// Lists products joined with their category names.
    ///
    /// The join happens client-side from two selects; a product whose
    /// category row cannot be resolved shows the `"none"` placeholder.
    pub async fn list_inventory(&self) -> GuardResult<Vec<InventoryLine>> {
        let (products, categories) = self.fetch_all().await?;
        Ok(join_lines(&products, &categories))
    }

    /// Computes headline inventory metrics.
    ///
    /// Total units, total value, category count, and how many products sit
    /// below the configured low-stock threshold.
    pub async fn summarize(&self) -> GuardResult<InventorySummary> {
        let (products, categories) = self.fetch_all().await?;
        let lines = join_lines(&products, &categories);
        Ok(report::summarize(
            &lines,
            categories.len(),
            self.config.low_stock_threshold,
        ))
    }

    // =========================================================================
    // Internals
    // =========================================================================

    async fn fetch_product(&self, product_id: i64) -> GuardResult<Product> {
        let rows = self
            .store
            .select(PRODUCT_TABLE, &[Filter::eq("id", product_id)])
            .await?;

        match rows.into_iter().next() {
            Some(row) => decode(PRODUCT_TABLE, row),
            None => Err(GuardError::not_found(PRODUCT_TABLE, product_id)),
        }
    }

    async fn fetch_all(&self) -> GuardResult<(Vec<Product>, Vec<Category>)> {
        let products = self.list_products().await?;
        let categories = self.list_categories().await?;
        Ok((products, categories))
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Decodes a store row into a typed value.
fn decode<T: DeserializeOwned>(table: &str, row: Row) -> GuardResult<T> {
    serde_json::from_value(Value::Object(row))
        .map_err(|e| GuardError::Store(format!("invalid {} row: {}", table, e)))
}

/// Joins products with category display names.
fn join_lines(products: &[Product], categories: &[Category]) -> Vec<InventoryLine> {
    products
        .iter()
        .map(|product| {
            let category_name = categories
                .iter()
                .find(|c| c.id == product.category_id)
                .map(|c| c.name.as_str());
            InventoryLine::from_product(product, category_name)
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::Money;
    use stockroom_store::MemoryTableStore;

    fn guard() -> InventoryGuard<MemoryTableStore> {
        InventoryGuard::new(MemoryTableStore::new())
    }

    fn new_category(name: &str) -> NewCategory {
        NewCategory {
            code: None,
            name: name.to_string(),
            description: None,
        }
    }

    fn new_product(name: &str, quantity: i64, price_cents: i64, category_id: i64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            quantity,
            price: Money::from_cents(price_cents),
            category_id,
        }
    }

    // =========================================================================
    // create_category
    // =========================================================================

    #[tokio::test]
    async fn create_category_assigns_id_and_trims_name() {
        let guard = guard();
        let category = guard
            .create_category(new_category("  Elektronika  "))
            .await
            .unwrap();

        assert_eq!(category.name, "Elektronika");
        assert!(category.id > 0);
        assert!(category.code.is_none());
    }

    #[tokio::test]
    async fn create_category_rejects_empty_name() {
        let guard = guard();
        let err = guard.create_category(new_category("   ")).await.unwrap_err();
        assert!(matches!(err, GuardError::Validation(_)));

        // Nothing was inserted
        assert!(guard.list_categories().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_category_code_optional_by_default() {
        let guard = guard();

        let without = guard.create_category(new_category("AGD")).await.unwrap();
        assert!(without.code.is_none());

        let with = guard
            .create_category(NewCategory {
                code: Some(" ELK ".to_string()),
                name: "Elektronika".to_string(),
                description: Some("kable i monitory".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(with.code.as_deref(), Some("ELK"));
        assert_eq!(with.description.as_deref(), Some("kable i monitory"));
    }

    #[tokio::test]
    async fn create_category_code_required_when_configured() {
        let guard = InventoryGuard::with_config(
            MemoryTableStore::new(),
            GuardConfig::default().require_category_code(true),
        );

        let err = guard
            .create_category(new_category("Elektronika"))
            .await
            .unwrap_err();
        assert!(matches!(err, GuardError::Validation(_)));

        let ok = guard
            .create_category(NewCategory {
                code: Some("ELK".to_string()),
                name: "Elektronika".to_string(),
                description: None,
            })
            .await
            .unwrap();
        assert_eq!(ok.code.as_deref(), Some("ELK"));
    }

    #[tokio::test]
    async fn create_category_duplicate_name_with_enforcement() {
        let guard = InventoryGuard::with_config(
            MemoryTableStore::new(),
            GuardConfig::default().enforce_unique_category_names(true),
        );

        guard
            .create_category(new_category("Elektronika"))
            .await
            .unwrap();
        let err = guard
            .create_category(new_category("Elektronika"))
            .await
            .unwrap_err();
        assert!(matches!(err, GuardError::Conflict(_)));
    }

    #[tokio::test]
    async fn create_category_duplicate_name_without_enforcement() {
        let guard = guard();

        guard
            .create_category(new_category("Elektronika"))
            .await
            .unwrap();
        // Without enforcement (and no backend constraint) the duplicate
        // is accepted
        guard
            .create_category(new_category("Elektronika"))
            .await
            .unwrap();
        assert_eq!(guard.list_categories().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn create_category_backend_constraint_becomes_conflict() {
        // The backend's own unique constraint fires even when the guard's
        // pre-check is off
        let store = MemoryTableStore::new().with_unique(CATEGORY_TABLE, "name");
        let guard = InventoryGuard::new(store);

        guard
            .create_category(new_category("Elektronika"))
            .await
            .unwrap();
        let err = guard
            .create_category(new_category("Elektronika"))
            .await
            .unwrap_err();
        assert!(matches!(err, GuardError::Conflict(_)));
    }

    // =========================================================================
    // create_product
    // =========================================================================

    #[tokio::test]
    async fn create_product_stores_fields_exactly() {
        let guard = guard();
        let category = guard
            .create_category(new_category("Elektronika"))
            .await
            .unwrap();

        let product = guard
            .create_product(new_product("Kabel", 10, 500, category.id))
            .await
            .unwrap();

        assert_eq!(product.name, "Kabel");
        assert_eq!(product.quantity, 10);
        assert_eq!(product.price(), Money::from_cents(500));
        assert_eq!(product.category_id, category.id);
        assert!(product.id > 0);
    }

    #[tokio::test]
    async fn create_product_rejects_empty_name() {
        let guard = guard();
        let category = guard
            .create_category(new_category("Elektronika"))
            .await
            .unwrap();

        let err = guard
            .create_product(new_product("", 10, 500, category.id))
            .await
            .unwrap_err();
        assert!(matches!(err, GuardError::Validation(_)));
    }

    #[tokio::test]
    async fn create_product_refused_without_categories() {
        let guard = guard();
        let err = guard
            .create_product(new_product("Kabel", 10, 500, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, GuardError::NoCategories));
    }

    #[tokio::test]
    async fn create_product_rejects_unknown_category() {
        let guard = guard();
        guard
            .create_category(new_category("Elektronika"))
            .await
            .unwrap();

        let err = guard
            .create_product(new_product("Kabel", 10, 500, 999))
            .await
            .unwrap_err();
        assert!(matches!(err, GuardError::Validation(_)));
    }

    #[tokio::test]
    async fn create_product_rejects_negative_quantity_and_price() {
        let guard = guard();
        let category = guard
            .create_category(new_category("Elektronika"))
            .await
            .unwrap();

        let err = guard
            .create_product(new_product("Kabel", -1, 500, category.id))
            .await
            .unwrap_err();
        assert!(matches!(err, GuardError::Validation(_)));

        let err = guard
            .create_product(new_product("Kabel", 1, -500, category.id))
            .await
            .unwrap_err();
        assert!(matches!(err, GuardError::Validation(_)));
    }

    #[tokio::test]
    async fn create_product_allows_zero_quantity_and_price() {
        let guard = guard();
        let category = guard
            .create_category(new_category("Elektronika"))
            .await
            .unwrap();

        let product = guard
            .create_product(new_product("Gratis", 0, 0, category.id))
            .await
            .unwrap();
        assert_eq!(product.quantity, 0);
        assert_eq!(product.price(), Money::zero());
    }

    // =========================================================================
    // adjust_stock
    // =========================================================================

    #[tokio::test]
    async fn adjust_stock_withdraws_and_restocks() {
        let guard = guard();
        let category = guard
            .create_category(new_category("Elektronika"))
            .await
            .unwrap();
        let product = guard
            .create_product(new_product("Kabel", 10, 500, category.id))
            .await
            .unwrap();

        assert_eq!(guard.adjust_stock(product.id, -3).await.unwrap(), 7);
        assert_eq!(guard.adjust_stock(product.id, 5).await.unwrap(), 12);
        assert_eq!(guard.adjust_stock(product.id, -12).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn adjust_stock_rejects_going_negative() {
        let guard = guard();
        let category = guard
            .create_category(new_category("Elektronika"))
            .await
            .unwrap();
        let product = guard
            .create_product(new_product("Kabel", 7, 500, category.id))
            .await
            .unwrap();

        let err = guard.adjust_stock(product.id, -20).await.unwrap_err();
        match err {
            GuardError::InsufficientStock {
                product: name,
                available,
                requested,
            } => {
                assert_eq!(name, "Kabel");
                assert_eq!(available, 7);
                assert_eq!(requested, -20);
            }
            other => panic!("Expected InsufficientStock, got {:?}", other),
        }

        // Rejection left the quantity untouched
        let products = guard.list_products().await.unwrap();
        assert_eq!(products[0].quantity, 7);
    }

    #[tokio::test]
    async fn adjust_stock_missing_product_is_not_found() {
        let guard = guard();
        let err = guard.adjust_stock(42, -1).await.unwrap_err();
        assert!(matches!(err, GuardError::NotFound { .. }));
    }

    /// Store double whose compare-and-set always loses, as if another
    /// writer changed the quantity between every read and write.
    struct ContendedStore {
        inner: MemoryTableStore,
    }

    #[async_trait::async_trait]
    impl TableStore for ContendedStore {
        async fn select(
            &self,
            table: &str,
            filters: &[Filter],
        ) -> stockroom_store::StoreResult<Vec<Row>> {
            self.inner.select(table, filters).await
        }

        async fn insert(&self, table: &str, row: Row) -> stockroom_store::StoreResult<Row> {
            self.inner.insert(table, row).await
        }

        async fn update(
            &self,
            table: &str,
            id: i64,
            patch: Row,
        ) -> stockroom_store::StoreResult<()> {
            self.inner.update(table, id, patch).await
        }

        async fn update_where(
            &self,
            _table: &str,
            _id: i64,
            _guard: Filter,
            _patch: Row,
        ) -> stockroom_store::StoreResult<bool> {
            Ok(false)
        }

        async fn delete(&self, table: &str, id: i64) -> stockroom_store::StoreResult<()> {
            self.inner.delete(table, id).await
        }
    }

    #[tokio::test]
    async fn adjust_stock_conflict_when_retries_exhausted() {
        let store = ContendedStore {
            inner: MemoryTableStore::new(),
        };
        let guard = InventoryGuard::with_config(store, GuardConfig::default().adjust_retries(1));

        let category = guard
            .create_category(new_category("Elektronika"))
            .await
            .unwrap();
        let product = guard
            .create_product(new_product("Kabel", 10, 500, category.id))
            .await
            .unwrap();

        let err = guard.adjust_stock(product.id, -1).await.unwrap_err();
        assert!(matches!(err, GuardError::Conflict(_)));

        // The losing writes never touched the stored quantity
        let products = guard.list_products().await.unwrap();
        assert_eq!(products[0].quantity, 10);
    }

    #[tokio::test]
    async fn stock_decrement_scenario() {
        // category created → product (qty 10, price 5.00) → -3 → 7 →
        // -20 fails → quantity stays 7
        let guard = guard();
        let category = guard
            .create_category(new_category("Elektronika"))
            .await
            .unwrap();
        let product = guard
            .create_product(new_product("Kabel", 10, 500, category.id))
            .await
            .unwrap();

        assert_eq!(guard.adjust_stock(product.id, -3).await.unwrap(), 7);

        let err = guard.adjust_stock(product.id, -20).await.unwrap_err();
        assert!(matches!(err, GuardError::InsufficientStock { .. }));

        let products = guard.list_products().await.unwrap();
        assert_eq!(products[0].quantity, 7);
    }

    // =========================================================================
    // delete_product
    // =========================================================================

    #[tokio::test]
    async fn delete_product_removes_it_from_listings() {
        let guard = guard();
        let category = guard
            .create_category(new_category("Elektronika"))
            .await
            .unwrap();
        let product = guard
            .create_product(new_product("Kabel", 10, 500, category.id))
            .await
            .unwrap();

        guard.delete_product(product.id).await.unwrap();
        assert!(guard.list_products().await.unwrap().is_empty());
        assert!(guard.list_inventory().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_product_twice_is_not_found() {
        let guard = guard();
        let category = guard
            .create_category(new_category("Elektronika"))
            .await
            .unwrap();
        let product = guard
            .create_product(new_product("Kabel", 10, 500, category.id))
            .await
            .unwrap();

        guard.delete_product(product.id).await.unwrap();
        let err = guard.delete_product(product.id).await.unwrap_err();
        assert!(matches!(err, GuardError::NotFound { .. }));
    }

    // =========================================================================
    // Listing and Reporting
    // =========================================================================

    #[tokio::test]
    async fn list_inventory_joins_category_names() {
        let guard = guard();
        let elektronika = guard
            .create_category(new_category("Elektronika"))
            .await
            .unwrap();
        let agd = guard.create_category(new_category("AGD")).await.unwrap();

        guard
            .create_product(new_product("Kabel", 10, 500, elektronika.id))
            .await
            .unwrap();
        guard
            .create_product(new_product("Czajnik", 3, 3000, agd.id))
            .await
            .unwrap();

        let lines = guard.list_inventory().await.unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].category_name, "Elektronika");
        assert_eq!(lines[0].line_value_cents, 5000);
        assert_eq!(lines[1].category_name, "AGD");
    }

    #[tokio::test]
    async fn list_inventory_dangling_category_shows_none() {
        use serde_json::json;

        // A dangling reference can only come from outside the guard
        // (categories are never deleted through it), so seed the store
        // directly.
        let store = MemoryTableStore::new();
        store
            .insert(
                PRODUCT_TABLE,
                json!({ "name": "Sierota", "quantity": 1, "price_cents": 100, "category_id": 999 })
                    .as_object()
                    .cloned()
                    .unwrap(),
            )
            .await
            .unwrap();

        let guard = InventoryGuard::new(store);
        let lines = guard.list_inventory().await.unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].category_name, "none");
    }

    #[tokio::test]
    async fn summarize_reports_totals_and_low_stock() {
        let guard = guard();
        let category = guard
            .create_category(new_category("Elektronika"))
            .await
            .unwrap();

        guard
            .create_product(new_product("Kabel", 10, 500, category.id))
            .await
            .unwrap();
        guard
            .create_product(new_product("Monitor", 2, 10000, category.id))
            .await
            .unwrap();

        let summary = guard.summarize().await.unwrap();
        assert_eq!(summary.total_quantity, 12);
        assert_eq!(summary.total_value, Money::from_cents(25000));
        assert_eq!(summary.category_count, 1);
        assert_eq!(summary.low_stock_count, 1);
    }

    #[tokio::test]
    async fn summarize_counts_empty_categories() {
        let guard = guard();
        guard
            .create_category(new_category("Elektronika"))
            .await
            .unwrap();
        guard.create_category(new_category("AGD")).await.unwrap();

        let summary = guard.summarize().await.unwrap();
        assert_eq!(summary.category_count, 2);
        assert_eq!(summary.total_quantity, 0);
    }
}
