//! # In-Memory Table Store
//!
//! `TableStore` implementation holding tables in process memory.
//!
//! ## Why This Exists
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    MemoryTableStore Usage                               │
//! │                                                                         │
//! │  Guard tests ──► MemoryTableStore ──► no network, no fixtures          │
//! │                                                                         │
//! │  Behaves like the hosted backend where the guard can tell the          │
//! │  difference:                                                            │
//! │  • assigns integer ids and created_at on insert                        │
//! │  • enforces configured unique columns (UniqueViolation)                │
//! │  • NotFound on update/delete of absent ids                             │
//! │  • compare-and-set semantics for update_where                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::error::{StoreError, StoreResult};
use crate::table::{Filter, Row, TableStore};

/// In-process table store for tests and local development.
///
/// ## Usage
/// ```rust
/// use stockroom_store::MemoryTableStore;
///
/// // Emulate the backend's unique constraint on category names
/// let store = MemoryTableStore::new().with_unique("category", "name");
/// ```
#[derive(Debug)]
pub struct MemoryTableStore {
    inner: Mutex<Inner>,
    /// (table, column) pairs enforced as unique, mirroring the backend's
    /// constraints. Fixed at construction.
    unique: Vec<(String, String)>,
}

#[derive(Debug, Default)]
struct Inner {
    tables: HashMap<String, Vec<Row>>,
    next_id: i64,
}

impl MemoryTableStore {
    /// Creates an empty store with no constraints.
    pub fn new() -> Self {
        MemoryTableStore {
            inner: Mutex::new(Inner {
                tables: HashMap::new(),
                next_id: 1,
            }),
            unique: Vec::new(),
        }
    }

    /// Declares a unique column on a table.
    pub fn with_unique(mut self, table: impl Into<String>, column: impl Into<String>) -> Self {
        self.unique.push((table.into(), column.into()));
        self
    }

    fn row_id(row: &Row) -> Option<i64> {
        row.get("id").and_then(Value::as_i64)
    }

    fn matches(row: &Row, filters: &[Filter]) -> bool {
        filters
            .iter()
            .all(|f| row.get(&f.column) == Some(&f.value))
    }
}

#[async_trait]
impl TableStore for MemoryTableStore {
    async fn select(&self, table: &str, filters: &[Filter]) -> StoreResult<Vec<Row>> {
        let inner = self.inner.lock().await;
        let rows = inner
            .tables
            .get(table)
            .map(|rows| {
                rows.iter()
                    .filter(|row| Self::matches(row, filters))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(rows)
    }

    async fn insert(&self, table: &str, mut row: Row) -> StoreResult<Row> {
        let mut inner = self.inner.lock().await;

        // Constraint check happens before the id is spent, like a real
        // backend rejecting the statement outright.
        for (unique_table, column) in &self.unique {
            if unique_table != table {
                continue;
            }
            let candidate = match row.get(column) {
                Some(value) if !value.is_null() => value,
                _ => continue,
            };
            let existing = inner.tables.get(table);
            if existing
                .map(|rows| rows.iter().any(|r| r.get(column) == Some(candidate)))
                .unwrap_or(false)
            {
                return Err(StoreError::unique_violation(format!(
                    "{}.{}",
                    table, column
                )));
            }
        }

        let id = inner.next_id;
        inner.next_id += 1;

        row.insert("id".to_string(), Value::from(id));
        row.insert(
            "created_at".to_string(),
            Value::from(Utc::now().to_rfc3339()),
        );

        inner
            .tables
            .entry(table.to_string())
            .or_default()
            .push(row.clone());

        Ok(row)
    }

    async fn update(&self, table: &str, id: i64, patch: Row) -> StoreResult<()> {
        let mut inner = self.inner.lock().await;
        let rows = inner
            .tables
            .get_mut(table)
            .ok_or_else(|| StoreError::not_found(table, id))?;

        let row = rows
            .iter_mut()
            .find(|row| Self::row_id(row) == Some(id))
            .ok_or_else(|| StoreError::not_found(table, id))?;

        for (key, value) in patch {
            row.insert(key, value);
        }

        Ok(())
    }

    async fn update_where(
        &self,
        table: &str,
        id: i64,
        guard: Filter,
        patch: Row,
    ) -> StoreResult<bool> {
        let mut inner = self.inner.lock().await;
        let rows = match inner.tables.get_mut(table) {
            Some(rows) => rows,
            None => return Ok(false),
        };

        let row = rows.iter_mut().find(|row| {
            Self::row_id(row) == Some(id) && row.get(&guard.column) == Some(&guard.value)
        });

        match row {
            Some(row) => {
                for (key, value) in patch {
                    row.insert(key, value);
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, table: &str, id: i64) -> StoreResult<()> {
        let mut inner = self.inner.lock().await;
        let rows = inner
            .tables
            .get_mut(table)
            .ok_or_else(|| StoreError::not_found(table, id))?;

        let before = rows.len();
        rows.retain(|row| Self::row_id(row) != Some(id));

        if rows.len() == before {
            return Err(StoreError::not_found(table, id));
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(pairs: Value) -> Row {
        pairs.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_created_at() {
        let store = MemoryTableStore::new();

        let created = store
            .insert("category", row(json!({ "name": "Elektronika" })))
            .await
            .unwrap();

        assert_eq!(created.get("id"), Some(&Value::from(1)));
        assert!(created.get("created_at").is_some());

        let next = store
            .insert("category", row(json!({ "name": "AGD" })))
            .await
            .unwrap();
        assert_eq!(next.get("id"), Some(&Value::from(2)));
    }

    #[tokio::test]
    async fn test_unique_constraint() {
        let store = MemoryTableStore::new().with_unique("category", "name");

        store
            .insert("category", row(json!({ "name": "Elektronika" })))
            .await
            .unwrap();

        let err = store
            .insert("category", row(json!({ "name": "Elektronika" })))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::UniqueViolation { .. }));

        // Null values don't collide
        store
            .insert("category", row(json!({ "name": null })))
            .await
            .unwrap();
        store
            .insert("category", row(json!({ "name": null })))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_select_with_filter() {
        let store = MemoryTableStore::new();
        store
            .insert("product", row(json!({ "name": "Kabel", "category_id": 1 })))
            .await
            .unwrap();
        store
            .insert("product", row(json!({ "name": "Czajnik", "category_id": 2 })))
            .await
            .unwrap();

        let all = store.select("product", &[]).await.unwrap();
        assert_eq!(all.len(), 2);

        let filtered = store
            .select("product", &[Filter::eq("category_id", 2)])
            .await
            .unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].get("name"), Some(&Value::from("Czajnik")));

        let empty = store.select("missing", &[]).await.unwrap();
        assert!(empty.is_empty());
    }

    #[tokio::test]
    async fn test_update_absent_id_is_not_found() {
        let store = MemoryTableStore::new();
        let err = store
            .update("product", 99, row(json!({ "quantity": 1 })))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_where_compare_and_set() {
        let store = MemoryTableStore::new();
        let created = store
            .insert("product", row(json!({ "name": "Kabel", "quantity": 10 })))
            .await
            .unwrap();
        let id = created.get("id").and_then(Value::as_i64).unwrap();

        // Guard matches the observed quantity: patch applies
        let matched = store
            .update_where(
                "product",
                id,
                Filter::eq("quantity", 10),
                row(json!({ "quantity": 7 })),
            )
            .await
            .unwrap();
        assert!(matched);

        // Stale guard: no row matched, nothing changed
        let stale = store
            .update_where(
                "product",
                id,
                Filter::eq("quantity", 10),
                row(json!({ "quantity": 3 })),
            )
            .await
            .unwrap();
        assert!(!stale);

        let rows = store.select("product", &[]).await.unwrap();
        assert_eq!(rows[0].get("quantity"), Some(&Value::from(7)));
    }

    #[tokio::test]
    async fn test_delete_twice_is_not_found() {
        let store = MemoryTableStore::new();
        let created = store
            .insert("product", row(json!({ "name": "Kabel" })))
            .await
            .unwrap();
        let id = created.get("id").and_then(Value::as_i64).unwrap();

        store.delete("product", id).await.unwrap();
        let err = store.delete("product", id).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }
}
