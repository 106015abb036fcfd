//! # REST Table Store
//!
//! `TableStore` implementation speaking the hosted backend's REST dialect.
//!
//! ## Request Shapes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    REST Dialect (by table name)                         │
//! │                                                                         │
//! │  select  GET    {base}/{table}?select=*&col=eq.value                   │
//! │  insert  POST   {base}/{table}            Prefer: return=representation│
//! │  update  PATCH  {base}/{table}?id=eq.{id} Prefer: return=representation│
//! │  CAS     PATCH  {base}/{table}?id=eq.{id}&guard_col=eq.{observed}      │
//! │  delete  DELETE {base}/{table}?id=eq.{id} Prefer: return=representation│
//! │                                                                         │
//! │  Every mutation asks for the affected rows back, so "zero rows          │
//! │  returned" maps cleanly onto NotFound / stale-guard without a second   │
//! │  round trip.                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Authentication
//! The access key is sent both as the `apikey` header and as a bearer
//! token, which is what the hosted backend expects for service access.

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use tracing::debug;

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::table::{Filter, Row, TableStore};

/// `TableStore` backed by the hosted REST endpoint.
///
/// ## Usage
/// ```rust,no_run
/// use stockroom_store::{RestTableStore, StoreConfig};
///
/// let config = StoreConfig::new("https://store.example.com/rest/v1", "service-key");
/// let store = RestTableStore::new(config).unwrap();
/// ```
///
/// The inner HTTP client pools connections; construct one store per
/// process and share it.
#[derive(Debug, Clone)]
pub struct RestTableStore {
    client: Client,
    config: StoreConfig,
}

impl RestTableStore {
    /// Creates a REST store from the given configuration.
    ///
    /// The configured timeout becomes the deadline of every call made
    /// through this store.
    pub fn new(config: StoreConfig) -> StoreResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        Ok(RestTableStore { client, config })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.config.endpoint.trim_end_matches('/'), table)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("apikey", &self.config.access_key)
            .bearer_auth(&self.config.access_key)
    }

    /// Renders a filter value as the dialect's `eq.` operand.
    ///
    /// Strings are used verbatim; `Value::to_string` would wrap them in
    /// JSON quotes, which the query syntax does not want.
    fn eq_operand(value: &Value) -> String {
        match value {
            Value::String(s) => format!("eq.{}", s),
            other => format!("eq.{}", other),
        }
    }

    /// Reads the affected rows out of a mutation response.
    async fn affected_rows(response: Response) -> StoreResult<Vec<Row>> {
        let rows = response.json::<Vec<Row>>().await?;
        Ok(rows)
    }

    /// Maps a non-success response onto the store error taxonomy.
    async fn map_error_response(response: Response) -> StoreError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status == StatusCode::REQUEST_TIMEOUT || status == StatusCode::GATEWAY_TIMEOUT {
            return StoreError::Timeout;
        }

        if status == StatusCode::CONFLICT {
            // The backend distinguishes constraint kinds by error code in
            // the body: 23505 unique, 23503 foreign key.
            let code = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v.get("code").and_then(|c| c.as_str()).map(String::from))
                .unwrap_or_default();

            if code == "23503" {
                return StoreError::ForeignKeyViolation { detail: body };
            }
            return StoreError::UniqueViolation { detail: body };
        }

        StoreError::Unexpected {
            status: status.as_u16(),
            detail: body,
        }
    }
}

#[async_trait::async_trait]
impl TableStore for RestTableStore {
    async fn select(&self, table: &str, filters: &[Filter]) -> StoreResult<Vec<Row>> {
        debug!(table = %table, filters = filters.len(), "store select");

        let mut query: Vec<(String, String)> = vec![("select".to_string(), "*".to_string())];
        for filter in filters {
            query.push((filter.column.clone(), Self::eq_operand(&filter.value)));
        }

        let response = self
            .authorize(self.client.get(self.table_url(table)))
            .query(&query)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::map_error_response(response).await);
        }

        let rows = response.json::<Vec<Row>>().await?;
        debug!(table = %table, count = rows.len(), "store select returned rows");
        Ok(rows)
    }

    async fn insert(&self, table: &str, row: Row) -> StoreResult<Row> {
        debug!(table = %table, "store insert");

        let response = self
            .authorize(self.client.post(self.table_url(table)))
            .header("Prefer", "return=representation")
            .json(&row)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::map_error_response(response).await);
        }

        // The dialect answers an insert with the array of created rows.
        let mut rows = Self::affected_rows(response).await?;
        rows.pop()
            .ok_or_else(|| StoreError::InvalidRow("insert returned no row".to_string()))
    }

    async fn update(&self, table: &str, id: i64, patch: Row) -> StoreResult<()> {
        debug!(table = %table, id = %id, "store update");

        let response = self
            .authorize(self.client.patch(self.table_url(table)))
            .query(&[("id", Self::eq_operand(&Value::from(id)))])
            .header("Prefer", "return=representation")
            .json(&patch)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::map_error_response(response).await);
        }

        let rows = Self::affected_rows(response).await?;
        if rows.is_empty() {
            return Err(StoreError::not_found(table, id));
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
        debug!(table = %table, id = %id, guard = %guard.column, "store update_where");

        let response = self
            .authorize(self.client.patch(self.table_url(table)))
            .query(&[
                ("id", Self::eq_operand(&Value::from(id))),
                (guard.column.as_str(), Self::eq_operand(&guard.value)),
            ])
            .header("Prefer", "return=representation")
            .json(&patch)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::map_error_response(response).await);
        }

        let rows = Self::affected_rows(response).await?;
        Ok(!rows.is_empty())
    }

    async fn delete(&self, table: &str, id: i64) -> StoreResult<()> {
        debug!(table = %table, id = %id, "store delete");

        let response = self
            .authorize(self.client.delete(self.table_url(table)))
            .query(&[("id", Self::eq_operand(&Value::from(id)))])
            .header("Prefer", "return=representation")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::map_error_response(response).await);
        }

        let rows = Self::affected_rows(response).await?;
        if rows.is_empty() {
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

    #[test]
    fn test_eq_operand_string_is_unquoted() {
        assert_eq!(
            RestTableStore::eq_operand(&Value::from("Elektronika")),
            "eq.Elektronika"
        );
    }

    #[test]
    fn test_eq_operand_number() {
        assert_eq!(RestTableStore::eq_operand(&Value::from(42)), "eq.42");
    }

    #[test]
    fn test_table_url_trims_trailing_slash() {
        let store = RestTableStore::new(StoreConfig::new(
            "https://store.example.com/rest/v1/",
            "key",
        ))
        .unwrap();
        assert_eq!(
            store.table_url("product"),
            "https://store.example.com/rest/v1/product"
        );
    }
}
