//! # Store Error Types
//!
//! Error types for table-store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  HTTP Error (reqwest::Error / status + body)                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds context and categorization            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  GuardError (in stockroom-guard) ← Public taxonomy for callers         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Presentation layer displays user-friendly message                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Table-store operation errors.
///
/// These errors wrap transport failures and the backend's constraint
/// responses, providing categories the guard can act on.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Row not found in the addressed table.
    ///
    /// ## When This Occurs
    /// - `update`/`delete` matched zero rows
    /// - The id was deleted by another session
    #[error("{table} row not found: {id}")]
    NotFound { table: String, id: i64 },

    /// Unique constraint violation.
    ///
    /// ## When This Occurs
    /// - Inserting a duplicate category code or name
    /// - Any UNIQUE index violation at the backend
    #[error("Unique constraint violation: {detail}")]
    UniqueViolation { detail: String },

    /// Foreign key constraint violation.
    ///
    /// ## When This Occurs
    /// - Inserting a product whose category_id no longer exists
    #[error("Foreign key violation: {detail}")]
    ForeignKeyViolation { detail: String },

    /// The remote call exceeded its deadline.
    ///
    /// Kept distinct from NotFound/UniqueViolation so callers can retry
    /// instead of reporting a data problem.
    #[error("Table store call timed out")]
    Timeout,

    /// The store endpoint could not be reached.
    ///
    /// ## When This Occurs
    /// - DNS/connect failures
    /// - TLS handshake failures
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// A row came back in a shape we could not decode.
    #[error("Invalid row: {0}")]
    InvalidRow(String),

    /// Any other response from the store.
    #[error("Unexpected store response (status {status}): {detail}")]
    Unexpected { status: u16, detail: String },
}

impl StoreError {
    /// Creates a NotFound error for a given table and row id.
    pub fn not_found(table: impl Into<String>, id: i64) -> Self {
        StoreError::NotFound {
            table: table.into(),
            id,
        }
    }

    /// Creates a UniqueViolation error.
    pub fn unique_violation(detail: impl Into<String>) -> Self {
        StoreError::UniqueViolation {
            detail: detail.into(),
        }
    }
}

/// Convert transport errors to StoreError.
///
/// ## Error Mapping
/// ```text
/// timed out              → StoreError::Timeout
/// connect failure        → StoreError::ConnectionFailed
/// body decode failure    → StoreError::InvalidRow
/// carried HTTP status    → StoreError::Unexpected
/// other                  → StoreError::ConnectionFailed
/// ```
impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            StoreError::Timeout
        } else if err.is_connect() {
            StoreError::ConnectionFailed(err.to_string())
        } else if err.is_decode() {
            StoreError::InvalidRow(err.to_string())
        } else if let Some(status) = err.status() {
            StoreError::Unexpected {
                status: status.as_u16(),
                detail: err.to_string(),
            }
        } else {
            StoreError::ConnectionFailed(err.to_string())
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
