//! # Guard Error Type
//!
//! The public error taxonomy callers of the guard see.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockroom                              │
//! │                                                                         │
//! │  Presentation                Guard + Store                              │
//! │  ────────────                ─────────────                              │
//! │                                                                         │
//! │  call create_product(...)                                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Guard operation                                                 │  │
//! │  │  Result<T, GuardError>                                           │  │
//! │  │         │                                                        │  │
//! │  │  Field invalid? ──── ValidationError ──────────┐                 │  │
//! │  │         │                                      ▼                 │  │
//! │  │  Store rejected? ─── StoreError ─────────── GuardError ────────► │  │
//! │  │         │                                      ▲                 │  │
//! │  │  Rule violated? ──── CoreError ────────────────┘                 │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄──────────────────────────────────────────────────────────────────── │
//! │                                                                         │
//! │  match err.kind: show message, leave state unchanged, allow retry       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here is fatal: every failure is reportable and the caller may
//! retry the operation.

use thiserror::Error;

use stockroom_core::{CoreError, ValidationError};
use stockroom_store::StoreError;

/// Errors returned by guard operations.
///
/// Raw store errors never escape; each is translated into one of these
/// categories so a presentation layer can map kinds to messages without
/// knowing the transport.
#[derive(Debug, Error)]
pub enum GuardError {
    /// Bad or missing input; nothing was sent to the store.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A uniqueness or other constraint rejected the operation, or
    /// concurrent writers kept invalidating a stock adjustment.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The referenced row no longer exists.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: i64 },

    /// A stock withdrawal would drive quantity below zero.
    /// Carries what was available and the requested change so callers can
    /// report "cannot remove N (available: M)".
    #[error("Insufficient stock for {product}: available {available}, requested change {requested}")]
    InsufficientStock {
        product: String,
        available: i64,
        requested: i64,
    },

    /// Product creation was refused because no category exists yet.
    #[error("No categories exist yet; create a category before adding products")]
    NoCategories,

    /// The store did not answer within the configured deadline.
    #[error("Table store call timed out")]
    Timeout,

    /// The store endpoint could not be reached.
    #[error("Table store unreachable: {0}")]
    Connection(String),

    /// Any other store-side failure.
    #[error("Table store error: {0}")]
    Store(String),
}

impl GuardError {
    /// Creates a NotFound error.
    pub fn not_found(entity: impl Into<String>, id: i64) -> Self {
        GuardError::NotFound {
            entity: entity.into(),
            id,
        }
    }
}

/// Converts store errors to guard errors.
///
/// ## Translation Table
/// ```text
/// StoreError::NotFound             → GuardError::NotFound
/// StoreError::UniqueViolation      → GuardError::Conflict
/// StoreError::ForeignKeyViolation  → GuardError::Conflict
/// StoreError::Timeout              → GuardError::Timeout
/// StoreError::ConnectionFailed     → GuardError::Connection
/// StoreError::InvalidRow           → GuardError::Store
/// StoreError::Unexpected           → GuardError::Store
/// ```
impl From<StoreError> for GuardError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { table, id } => GuardError::NotFound { entity: table, id },
            StoreError::UniqueViolation { detail } => GuardError::Conflict(detail),
            StoreError::ForeignKeyViolation { detail } => GuardError::Conflict(detail),
            StoreError::Timeout => GuardError::Timeout,
            StoreError::ConnectionFailed(detail) => GuardError::Connection(detail),
            StoreError::InvalidRow(detail) => GuardError::Store(detail),
            StoreError::Unexpected { status, detail } => {
                GuardError::Store(format!("status {}: {}", status, detail))
            }
        }
    }
}

/// Converts core business-rule errors to guard errors.
impl From<CoreError> for GuardError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InsufficientStock {
                product,
                available,
                requested,
            } => GuardError::InsufficientStock {
                product,
                available,
                requested,
            },
            CoreError::Validation(e) => GuardError::Validation(e),
        }
    }
}

/// Result type for guard operations.
pub type GuardResult<T> = Result<T, GuardError>;

// =============================================================================
// Unit Tests
// =============================================================================
