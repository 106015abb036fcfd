//! # stockroom-store: Table-Store Client for Stockroom
//!
//! This crate provides access to the external table store. All persistence
//! in Stockroom is delegated to a hosted backend addressed by table name;
//! this crate owns that boundary.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Data Flow                              │
//! │                                                                         │
//! │  Guard operation (create_product, adjust_stock, ...)                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  stockroom-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  TableStore   │    │ RestTableStore│    │ MemoryTable  │  │   │
//! │  │   │  (table.rs)   │    │   (rest.rs)   │    │ Store        │  │   │
//! │  │   │               │    │               │    │ (memory.rs)  │  │   │
//! │  │   │ the contract  │◄───│ hosted REST   │    │ tests/dev    │  │   │
//! │  │   │               │◄───│ dialect       │────│              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Hosted relational backend                       │   │
//! │  │        tables: category, product (reached over HTTPS)           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`table`] - The `TableStore` trait, `Row`, and `Filter`
//! - [`rest`] - REST implementation against the hosted backend
//! - [`memory`] - In-process implementation for tests
//! - [`config`] - Connection configuration with fail-fast env loading
//! - [`error`] - Store error taxonomy
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stockroom_store::{RestTableStore, StoreConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Fail fast if STOCKROOM_STORE_URL / STOCKROOM_STORE_KEY are absent
//! let config = StoreConfig::from_env()?;
//! let store = RestTableStore::new(config)?;
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod memory;
pub mod rest;
pub mod table;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{ConfigError, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use memory::MemoryTableStore;
pub use rest::RestTableStore;
pub use table::{Filter, Row, TableStore};
