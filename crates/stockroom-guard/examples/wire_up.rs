//! # Wire-Up Example
//!
//! Shows what the process entry point owns: logging setup, fail-fast
//! configuration loading, store construction, and guard wiring. The
//! library crates never do any of this themselves.
//!
//! ## Run
//! ```text
//! STOCKROOM_STORE_URL=https://store.example.com/rest/v1 \
//! STOCKROOM_STORE_KEY=service-key \
//! cargo run -p stockroom-guard --example wire_up
//! ```

use tracing::info;
use tracing_subscriber::EnvFilter;

use stockroom_core::report;
use stockroom_guard::{GuardConfig, InventoryGuard};
use stockroom_store::{RestTableStore, StoreConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing; RUST_LOG controls verbosity
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration; a missing variable fails here with a clear
    // message, not deep inside the first remote call
    let config = StoreConfig::from_env()?;
    info!(endpoint = %config.endpoint, "configuration loaded");

    // The entry point owns the store client and injects it into the guard
    let store = RestTableStore::new(config)?;
    let guard = InventoryGuard::with_config(store, GuardConfig::default());

    // Read-only tour: listing, ranking, and headline metrics
    let categories = guard.list_categories().await?;
    info!(count = categories.len(), "categories");

    let lines = guard.list_inventory().await?;
    for line in &lines {
        println!(
            "{:<30} {:>6} szt.  {:>10}  [{}]",
            line.name,
            line.quantity,
            line.line_value().to_string(),
            line.category_name
        );
    }

    for line in report::top_by_value(&lines, 10) {
        println!("top: {:<30} {:>10}", line.name, line.line_value().to_string());
    }

    for (category, quantity) in report::quantity_by_category(&lines) {
        println!("{:<20} {:>6} szt.", category, quantity);
    }

    let summary = guard.summarize().await?;
    println!(
        "products: {}  total quantity: {}  total value: {}  categories: {}  low stock: {}",
        lines.len(),
        summary.total_quantity,
        summary.total_value,
        summary.category_count,
        summary.low_stock_count
    );

    Ok(())
}
