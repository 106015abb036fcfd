//! # Guard Configuration
//!
//! Per-deployment behavior toggles for the inventory guard.
//!
//! The source deployments disagreed on two points (whether category codes
//! are mandatory and whether duplicate category names are rejected), so
//! both are explicit settings here instead of hard-coded guesses.

use stockroom_core::DEFAULT_LOW_STOCK_THRESHOLD;

/// Inventory guard configuration.
///
/// ## Example
/// ```rust
/// use stockroom_guard::GuardConfig;
///
/// let config = GuardConfig::default()
///     .require_category_code(true)
///     .low_stock_threshold(10);
/// assert!(config.require_category_code);
/// ```
#[derive(Debug, Clone)]
pub struct GuardConfig {
    /// Whether `create_category` requires a non-empty code.
    /// Default: false (codes stay optional)
    pub require_category_code: bool,

    /// Whether `create_category` pre-checks for an existing category with
    /// the same name and rejects with a conflict. The backend's own
    /// unique constraint (if configured there) remains authoritative
    /// either way; this check cannot close the window between the lookup
    /// and the insert.
    /// Default: false
    pub enforce_unique_category_names: bool,

    /// Quantities strictly below this count as low stock in summaries.
    /// Default: 5
    pub low_stock_threshold: i64,

    /// How many times a stock adjustment re-reads and retries after its
    /// compare-and-set write loses to a concurrent writer.
    /// Default: 3
    pub adjust_retries: u32,
}

impl Default for GuardConfig {
    fn default() -> Self {
        GuardConfig {
            require_category_code: false,
            enforce_unique_category_names: false,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            adjust_retries: 3,
        }
    }
}

impl GuardConfig {
    /// Sets whether category codes are mandatory.
    pub fn require_category_code(mut self, required: bool) -> Self {
        self.require_category_code = required;
        self
    }

    /// Sets whether duplicate category names are rejected client-side.
    pub fn enforce_unique_category_names(mut self, enforce: bool) -> Self {
        self.enforce_unique_category_names = enforce;
        self
    }

    /// Sets the low-stock threshold.
    pub fn low_stock_threshold(mut self, threshold: i64) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    /// Sets the compare-and-set retry budget for stock adjustments.
    pub fn adjust_retries(mut self, retries: u32) -> Self {
        self.adjust_retries = retries;
        self
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
