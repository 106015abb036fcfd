//! # Report Module
//!
//! Aggregation math over already-fetched inventory lines.
//!
//! ## Where This Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Reporting Data Flow                                │
//! │                                                                         │
//! │  Guard: select products + categories ──► join ──► Vec<InventoryLine>   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  THIS MODULE: pure math over the lines                                 │
//! │  ├── summarize        → totals + low-stock count                       │
//! │  ├── top_by_value     → highest-value lines first                      │
//! │  └── quantity_by_category → units grouped per category name            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Presentation layer renders metrics and charts from the results        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No I/O happens here; callers fetch, this module counts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::money::Money;
use crate::types::InventoryLine;

// =============================================================================
// Summary
// =============================================================================

/// Headline inventory metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySummary {
    /// Sum of units on hand across all products.
    pub total_quantity: i64,

    /// Sum of line values (quantity × unit price) across all products.
    pub total_value: Money,

    /// Number of categories that exist (not just categories with products).
    pub category_count: usize,

    /// Number of products whose quantity is below the low-stock threshold.
    pub low_stock_count: usize,
}

/// Computes headline metrics over a set of inventory lines.
///
/// ## Arguments
/// * `lines` - joined product rows
/// * `category_count` - how many categories exist (fetched separately,
///   since empty categories still count)
/// * `low_stock_threshold` - quantities strictly below this are low stock
///
/// ## Example
/// ```rust
/// use stockroom_core::report::summarize;
/// # use stockroom_core::types::InventoryLine;
/// # let lines: Vec<InventoryLine> = Vec::new();
///
/// let summary = summarize(&lines, 0, 5);
/// assert_eq!(summary.total_quantity, 0);
/// ```
pub fn summarize(
    lines: &[InventoryLine],
    category_count: usize,
    low_stock_threshold: i64,
) -> InventorySummary {
    let total_quantity = lines.iter().map(|l| l.quantity).sum();
    let total_value = lines
        .iter()
        .fold(Money::zero(), |acc, l| acc + l.line_value());
    let low_stock_count = lines
        .iter()
        .filter(|l| l.quantity < low_stock_threshold)
        .count();

    InventorySummary {
        total_quantity,
        total_value,
        category_count,
        low_stock_count,
    }
}

// =============================================================================
// Rankings and Groupings
// =============================================================================

/// Returns the `n` highest-value lines, descending by line value.
///
/// Ties keep their relative input order (stable sort), so repeated calls
/// over the same listing produce the same ranking.
pub fn top_by_value(lines: &[InventoryLine], n: usize) -> Vec<InventoryLine> {
    let mut ranked: Vec<InventoryLine> = lines.to_vec();
    ranked.sort_by_key(|l| std::cmp::Reverse(l.line_value_cents));
    ranked.truncate(n);
    ranked
}

/// Groups units on hand under category display names.
///
/// Products with a dangling category reference group under the `"none"`
/// placeholder like everywhere else. BTreeMap keeps the output ordered by
/// name, which is what listings want.
pub fn quantity_by_category(lines: &[InventoryLine]) -> BTreeMap<String, i64> {
    let mut groups: BTreeMap<String, i64> = BTreeMap::new();
    for line in lines {
        *groups.entry(line.category_name.clone()).or_insert(0) += line.quantity;
    }
    groups
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, category: &str, quantity: i64, price_cents: i64) -> InventoryLine {
        InventoryLine {
            product_id: 0,
            name: name.to_string(),
            quantity,
            price_cents,
            category_name: category.to_string(),
            line_value_cents: quantity * price_cents,
        }
    }

    #[test]
    fn test_summarize_totals() {
        // (qty 10, price 5.00) and (qty 2, price 100.00):
        // total quantity 12, total value 250.00, one low-stock line at threshold 5
        let lines = vec![
            line("Kabel", "Elektronika", 10, 500),
            line("Monitor", "Elektronika", 2, 10000),
        ];

        let summary = summarize(&lines, 1, 5);
        assert_eq!(summary.total_quantity, 12);
        assert_eq!(summary.total_value, Money::from_cents(25000));
        assert_eq!(summary.category_count, 1);
        assert_eq!(summary.low_stock_count, 1);
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[], 3, 5);
        assert_eq!(summary.total_quantity, 0);
        assert_eq!(summary.total_value, Money::zero());
        assert_eq!(summary.category_count, 3);
        assert_eq!(summary.low_stock_count, 0);
    }

    #[test]
    fn test_low_stock_threshold_is_exclusive() {
        // Exactly at the threshold is NOT low stock
        let lines = vec![
            line("A", "X", 5, 100),
            line("B", "X", 4, 100),
        ];
        let summary = summarize(&lines, 1, 5);
        assert_eq!(summary.low_stock_count, 1);
    }

    #[test]
    fn test_top_by_value() {
        let lines = vec![
            line("Kabel", "Elektronika", 10, 500),    // 50.00
            line("Monitor", "Elektronika", 2, 10000), // 200.00
            line("Mysz", "Elektronika", 1, 900),      // 9.00
        ];

        let top = top_by_value(&lines, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "Monitor");
        assert_eq!(top[1].name, "Kabel");
    }

    #[test]
    fn test_top_by_value_shorter_than_n() {
        let lines = vec![line("Kabel", "Elektronika", 10, 500)];
        let top = top_by_value(&lines, 10);
        assert_eq!(top.len(), 1);
    }

    #[test]
    fn test_quantity_by_category() {
        let lines = vec![
            line("Kabel", "Elektronika", 10, 500),
            line("Monitor", "Elektronika", 2, 10000),
            line("Czajnik", "AGD", 7, 3000),
            line("Sierota", "none", 1, 100),
        ];

        let groups = quantity_by_category(&lines);
        assert_eq!(groups.get("Elektronika"), Some(&12));
        assert_eq!(groups.get("AGD"), Some(&7));
        assert_eq!(groups.get("none"), Some(&1));
        assert_eq!(groups.len(), 3);
    }
}
