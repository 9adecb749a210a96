//! Per-category aggregation of product records

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::ProductRecord;

/// Aggregated items-sold and revenue totals for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub total_items_sold: u64,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
}

/// Group records by exact category string and sum items sold and revenue
/// (`price * rating.count` per record).
///
/// Category strings are not normalized; records whose categories differ in
/// case or whitespace land in distinct groups. Output is sorted by category
/// so repeated runs over the same catalog produce identical files.
pub fn aggregate_sales(records: &[ProductRecord]) -> Vec<CategorySummary> {
    let mut groups: BTreeMap<&str, (u64, Decimal)> = BTreeMap::new();

    for record in records {
        let revenue = record.price * Decimal::from(record.count);
        let entry = groups
            .entry(record.category.as_str())
            .or_insert((0, Decimal::ZERO));
        entry.0 += record.count;
        entry.1 += revenue;
    }

    groups
        .into_iter()
        .map(|(category, (total_items_sold, total_revenue))| CategorySummary {
            category: category.to_string(),
            total_items_sold,
            total_revenue,
        })
        .collect()
}
