use std::collections::HashSet;

use serde::Serialize;

use crate::clean::CleanedTable;

/// The dashboard's headline metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    /// Sum of present `sales_with_tax` values.
    pub total_with_tax: f64,
    /// Count of distinct customer names.
    pub customer_count: usize,
    /// Mean over present `sales_with_tax` values only; `None` when no row
    /// has a value.
    pub mean_with_tax: Option<f64>,
}

pub fn summarize(table: &CleanedTable) -> SummaryStats {
    let mut total = 0.0;
    let mut valued = 0usize;
    for record in table.records() {
        if let Some(value) = record.sales_with_tax {
            total += value;
            valued += 1;
        }
    }

    let customer_count = table
        .records()
        .iter()
        .map(|r| r.name.as_str())
        .collect::<HashSet<_>>()
        .len();

    SummaryStats {
        total_with_tax: total,
        customer_count,
        mean_with_tax: (valued > 0).then(|| total / valued as f64),
    }
}
