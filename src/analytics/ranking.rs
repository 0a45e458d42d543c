use serde::Serialize;

use crate::clean::{CleanedTable, CustomerRecord};

/// Rows per page in the paginated revenue listing.
pub const PAGE_SIZE: usize = 20;

/// Size of the "top customers" view.
pub const TOP_N: usize = 20;

/// Stable descending order by `sales_with_tax`. Ties keep original row
/// order; rows without a revenue value sort after every valued row.
pub fn rank_by_revenue(table: &CleanedTable) -> Vec<CustomerRecord> {
    let mut ranked: Vec<CustomerRecord> = table.records().to_vec();
    ranked.sort_by(|a, b| sort_key(b).total_cmp(&sort_key(a)));
    ranked
}

fn sort_key(record: &CustomerRecord) -> f64 {
    record.sales_with_tax.unwrap_or(f64::NEG_INFINITY)
}

/// First `n` rows of the descending sort.
pub fn top_n(table: &CleanedTable, n: usize) -> Vec<CustomerRecord> {
    let mut ranked = rank_by_revenue(table);
    ranked.truncate(n);
    ranked
}

/// One page of the ranked listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    /// 1-based page number as requested.
    pub number: usize,
    pub page_count: usize,
    /// 1-based position of the first row on this page (0 when empty),
    /// for "Customers 21 to 40 of 87" style captions.
    pub start: usize,
    /// 1-based position of the last row on this page (0 when empty).
    pub end: usize,
    pub total: usize,
    pub records: Vec<CustomerRecord>,
}

pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    (total + page_size - 1) / page_size
}

/// Slice the ranked listing into its `page_number`-th page (1-based).
///
/// Out-of-range pages are a caller contract violation; standard slice
/// semantics apply and the page comes back empty.
pub fn paginate(ranked: &[CustomerRecord], page_size: usize, page_number: usize) -> Page {
    let total = ranked.len();
    let start_idx = page_number.saturating_sub(1).saturating_mul(page_size);
    let records: Vec<CustomerRecord> = if start_idx >= total {
        Vec::new()
    } else {
        let end_idx = (start_idx + page_size).min(total);
        ranked[start_idx..end_idx].to_vec()
    };

    let (start, end) = if records.is_empty() {
        (0, 0)
    } else {
        (start_idx + 1, start_idx + records.len())
    };

    Page {
        number: page_number,
        page_count: page_count(total, page_size),
        start,
        end,
        total,
        records,
    }
}
