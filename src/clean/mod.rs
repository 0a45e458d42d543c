pub mod columns;
pub mod numeric;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::ingest::RawTable;

/// One cleaned customer row. Numeric fields are `None` where the source cell
/// failed currency parsing (the implicit parse-warning channel).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub name: String,
    pub sales: Option<f64>,
    pub sales_with_tax: Option<f64>,
}

/// Immutable cleaned snapshot of one upload. Produced once per file and
/// cached by file identity; every analytic view derives from it fresh.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CleanedTable {
    records: Vec<CustomerRecord>,
}

impl CleanedTable {
    pub fn from_records(records: Vec<CustomerRecord>) -> Self {
        CleanedTable { records }
    }

    pub fn records(&self) -> &[CustomerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Normalize, validate and coerce a raw upload into a [`CleanedTable`].
///
/// Fails with [`crate::error::FormatError`] if the columns do not normalize
/// to the required set; in that case nothing downstream runs. Row-level
/// problems never fail the load: blank names and "total" footer rows are
/// dropped, unparseable numerics become missing values.
pub fn clean(raw: &RawTable) -> Result<CleanedTable> {
    let headers = columns::normalize_headers(&raw.headers);
    let index = columns::validate_columns(&headers)?;

    let mut records = Vec::with_capacity(raw.rows.len());
    let mut dropped_blank = 0usize;
    let mut dropped_footer = 0usize;

    for (row_no, row) in raw.rows.iter().enumerate() {
        let name = row.get(index.name).map(|s| s.trim()).unwrap_or("");
        if name.is_empty() {
            dropped_blank += 1;
            continue;
        }
        if name.eq_ignore_ascii_case("total") {
            dropped_footer += 1;
            continue;
        }

        let sales = numeric_cell(row, index.sales, columns::SALES, row_no);
        let sales_with_tax =
            numeric_cell(row, index.sales_with_tax, columns::SALES_WITH_TAX, row_no);

        records.push(CustomerRecord {
            name: name.to_string(),
            sales,
            sales_with_tax,
        });
    }

    info!(
        kept = records.len(),
        dropped_blank, dropped_footer, "cleaned table"
    );
    Ok(CleanedTable { records })
}

fn numeric_cell(row: &[String], idx: usize, column: &str, row_no: usize) -> Option<f64> {
    let raw = row.get(idx).map(String::as_str).unwrap_or("");
    let parsed = numeric::parse_currency(raw);
    if parsed.is_none() && !raw.trim().is_empty() {
        debug!(row = row_no, column, value = raw, "cell failed numeric parse");
    }
    parsed
}
