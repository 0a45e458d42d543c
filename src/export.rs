use std::path::Path;

use tracing::info;

use crate::clean::{columns, CleanedTable};
use crate::error::Result;

/// Render the cleaned table as delimited text for download: header row with
/// the canonical column names, no row index, missing numerics as empty
/// fields.
pub fn to_csv_string(table: &CleanedTable) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    write_records(&mut wtr, table)?;
    let bytes = wtr
        .into_inner()
        .map_err(|e| crate::error::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write the same export to a file.
pub fn write_csv<P: AsRef<Path>>(table: &CleanedTable, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = csv::Writer::from_path(path)?;
    write_records(&mut wtr, table)?;
    wtr.flush()?;
    info!(path = %path.display(), rows = table.len(), "wrote cleaned csv");
    Ok(())
}

fn write_records<W: std::io::Write>(wtr: &mut csv::Writer<W>, table: &CleanedTable) -> Result<()> {
    wtr.write_record(columns::REQUIRED_COLUMNS)?;
    for record in table.records() {
        let sales = format_cell(record.sales);
        let sales_with_tax = format_cell(record.sales_with_tax);
        wtr.write_record([record.name.as_str(), sales.as_str(), sales_with_tax.as_str()])?;
    }
    Ok(())
}

fn format_cell(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => String::new(),
    }
}

/// Suggested filename for the download button.
pub fn download_filename() -> &'static str {
    "cleaned_revenue_data.csv"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clean::CustomerRecord;
    use tempfile::tempdir;

    fn table() -> CleanedTable {
        CleanedTable::from_records(vec![
            CustomerRecord {
                name: "Alice".into(),
                sales: Some(100.0),
                sales_with_tax: Some(120.5),
            },
            CustomerRecord {
                name: "Bob".into(),
                sales: None,
                sales_with_tax: Some(60.0),
            },
        ])
    }

    #[test]
    fn export_has_header_and_no_row_index() {
        let csv = to_csv_string(&table()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Customer Name,Sales,Sales With Tax"));
        assert_eq!(lines.next(), Some("Alice,100,120.5"));
        assert_eq!(lines.next(), Some("Bob,,60"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn names_with_commas_are_quoted() {
        let table = CleanedTable::from_records(vec![CustomerRecord {
            name: "Acme, Inc.".into(),
            sales: Some(1.0),
            sales_with_tax: Some(1.0),
        }]);
        let csv = to_csv_string(&table).unwrap();
        assert!(csv.contains("\"Acme, Inc.\",1,1"));
    }

    #[test]
    fn file_export_round_trips_through_the_reader() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cleaned.csv");
        write_csv(&table(), &path).unwrap();

        let raw = crate::ingest::delimited::load_delimited(&path).unwrap();
        assert_eq!(raw.headers, vec!["Customer Name", "Sales", "Sales With Tax"]);
        assert_eq!(raw.rows.len(), 2);
        assert_eq!(raw.rows[1], vec!["Bob", "", "60"]);
    }
}
