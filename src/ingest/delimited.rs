use std::io;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::info;

use super::RawTable;
use crate::error::Result;

/// Read a delimited text file into a [`RawTable`]. Unlike workbook exports,
/// delimited files carry the header on the first line; there is no banner
/// row to skip.
pub fn load_delimited<P: AsRef<Path>>(path: P) -> Result<RawTable> {
    let path = path.as_ref();
    let rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let table = table_from_reader(rdr)?;
    info!(
        path = %path.display(),
        rows = table.rows.len(),
        "loaded delimited file"
    );
    Ok(table)
}

/// Same as [`load_delimited`], but over an in-memory upload.
pub fn load_delimited_bytes(bytes: &[u8]) -> Result<RawTable> {
    let rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);
    table_from_reader(rdr)
}

fn table_from_reader<R: io::Read>(mut rdr: csv::Reader<R>) -> Result<RawTable> {
    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(RawTable { headers, rows })
}
