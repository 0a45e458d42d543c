use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Reader, Sheets};
use tracing::info;

use super::RawTable;
use crate::error::{Error, Result};

/// Rows above the header in an uploaded workbook (a banner/title line the
/// export tool writes before the real column row).
pub const HEADER_ROW_OFFSET: usize = 1;

/// Read the first sheet of an Excel/ODS workbook into a [`RawTable`].
pub fn load_workbook<P: AsRef<Path>>(path: P) -> Result<RawTable> {
    let path = path.as_ref();
    let workbook = open_workbook_auto(path)?;
    let table = first_sheet_table(workbook)?;
    info!(
        path = %path.display(),
        rows = table.rows.len(),
        "loaded workbook"
    );
    Ok(table)
}

/// Same as [`load_workbook`], but over an in-memory upload.
pub fn load_workbook_bytes(bytes: &[u8]) -> Result<RawTable> {
    let workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    first_sheet_table(workbook)
}

fn first_sheet_table<RS: Read + Seek>(mut sheets: Sheets<RS>) -> Result<RawTable> {
    let range = sheets.worksheet_range_at(0).ok_or(Error::EmptyInput)??;
    let rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();
    assemble(rows, HEADER_ROW_OFFSET)
}

/// Split physical rows into header + data after discarding `offset` banner
/// rows. The row right after the offset is the header.
fn assemble(mut rows: Vec<Vec<String>>, offset: usize) -> Result<RawTable> {
    if rows.len() <= offset {
        return Err(Error::EmptyInput);
    }
    let data = rows.split_off(offset + 1);
    let headers = rows.pop().ok_or(Error::EmptyInput)?;
    Ok(RawTable {
        headers,
        rows: data,
    })
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}
