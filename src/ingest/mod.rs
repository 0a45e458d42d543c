pub mod delimited;
pub mod workbook;

use std::path::Path;

use crate::error::Result;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawTable {
    /// Column names as the file claims them, before trimming or renaming.
    pub headers: Vec<String>,
    /// One entry per data row, one `String` per field.
    pub rows: Vec<Vec<String>>,
}

/// Pick a reader from the file extension: workbook formats go through
/// calamine, anything else is treated as delimited text.
pub fn load_path(path: &Path) -> Result<RawTable> {
    if is_workbook(path) {
        workbook::load_workbook(path)
    } else {
        delimited::load_delimited(path)
    }
}

/// Same dispatch as [`load_path`], but over bytes already in memory (the
/// upload case). The path supplies only the extension hint.
pub fn load_bytes(path: &Path, bytes: &[u8]) -> Result<RawTable> {
    if is_workbook(path) {
        workbook::load_workbook_bytes(bytes)
    } else {
        delimited::load_delimited_bytes(bytes)
    }
}

fn is_workbook(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref(),
        Some("xlsx" | "xlsm" | "xlsb" | "xls" | "ods")
    )
}
