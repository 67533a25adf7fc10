//! Contiguous key blocks and key normalization.
//!
//! A subunit occupies a run of consecutive rows in a sheet, identified by
//! the value of a key column. Key comparison is always done on the
//! normalized form: extracted text with every whitespace character removed,
//! lowercased. That makes `"1 РСпП"`, `"1РСпП "` and `"1рспп"` the same
//! subunit.

use serde::Serialize;

use crate::cell::CellValue;

/// Normalize a key string for comparison.
pub fn normalize_key(text: &str) -> String {
    text.chars()
        .filter(|ch| !ch.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Normalize the key held in a cell. Malformed cells extract to empty text
/// and therefore normalize to the empty key, which never matches a real
/// subunit.
pub fn normalize_cell_key(cell: &CellValue) -> String {
    normalize_key(&cell.text())
}

/// A maximal run of consecutive rows whose key column matches one key.
///
/// `start_row..=end_row` is inclusive and excludes the header row by
/// construction (locators never scan row 1). The rows immediately outside
/// the run do not match the key, or the sheet boundary is reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContiguousBlock {
    pub start_row: u32,
    pub end_row: u32,
    /// Normalized key all rows of the run share.
    pub key: String,
}

impl ContiguousBlock {
    pub fn new(start_row: u32, end_row: u32, key: impl Into<String>) -> Self {
        debug_assert!(start_row >= 2, "blocks never include the header row");
        debug_assert!(start_row <= end_row);
        Self {
            start_row,
            end_row,
            key: key.into(),
        }
    }

    pub fn row_count(&self) -> u32 {
        self.end_row - self.start_row + 1
    }
}
