//! CSV-backed sheet reading and writing.
//!
//! CSV is the tabular interchange boundary; native workbook formats are
//! converted upstream. Rows are loaded verbatim, blank rows included:
//! block location works on physical row numbers, so dropping a row here
//! would shift every block below it.

use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use tracing::debug;

use roster_model::{CellValue, SheetGrid};

use crate::error::{IngestError, Result};

/// Load a sheet from a CSV file.
pub fn read_sheet(path: &Path) -> Result<SheetGrid> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let mut rows: Vec<Vec<CellValue>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(
            record
                .iter()
                .map(|raw| CellValue::from_raw(raw.trim_matches('\u{feff}')))
                .collect(),
        );
    }
    debug!(path = %path.display(), rows = rows.len(), "loaded sheet");
    Ok(SheetGrid::from_rows(rows))
}

/// Write a sheet back out as CSV, cells in extracted-text form.
///
/// Rows are squared off to the sheet's full width so blank rows survive a
/// round trip; the CSV reader drops fully empty lines, which would shift
/// every block below them.
pub fn write_sheet(grid: &SheetGrid, path: &Path) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    let width = grid.column_count().max(1) as usize;
    for row in grid.rows() {
        let mut record: Vec<String> = row.iter().map(CellValue::text).collect();
        record.resize_with(width, String::new);
        writer
            .write_record(&record)
            .map_err(|source| IngestError::Csv {
                path: path.to_path_buf(),
                source,
            })?;
    }
    writer.flush().map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), rows = grid.row_count(), "wrote sheet");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_preserves_row_positions() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sheet.csv");
        std::fs::write(&path, "Підрозділ,ПІБ\n1РСпП,Петренко\n,\nВРЕБ,Коваль\n").unwrap();

        let grid = read_sheet(&path).unwrap();
        assert_eq!(grid.row_count(), 4);
        assert_eq!(grid.text(2, 1), "1РСпП");
        // Blank row stays where it was.
        assert!(grid.get(3, 1).is_empty());
        assert_eq!(grid.text(4, 2), "Коваль");
    }

    #[test]
    fn read_strips_byte_order_mark() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bom.csv");
        std::fs::write(&path, "\u{feff}Підрозділ,ПІБ\n1РСпП,Петренко\n").unwrap();

        let grid = read_sheet(&path).unwrap();
        assert_eq!(grid.text(1, 1), "Підрозділ");
    }

    #[test]
    fn read_parses_numeric_cells() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("numbers.csv");
        std::fs::write(&path, "a,b\nтекст,42\n").unwrap();

        let grid = read_sheet(&path).unwrap();
        assert_eq!(grid.get(2, 2), &CellValue::Number(42.0));
    }

    #[test]
    fn round_trip_keeps_cell_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let grid = SheetGrid::from_rows(vec![
            vec![CellValue::Text("Підрозділ".to_string()), CellValue::Number(3.0)],
            vec![CellValue::Text("1РСпП".to_string()), CellValue::Empty],
        ]);
        write_sheet(&grid, &path).unwrap();
        let reloaded = read_sheet(&path).unwrap();
        assert_eq!(reloaded.text(1, 1), "Підрозділ");
        assert_eq!(reloaded.text(1, 2), "3");
        assert!(reloaded.get(2, 2).is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(read_sheet(&dir.path().join("absent.csv")).is_err());
    }
}
