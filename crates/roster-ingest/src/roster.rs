//! Roster extraction from a sheet column.

use roster_model::SheetGrid;
use tracing::debug;

/// Collect the roster names from a fixed column, in row order.
///
/// Row 1 is the header and is skipped; blank cells are dropped. Names are
/// trimmed but otherwise kept as written: nominative "Прізвище Ім'я
/// По батькові" form, declension happens downstream.
pub fn roster_from_column(grid: &SheetGrid, column: u32) -> Vec<String> {
    let mut names = Vec::new();
    for row in 2..=grid.row_count() {
        let name = grid.text(row, column).trim().to_string();
        if !name.is_empty() {
            names.push(name);
        }
    }
    debug!(column, names = names.len(), "extracted roster");
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_model::CellValue;

    #[test]
    fn skips_header_and_blanks() {
        let grid = SheetGrid::from_rows(vec![
            vec![CellValue::Text("ПІБ".to_string())],
            vec![CellValue::Text("Петренко Іван Олександрович".to_string())],
            vec![CellValue::Empty],
            vec![CellValue::Text("  Коваленко Петро  ".to_string())],
        ]);
        let names = roster_from_column(&grid, 1);
        assert_eq!(
            names,
            vec![
                "Петренко Іван Олександрович".to_string(),
                "Коваленко Петро".to_string(),
            ]
        );
    }
}
