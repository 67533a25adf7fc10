//! Block copying with tail clearing.
//!
//! Copying is row-aligned from a block's first row: source row
//! `start + i` lands in destination row `start + i`. A destination block
//! longer than the data it receives gets its remaining rows blanked in the
//! copied column range, so stale values from a previous run can never
//! survive a shrinking subunit.

use roster_model::{ColumnRange, ContiguousBlock, SheetGrid};
use tracing::trace;

/// Totals from distributing one key across its destination blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Distribution {
    pub rows_copied: u32,
    /// Destination blocks that received at least one row.
    pub blocks_filled: u32,
    /// Destination rows blanked past the copied data.
    pub rows_cleared: u32,
}

/// Copy one source block into one destination block.
///
/// Returns the number of rows copied:
/// `min(source_block.row_count(), dest_block.row_count())`. Destination
/// rows beyond that, up to the block end, are cleared in `columns`.
pub fn copy_block(
    source: &SheetGrid,
    source_block: &ContiguousBlock,
    dest: &mut SheetGrid,
    dest_block: &ContiguousBlock,
    columns: ColumnRange,
) -> u32 {
    let rows_copied = source_block.row_count().min(dest_block.row_count());
    for offset in 0..rows_copied {
        copy_row(
            source,
            source_block.start_row + offset,
            dest,
            dest_block.start_row + offset,
            columns,
        );
    }
    clear_rows(dest, dest_block.start_row + rows_copied, dest_block.end_row, columns);
    rows_copied
}

/// Distribute source rows across destination blocks in order.
///
/// A cursor walks the source rows (blocks concatenated in row order); each
/// destination block consumes up to its own length, then has its tail
/// cleared. Destination blocks past the point of source exhaustion receive
/// zero rows and are cleared over their whole span.
pub fn distribute(
    source: &SheetGrid,
    source_blocks: &[ContiguousBlock],
    dest: &mut SheetGrid,
    dest_blocks: &[ContiguousBlock],
    columns: ColumnRange,
) -> Distribution {
    let mut source_rows = source_blocks
        .iter()
        .flat_map(|block| block.start_row..=block.end_row);
    let mut totals = Distribution::default();

    for dest_block in dest_blocks {
        let mut copied_here = 0u32;
        for offset in 0..dest_block.row_count() {
            let Some(source_row) = source_rows.next() else {
                break;
            };
            copy_row(source, source_row, dest, dest_block.start_row + offset, columns);
            copied_here += 1;
        }
        clear_rows(
            dest,
            dest_block.start_row + copied_here,
            dest_block.end_row,
            columns,
        );
        trace!(
            start = dest_block.start_row,
            end = dest_block.end_row,
            copied = copied_here,
            "filled destination block"
        );
        totals.rows_copied += copied_here;
        totals.rows_cleared += dest_block.row_count() - copied_here;
        if copied_here > 0 {
            totals.blocks_filled += 1;
        }
    }
    totals
}

fn copy_row(
    source: &SheetGrid,
    source_row: u32,
    dest: &mut SheetGrid,
    dest_row: u32,
    columns: ColumnRange,
) {
    for col in columns.iter() {
        dest.set(dest_row, col, source.get(source_row, col).clone());
    }
}

fn clear_rows(dest: &mut SheetGrid, from_row: u32, to_row: u32, columns: ColumnRange) {
    for row in from_row..=to_row {
        for col in columns.iter() {
            dest.clear(row, col);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_model::CellValue;

    fn text(value: &str) -> CellValue {
        CellValue::Text(value.to_string())
    }

    /// Grid with a key in column 1 and data in columns 2..=3, rows from 2.
    fn grid(rows: &[(&str, &str, &str)]) -> SheetGrid {
        let mut all = vec![vec![text("Підрозділ"), text("ПІБ"), text("Посада")]];
        all.extend(
            rows.iter()
                .map(|(key, a, b)| vec![text(key), text(a), text(b)]),
        );
        SheetGrid::from_rows(all)
    }

    fn block(start: u32, end: u32) -> ContiguousBlock {
        ContiguousBlock::new(start, end, "1рспп")
    }

    fn data_columns() -> ColumnRange {
        ColumnRange::new(2, 3).unwrap()
    }

    #[test]
    fn equal_length_copy_is_exact() {
        let source = grid(&[("1РСпП", "Петренко", "стрілець"), ("1РСпП", "Коваль", "кулеметник")]);
        let mut dest = grid(&[("1РСпП", "x", "x"), ("1РСпП", "y", "y")]);
        let copied = copy_block(&source, &block(2, 3), &mut dest, &block(2, 3), data_columns());
        assert_eq!(copied, 2);
        assert_eq!(dest.text(2, 2), "Петренко");
        assert_eq!(dest.text(3, 3), "кулеметник");
    }

    #[test]
    fn longer_destination_gets_tail_cleared() {
        let source = grid(&[("1РСпП", "Петренко", "стрілець")]);
        let mut dest = grid(&[
            ("1РСпП", "стале", "стале"),
            ("1РСпП", "стале", "стале"),
            ("1РСпП", "стале", "стале"),
        ]);
        let copied = copy_block(&source, &block(2, 2), &mut dest, &block(2, 4), data_columns());
        assert_eq!(copied, 1);
        assert_eq!(dest.text(2, 2), "Петренко");
        for row in 3..=4 {
            for col in 2..=3 {
                assert!(dest.get(row, col).is_empty(), "row {row} col {col} not cleared");
            }
        }
        // The key column is outside the copied range and untouched.
        assert_eq!(dest.text(4, 1), "1РСпП");
    }

    #[test]
    fn shorter_destination_truncates() {
        let source = grid(&[
            ("1РСпП", "а", "1"),
            ("1РСпП", "б", "2"),
            ("1РСпП", "в", "3"),
        ]);
        let mut dest = grid(&[("1РСпП", "x", "x")]);
        let copied = copy_block(&source, &block(2, 4), &mut dest, &block(2, 2), data_columns());
        assert_eq!(copied, 1);
        assert_eq!(dest.text(2, 2), "а");
    }

    #[test]
    fn distribute_splits_across_blocks_and_clears_remainder() {
        // Source block of 5 rows; destinations of 2 and 4 rows. The first
        // destination takes rows 1-2, the second rows 3-5 plus one cleared
        // row.
        let source = grid(&[
            ("1РСпП", "а", "1"),
            ("1РСпП", "б", "2"),
            ("1РСпП", "в", "3"),
            ("1РСпП", "г", "4"),
            ("1РСпП", "д", "5"),
        ]);
        let mut dest = grid(&[
            ("1РСпП", "x", "x"),
            ("1РСпП", "x", "x"),
            ("штаб", "-", "-"),
            ("1РСпП", "x", "x"),
            ("1РСпП", "x", "x"),
            ("1РСпП", "x", "x"),
            ("1РСпП", "x", "x"),
        ]);
        let totals = distribute(
            &source,
            &[block(2, 6)],
            &mut dest,
            &[block(2, 3), block(5, 8)],
            data_columns(),
        );
        assert_eq!(totals.rows_copied, 5);
        assert_eq!(totals.blocks_filled, 2);
        assert_eq!(totals.rows_cleared, 1);
        assert_eq!(dest.text(2, 2), "а");
        assert_eq!(dest.text(3, 2), "б");
        assert_eq!(dest.text(5, 2), "в");
        assert_eq!(dest.text(6, 2), "г");
        assert_eq!(dest.text(7, 2), "д");
        assert!(dest.get(8, 2).is_empty());
        assert!(dest.get(8, 3).is_empty());
        // The unrelated block between the two destinations is untouched.
        assert_eq!(dest.text(4, 2), "-");
    }

    #[test]
    fn surplus_destination_blocks_are_fully_cleared() {
        let source = grid(&[("1РСпП", "а", "1")]);
        let mut dest = grid(&[
            ("1РСпП", "x", "x"),
            ("штаб", "-", "-"),
            ("1РСпП", "стале", "стале"),
            ("1РСпП", "стале", "стале"),
        ]);
        let totals = distribute(
            &source,
            &[block(2, 2)],
            &mut dest,
            &[block(2, 2), block(4, 5)],
            data_columns(),
        );
        assert_eq!(totals.rows_copied, 1);
        assert_eq!(totals.blocks_filled, 1);
        assert_eq!(totals.rows_cleared, 2);
        assert_eq!(dest.text(2, 2), "а");
        for row in 4..=5 {
            assert!(dest.get(row, 2).is_empty());
            assert!(dest.get(row, 3).is_empty());
        }
    }

    #[test]
    fn disjoint_source_blocks_feed_one_cursor() {
        let source = grid(&[
            ("1РСпП", "а", "1"),
            ("штаб", "-", "-"),
            ("1РСпП", "б", "2"),
        ]);
        let mut dest = grid(&[("1РСпП", "x", "x"), ("1РСпП", "x", "x")]);
        let totals = distribute(
            &source,
            &[block(2, 2), block(4, 4)],
            &mut dest,
            &[block(2, 3)],
            data_columns(),
        );
        assert_eq!(totals.rows_copied, 2);
        assert_eq!(dest.text(2, 2), "а");
        assert_eq!(dest.text(3, 2), "б");
    }

    #[test]
    fn copy_conservation_over_the_copied_range() {
        let source = grid(&[
            ("1РСпП", "а", "1"),
            ("1РСпП", "б", "2"),
        ]);
        let mut dest = grid(&[
            ("1РСпП", "x", "x"),
            ("1РСпП", "x", "x"),
            ("1РСпП", "x", "x"),
        ]);
        let src_block = block(2, 3);
        let dst_block = block(2, 4);
        let copied = copy_block(&source, &src_block, &mut dest, &dst_block, data_columns());
        for offset in 0..copied {
            for col in data_columns().iter() {
                assert_eq!(
                    dest.get(dst_block.start_row + offset, col),
                    source.get(src_block.start_row + offset, col)
                );
            }
        }
        for row in dst_block.start_row + copied..=dst_block.end_row {
            for col in data_columns().iter() {
                assert!(dest.get(row, col).is_empty());
            }
        }
    }
}
