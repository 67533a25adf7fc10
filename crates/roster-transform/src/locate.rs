//! Contiguous-block location.
//!
//! A sheet groups a subunit's rows together; the locators find those runs
//! by scanning the key column top to bottom. Row 1 is the header and is
//! never scanned. Matching is exact on normalized keys, no fuzzing.

use roster_model::{ContiguousBlock, SheetGrid, normalize_cell_key, normalize_key};

/// First maximal run of rows matching `key`, or `None`.
///
/// Scanning stops at the end of the first run; later runs of the same key
/// are not visited.
pub fn find_first(grid: &SheetGrid, key_column: u32, key: &str) -> Option<ContiguousBlock> {
    let target = normalize_key(key);
    if target.is_empty() {
        return None;
    }
    let mut run_start = None;
    for row in 2..=grid.row_count() {
        let matched = normalize_cell_key(grid.get(row, key_column)) == target;
        match (run_start, matched) {
            (None, true) => run_start = Some(row),
            (Some(start), false) => return Some(ContiguousBlock::new(start, row - 1, target)),
            _ => {}
        }
    }
    run_start.map(|start| ContiguousBlock::new(start, grid.row_count(), target))
}

/// Every maximal run of rows matching `key`, in row order.
///
/// Single pass; a run that extends to the last row is closed out and
/// included.
pub fn find_all(grid: &SheetGrid, key_column: u32, key: &str) -> Vec<ContiguousBlock> {
    let target = normalize_key(key);
    if target.is_empty() {
        return Vec::new();
    }
    let mut blocks = Vec::new();
    let mut run_start = None;
    for row in 2..=grid.row_count() {
        let matched = normalize_cell_key(grid.get(row, key_column)) == target;
        match (run_start, matched) {
            (None, true) => run_start = Some(row),
            (Some(start), false) => {
                blocks.push(ContiguousBlock::new(start, row - 1, target.clone()));
                run_start = None;
            }
            _ => {}
        }
    }
    if let Some(start) = run_start {
        blocks.push(ContiguousBlock::new(start, grid.row_count(), target));
    }
    blocks
}
