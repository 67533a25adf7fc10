//! Human-readable run summary rendering.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    if let Some(output) = &result.output {
        println!("Output: {}", output.display());
    } else {
        println!("Dry run, nothing written.");
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Keys"),
        header_cell("Rows copied"),
        header_cell("Rows cleared"),
        header_cell("Missing"),
        header_cell("Skipped"),
    ]);
    apply_table_style(&mut table);
    for col in 1..=5 {
        align_column(&mut table, col, CellAlignment::Right);
    }

    let mut total_keys = 0usize;
    let mut total_rows = 0u32;
    let mut total_cleared = 0u32;
    let mut total_missing = 0usize;
    let mut total_skipped = 0usize;
    for summary in &result.files {
        let report = &summary.report;
        let cleared: u32 = report.outcomes.iter().map(|o| o.rows_cleared).sum();
        total_keys += report.keys_processed();
        total_rows += report.rows_copied();
        total_cleared += cleared;
        total_missing += report.missing_subunits.len();
        total_skipped += report.skipped_keys.len();
        table.add_row(vec![
            Cell::new(&summary.file),
            Cell::new(report.keys_processed()),
            Cell::new(report.rows_copied()),
            Cell::new(cleared),
            count_cell(report.missing_subunits.len(), Color::Red),
            Cell::new(report.skipped_keys.len()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_keys).add_attribute(Attribute::Bold),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        Cell::new(total_cleared).add_attribute(Attribute::Bold),
        count_cell(total_missing, Color::Red).add_attribute(Attribute::Bold),
        Cell::new(total_skipped).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    print_missing_subunits(result);

    let warnings = result.all_warnings();
    if !warnings.is_empty() {
        eprintln!("Warnings:");
        for (file, warning) in warnings {
            eprintln!("- [{file}] {warning}");
        }
    }
    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

/// Missing subunits get their own table: they are the finding the operator
/// acts on.
fn print_missing_subunits(result: &RunResult) {
    let missing = result.all_missing_subunits();
    if missing.is_empty() {
        return;
    }
    println!(
        "{} subunit(s) from the sources were not found in the destination:",
        missing.len()
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Subunit"),
        header_cell("Source rows"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for (file, subunit) in missing {
        table.add_row(vec![
            Cell::new(file),
            Cell::new(&subunit.key).fg(Color::Yellow),
            Cell::new(subunit.source_rows),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        Cell::new(count)
    } else {
        Cell::new(count).fg(color)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
