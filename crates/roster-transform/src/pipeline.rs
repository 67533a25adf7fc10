//! Per-sheet redistribution pass.
//!
//! One call applies one compiled rule to one (source, destination) grid
//! pair: every subunit present in the source key column is located in the
//! destination and its rows are redistributed. Data-level findings land in
//! the report; nothing here aborts the run.

use std::collections::BTreeSet;

use roster_model::{
    CompiledRule, KeyOutcome, MissingSubunit, RedistributionReport, SheetGrid, normalize_key,
};
use tracing::{debug, info};

use crate::copy::distribute;
use crate::locate::find_all;

/// Redistribute every source subunit into the destination grid.
///
/// Keys are processed in first-appearance order, once each. Blacklisted
/// keys are skipped and recorded; keys with no destination block are
/// recorded as missing subunits. Blank key cells separate blocks but are
/// never keys themselves.
pub fn redistribute(
    source: &SheetGrid,
    dest: &mut SheetGrid,
    rule: &CompiledRule,
) -> RedistributionReport {
    let mut report = RedistributionReport::default();
    let mut seen: BTreeSet<String> = BTreeSet::new();

    for row in 2..=source.row_count() {
        let key_text = source.text(row, rule.key_column).trim().to_string();
        let key = normalize_key(&key_text);
        if key.is_empty() || !seen.insert(key.clone()) {
            continue;
        }
        if rule.is_blacklisted(&key) {
            debug!(key = %key_text, "skipping blacklisted key");
            report.skipped_keys.push(key_text);
            continue;
        }

        let source_blocks = find_all(source, rule.key_column, &key);
        let source_rows: u32 = source_blocks.iter().map(|block| block.row_count()).sum();
        let dest_blocks = find_all(dest, rule.key_column, &key);
        if dest_blocks.is_empty() {
            debug!(key = %key_text, source_rows, "subunit missing in destination");
            report.missing_subunits.push(MissingSubunit {
                key: key_text,
                source_rows,
            });
            continue;
        }

        let totals = distribute(source, &source_blocks, dest, &dest_blocks, rule.columns);
        if totals.rows_copied < source_rows {
            report.warnings.push(format!(
                "subunit '{key_text}': {} of {source_rows} source rows did not fit the destination",
                source_rows - totals.rows_copied
            ));
        }
        report.outcomes.push(KeyOutcome {
            key: key_text,
            rows_copied: totals.rows_copied,
            blocks_filled: totals.blocks_filled,
            rows_cleared: totals.rows_cleared,
        });
    }

    info!(
        keys = report.keys_processed(),
        rows = report.rows_copied(),
        missing = report.missing_subunits.len(),
        "redistribution pass finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_model::{CellValue, RuleSet, rules::CopyRule};

    fn text(value: &str) -> CellValue {
        CellValue::Text(value.to_string())
    }

    fn grid(rows: &[(&str, &str)]) -> SheetGrid {
        let mut all = vec![vec![text("Підрозділ"), text("ПІБ")]];
        all.extend(rows.iter().map(|(key, name)| vec![text(key), text(name)]));
        SheetGrid::from_rows(all)
    }

    fn compiled_rule(blacklist: &[&str]) -> CompiledRule {
        let set = RuleSet {
            rules: vec![CopyRule {
                sheet: None,
                key_column: "A".to_string(),
                columns: "B".to_string(),
                blacklist: blacklist.iter().map(|s| (*s).to_string()).collect(),
            }],
            blacklist: Vec::new(),
        };
        set.compile().unwrap().remove(0)
    }

    #[test]
    fn missing_destination_key_is_reported_not_fatal() {
        let source = grid(&[
            ("ВРЕБ", "а"),
            ("ВРЕБ", "б"),
            ("ВРЕБ", "в"),
            ("1РСпП", "г"),
        ]);
        let mut dest = grid(&[("1РСпП", "x")]);
        let report = redistribute(&source, &mut dest, &compiled_rule(&[]));

        assert_eq!(report.missing_subunits.len(), 1);
        assert_eq!(report.missing_subunits[0].key, "ВРЕБ");
        assert_eq!(report.missing_subunits[0].source_rows, 3);
        // The other key was still processed.
        assert_eq!(report.keys_processed(), 1);
        assert_eq!(dest.text(2, 2), "г");
    }

    #[test]
    fn keys_are_processed_once_in_first_appearance_order() {
        let source = grid(&[
            ("2РСпП", "а"),
            ("1РСпП", "б"),
            ("2РСпП", "в"),
        ]);
        let mut dest = grid(&[
            ("1РСпП", "x"),
            ("2РСпП", "x"),
            ("2РСпП", "x"),
        ]);
        let report = redistribute(&source, &mut dest, &compiled_rule(&[]));
        let keys: Vec<&str> = report.outcomes.iter().map(|o| o.key.as_str()).collect();
        assert_eq!(keys, vec!["2РСпП", "1РСпП"]);
        // Both source rows of 2РСпП arrive via the concatenated cursor.
        assert_eq!(dest.text(3, 2), "а");
        assert_eq!(dest.text(4, 2), "в");
    }

    #[test]
    fn blacklisted_keys_are_skipped_and_recorded() {
        let source = grid(&[("Разом", "100"), ("1РСпП", "а")]);
        let mut dest = grid(&[("Разом", "стале"), ("1РСпП", "x")]);
        let report = redistribute(&source, &mut dest, &compiled_rule(&["Разом"]));
        assert_eq!(report.skipped_keys, vec!["Разом".to_string()]);
        assert_eq!(report.keys_processed(), 1);
        // The blacklisted destination row keeps its value.
        assert_eq!(dest.text(2, 2), "стале");
    }

    #[test]
    fn surplus_source_rows_produce_a_warning() {
        let source = grid(&[("1РСпП", "а"), ("1РСпП", "б"), ("1РСпП", "в")]);
        let mut dest = grid(&[("1РСпП", "x")]);
        let report = redistribute(&source, &mut dest, &compiled_rule(&[]));
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("1РСпП"));
        assert_eq!(report.outcomes[0].rows_copied, 1);
    }

    #[test]
    fn blank_key_cells_are_not_keys() {
        let source = grid(&[("", "сміття"), ("1РСпП", "а")]);
        let mut dest = grid(&[("1РСпП", "x")]);
        let report = redistribute(&source, &mut dest, &compiled_rule(&[]));
        assert_eq!(report.keys_processed(), 1);
        assert_eq!(report.outcomes[0].key, "1РСпП");
    }
}
