//! Accumulated run reporting.
//!
//! Data-level findings never abort a run. They are collected here and
//! surfaced to the operator next to the success summary: how many rows each
//! subunit received, which subunits exist in a source sheet but nowhere in
//! the destination, and which keys were deliberately skipped.

use serde::Serialize;

/// A key found in a source sheet with no block in the destination sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingSubunit {
    /// Display form of the key, as it appears in the source sheet.
    pub key: String,
    /// Number of source rows that had nowhere to go.
    pub source_rows: u32,
}

/// Outcome of redistributing one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyOutcome {
    /// Display form of the key.
    pub key: String,
    pub rows_copied: u32,
    /// Destination blocks that received at least one row.
    pub blocks_filled: u32,
    /// Destination rows blanked past the copied data (tail clearing).
    pub rows_cleared: u32,
}

/// Everything one redistribution pass over a source grid produced.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RedistributionReport {
    pub outcomes: Vec<KeyOutcome>,
    pub missing_subunits: Vec<MissingSubunit>,
    /// Blacklisted keys encountered and skipped, display form.
    pub skipped_keys: Vec<String>,
    pub warnings: Vec<String>,
}

impl RedistributionReport {
    pub fn rows_copied(&self) -> u32 {
        self.outcomes.iter().map(|outcome| outcome.rows_copied).sum()
    }

    pub fn keys_processed(&self) -> usize {
        self.outcomes.len()
    }

    pub fn has_missing_subunits(&self) -> bool {
        !self.missing_subunits.is_empty()
    }

    /// Fold another report into this one, preserving order.
    pub fn merge(&mut self, other: Self) {
        self.outcomes.extend(other.outcomes);
        self.missing_subunits.extend(other.missing_subunits);
        self.skipped_keys.extend(other.skipped_keys);
        self.warnings.extend(other.warnings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts() {
        let report = RedistributionReport {
            outcomes: vec![
                KeyOutcome {
                    key: "1РСпП".to_string(),
                    rows_copied: 5,
                    blocks_filled: 2,
                    rows_cleared: 1,
                },
                KeyOutcome {
                    key: "2РСпП".to_string(),
                    rows_copied: 3,
                    blocks_filled: 1,
                    rows_cleared: 0,
                },
            ],
            missing_subunits: vec![MissingSubunit {
                key: "ВРЕБ".to_string(),
                source_rows: 3,
            }],
            skipped_keys: vec!["Разом".to_string()],
            warnings: Vec::new(),
        };
        assert_eq!(report.rows_copied(), 8);
        assert_eq!(report.keys_processed(), 2);
        assert!(report.has_missing_subunits());
    }

    #[test]
    fn merge_preserves_order() {
        let mut first = RedistributionReport {
            skipped_keys: vec!["a".to_string()],
            ..Default::default()
        };
        let second = RedistributionReport {
            skipped_keys: vec!["b".to_string()],
            ..Default::default()
        };
        first.merge(second);
        assert_eq!(first.skipped_keys, vec!["a", "b"]);
    }
}
