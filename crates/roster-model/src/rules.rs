//! Redistribution rule configuration.
//!
//! A rule set is authored as JSON and describes which column range to move
//! for which key column, per source sheet. Everything here is validated
//! once, up front, before any grid is opened; a rule set that compiles
//! cannot fail on column arithmetic later.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::block::normalize_key;
use crate::column::{ColumnRange, column_index};
use crate::error::{Result, RosterError};

/// One sheet-and-columns rule as authored in the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopyRule {
    /// Case-insensitive substring of the source file stem this rule applies
    /// to. A rule without a pattern applies to every source file.
    #[serde(default)]
    pub sheet: Option<String>,
    /// Key column holding subunit names, as a letter reference.
    pub key_column: String,
    /// Data columns to redistribute, e.g. `"C:H"`.
    pub columns: String,
    /// Keys this rule must never process, in addition to the global list.
    #[serde(default)]
    pub blacklist: Vec<String>,
}

/// The full rule configuration for a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSet {
    pub rules: Vec<CopyRule>,
    /// Keys excluded from every rule (placeholder row labels and the like).
    #[serde(default)]
    pub blacklist: Vec<String>,
}

/// A validated rule, ready for the engine.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    sheet_pattern: Option<String>,
    pub key_column: u32,
    pub columns: ColumnRange,
    blacklist: BTreeSet<String>,
}

impl CompiledRule {
    /// Whether this rule applies to a source file with the given stem.
    pub fn applies_to(&self, file_stem: &str) -> bool {
        match &self.sheet_pattern {
            Some(pattern) => file_stem.to_lowercase().contains(pattern),
            None => true,
        }
    }

    /// Membership test against the merged blacklist, by normalized key.
    pub fn is_blacklisted(&self, normalized_key: &str) -> bool {
        self.blacklist.contains(normalized_key)
    }
}

impl RuleSet {
    /// Validate the configuration and produce engine-ready rules.
    ///
    /// Fails fast on an empty rule list, an unparseable key column, or an
    /// invalid column range. These are configuration mistakes, not data
    /// conditions, so the whole run aborts before any sheet is scanned.
    pub fn compile(&self) -> Result<Vec<CompiledRule>> {
        if self.rules.is_empty() {
            return Err(RosterError::EmptyRuleSet);
        }
        let global: Vec<String> = self.blacklist.iter().map(|key| normalize_key(key)).collect();
        self.rules
            .iter()
            .map(|rule| {
                let key_column =
                    column_index(&rule.key_column).ok_or_else(|| RosterError::InvalidColumn {
                        value: rule.key_column.clone(),
                    })?;
                let columns = ColumnRange::parse(&rule.columns)?;
                let mut blacklist: BTreeSet<String> = global.iter().cloned().collect();
                blacklist.extend(rule.blacklist.iter().map(|key| normalize_key(key)));
                Ok(CompiledRule {
                    sheet_pattern: rule
                        .sheet
                        .as_ref()
                        .map(|pattern| pattern.trim().to_lowercase())
                        .filter(|pattern| !pattern.is_empty()),
                    key_column,
                    columns,
                    blacklist,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(sheet: Option<&str>, key_column: &str, columns: &str) -> CopyRule {
        CopyRule {
            sheet: sheet.map(String::from),
            key_column: key_column.to_string(),
            columns: columns.to_string(),
            blacklist: Vec::new(),
        }
    }

    #[test]
    fn compiles_valid_rules() {
        let set = RuleSet {
            rules: vec![rule(Some("бойовий"), "B", "C:H"), rule(None, "A", "D")],
            blacklist: vec!["Разом".to_string()],
        };
        let compiled = set.compile().unwrap();
        assert_eq!(compiled.len(), 2);
        assert_eq!(compiled[0].key_column, 2);
        assert_eq!(compiled[0].columns.width(), 6);
        assert!(compiled[0].is_blacklisted("разом"));
        assert!(compiled[1].applies_to("anything"));
    }

    #[test]
    fn sheet_pattern_matches_stems_case_insensitively() {
        let set = RuleSet {
            rules: vec![rule(Some("Бойовий"), "B", "C:D")],
            blacklist: Vec::new(),
        };
        let compiled = set.compile().unwrap();
        assert!(compiled[0].applies_to("бойовий_розрахунок_2024"));
        assert!(!compiled[0].applies_to("штатка"));
    }

    #[test]
    fn per_rule_blacklist_merges_with_global() {
        let set = RuleSet {
            rules: vec![CopyRule {
                sheet: None,
                key_column: "B".to_string(),
                columns: "C:D".to_string(),
                blacklist: vec!["ВСЬОГО".to_string()],
            }],
            blacklist: vec!["Разом".to_string()],
        };
        let compiled = set.compile().unwrap();
        assert!(compiled[0].is_blacklisted("всього"));
        assert!(compiled[0].is_blacklisted("разом"));
        assert!(!compiled[0].is_blacklisted("1рспп"));
    }

    #[test]
    fn empty_rule_set_rejected() {
        let set = RuleSet {
            rules: Vec::new(),
            blacklist: Vec::new(),
        };
        assert!(matches!(set.compile(), Err(RosterError::EmptyRuleSet)));
    }

    #[test]
    fn bad_key_column_rejected() {
        let set = RuleSet {
            rules: vec![rule(None, "7", "C:D")],
            blacklist: Vec::new(),
        };
        assert!(matches!(
            set.compile(),
            Err(RosterError::InvalidColumn { .. })
        ));
    }

    #[test]
    fn deserializes_from_json() {
        let json = r#"{
            "rules": [
                {"sheet": "бойовий", "key_column": "B", "columns": "C:H"}
            ],
            "blacklist": ["Разом"]
        }"#;
        let set: RuleSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.rules.len(), 1);
        assert!(set.rules[0].blacklist.is_empty());
        set.compile().unwrap();
    }
}
