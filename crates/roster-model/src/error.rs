use thiserror::Error;

/// Configuration-time errors.
///
/// These indicate a broken rule set or column reference and abort a run
/// before any grid is scanned. Data-level problems (missing keys, ragged
/// rows) are never represented here; they flow into the run report instead.
#[derive(Debug, Error)]
pub enum RosterError {
    /// Column reference that does not parse as a spreadsheet column letter.
    #[error("invalid column reference '{value}'")]
    InvalidColumn { value: String },

    /// Column range with unparseable endpoints or start > end.
    #[error("invalid column range '{spec}': {reason}")]
    InvalidColumnRange { spec: String, reason: String },

    /// Rule set with no rules at all.
    #[error("rule set contains no rules")]
    EmptyRuleSet,
}

pub type Result<T> = std::result::Result<T, RosterError>;
