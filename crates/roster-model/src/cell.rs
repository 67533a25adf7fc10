//! Cell values and text extraction.
//!
//! Spreadsheet cells arrive in several shapes: plain text, numbers,
//! rich-text runs, or formulas carrying a cached result. All downstream
//! matching works on the extracted text, so the extraction rules live here
//! next to the value type.

use serde::{Deserialize, Serialize};

/// A single spreadsheet cell.
///
/// Unknown or malformed structures degrade to [`CellValue::Empty`] at the
/// ingestion boundary; nothing in this enum can fail to produce text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum CellValue {
    /// Blank cell. Also the result of reading past the end of a ragged row.
    #[default]
    Empty,
    /// Plain string content.
    Text(String),
    /// Numeric content.
    Number(f64),
    /// Rich text stored as its run fragments, in order.
    RichText(Vec<String>),
    /// Formula cell; matching uses the cached result, never the formula body.
    Formula {
        formula: String,
        cached: Option<String>,
    },
}

impl CellValue {
    /// Build a cell from a raw string as read from a sheet.
    ///
    /// Blank input becomes [`CellValue::Empty`]; values that parse as a
    /// number are kept numeric so they survive a copy without reformatting.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        if let Ok(number) = trimmed.parse::<f64>() {
            if number.is_finite() {
                return Self::Number(number);
            }
        }
        Self::Text(raw.to_string())
    }

    /// Extract the textual content of the cell.
    pub fn text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(text) => text.clone(),
            Self::Number(number) => format_number(*number),
            Self::RichText(runs) => runs.concat(),
            Self::Formula { cached, .. } => cached.clone().unwrap_or_default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.is_empty(),
            Self::RichText(runs) => runs.iter().all(|run| run.is_empty()),
            Self::Formula { cached, .. } => cached.as_deref().is_none_or(str::is_empty),
            Self::Number(_) => false,
        }
    }
}

/// Render a numeric cell the way a sheet displays it: integral values
/// without a trailing `.0`.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
