//! Result types carried between the pipeline, commands, and summary.

use std::path::PathBuf;

use roster_model::{MissingSubunit, RedistributionReport};

/// Outcome of one redistribution run over a source folder.
#[derive(Debug, Default)]
pub struct RunResult {
    /// Per source file, in processing order.
    pub files: Vec<FileSummary>,
    /// Where the destination sheet was written; `None` on a dry run.
    pub output: Option<PathBuf>,
    /// Files that could not be processed at all.
    pub errors: Vec<String>,
}

/// One processed source file and what its rules produced.
#[derive(Debug)]
pub struct FileSummary {
    /// File name of the source sheet.
    pub file: String,
    pub report: RedistributionReport,
}

impl RunResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn total_rows_copied(&self) -> u32 {
        self.files.iter().map(|file| file.report.rows_copied()).sum()
    }

    /// Every missing subunit across the run, tagged with its source file.
    pub fn all_missing_subunits(&self) -> Vec<(&str, &MissingSubunit)> {
        self.files
            .iter()
            .flat_map(|file| {
                file.report
                    .missing_subunits
                    .iter()
                    .map(move |missing| (file.file.as_str(), missing))
            })
            .collect()
    }

    /// Warnings across the run, tagged with their source file.
    pub fn all_warnings(&self) -> Vec<(&str, &str)> {
        self.files
            .iter()
            .flat_map(|file| {
                file.report
                    .warnings
                    .iter()
                    .map(move |warning| (file.file.as_str(), warning.as_str()))
            })
            .collect()
    }
}
