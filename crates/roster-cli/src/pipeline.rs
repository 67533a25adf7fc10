//! Redistribution run pipeline.
//!
//! Stages, in order:
//! 1. **Configure**: load and compile the rule set (fails the run fast)
//! 2. **Discover**: list source sheets in the batch folder
//! 3. **Redistribute**: apply every applicable rule per file against the
//!    destination grid, accumulating reports
//! 4. **Write**: save the mutated destination unless this is a dry run
//!
//! A source file that fails to load is recorded and skipped; the run
//! continues with the remaining files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, warn};

use roster_ingest::{discover_sheets, file_stem, read_sheet, write_sheet};
use roster_model::{CompiledRule, RedistributionReport, RuleSet, SheetGrid};
use roster_transform::redistribute;

use crate::types::{FileSummary, RunResult};

/// Inputs for one redistribution run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Folder holding the source sheets.
    pub source_dir: PathBuf,
    /// Destination sheet to redistribute into.
    pub dest: PathBuf,
    /// Rule-set JSON path.
    pub rules: PathBuf,
    /// Where to write the result; the destination path itself when `None`.
    pub output: Option<PathBuf>,
    /// Process and report without writing anything.
    pub dry_run: bool,
}

/// Load and validate the rule set. Configuration mistakes abort here,
/// before any sheet is opened.
pub fn load_rules(path: &Path) -> Result<Vec<CompiledRule>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read rule set {}", path.display()))?;
    let rule_set: RuleSet = serde_json::from_str(&text)
        .with_context(|| format!("parse rule set {}", path.display()))?;
    let compiled = rule_set.compile().context("validate rule set")?;
    debug!(rules = compiled.len(), "compiled rule set");
    Ok(compiled)
}

/// Run a full redistribution pass over the source folder.
pub fn run(options: &RunOptions) -> Result<RunResult> {
    let span = info_span!("redistribute", source = %options.source_dir.display());
    let _guard = span.enter();

    let rules = load_rules(&options.rules)?;
    let files = discover_sheets(&options.source_dir).context("discover source sheets")?;
    let mut dest = read_sheet(&options.dest)
        .with_context(|| format!("read destination sheet {}", options.dest.display()))?;

    let mut result = RunResult::default();
    for path in files {
        if is_same_file(&path, &options.dest) {
            debug!(file = %path.display(), "skipping the destination sheet itself");
            continue;
        }
        let stem = file_stem(&path);
        let applicable: Vec<&CompiledRule> =
            rules.iter().filter(|rule| rule.applies_to(&stem)).collect();
        if applicable.is_empty() {
            debug!(file = %stem, "no rule applies");
            continue;
        }
        match process_file(&path, &applicable, &mut dest) {
            Ok(report) => {
                info!(
                    file = %stem,
                    keys = report.keys_processed(),
                    rows = report.rows_copied(),
                    missing = report.missing_subunits.len(),
                    "processed source sheet"
                );
                result.files.push(FileSummary {
                    file: file_name(&path),
                    report,
                });
            }
            Err(error) => {
                warn!(file = %stem, %error, "failed to process source sheet");
                result.errors.push(format!("{}: {error:#}", file_name(&path)));
            }
        }
    }

    if options.dry_run {
        info!("dry run, destination not written");
    } else {
        let output = options.output.clone().unwrap_or_else(|| options.dest.clone());
        write_sheet(&dest, &output)
            .with_context(|| format!("write destination sheet {}", output.display()))?;
        result.output = Some(output);
    }
    Ok(result)
}

/// Apply every applicable rule of one source file to the destination.
fn process_file(
    path: &Path,
    rules: &[&CompiledRule],
    dest: &mut SheetGrid,
) -> Result<RedistributionReport> {
    let source = read_sheet(path)?;
    let mut report = RedistributionReport::default();
    for rule in rules {
        report.merge(redistribute(&source, dest, rule));
    }
    Ok(report)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_string()
}

/// Best-effort identity check so a destination living inside the source
/// folder is not ingested as its own source.
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
