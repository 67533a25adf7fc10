//! Command implementations.

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::info;

use roster_ingest::{read_document, read_sheet, roster_from_column};
use roster_model::column_index;
use roster_names::{
    InclusionPolicy, MatchPolicy, ParagraphClassifier, all_forms, debug_match, matches,
};

use crate::cli::{ClassifyArgs, FormsArgs, MatchArgs, MatchPolicyArg, PolicyArg, RedistributeArgs};
use crate::pipeline::{RunOptions, run};
use crate::summary::apply_table_style;
use crate::types::RunResult;

pub fn run_redistribute(args: &RedistributeArgs) -> Result<RunResult> {
    let options = RunOptions {
        source_dir: args.source_dir.clone(),
        dest: args.dest.clone(),
        rules: args.rules.clone(),
        output: args.output.clone(),
        dry_run: args.dry_run,
    };
    run(&options)
}

pub fn run_classify(args: &ClassifyArgs) -> Result<()> {
    let document = read_document(&args.document)
        .with_context(|| format!("read document {}", args.document.display()))?;
    let roster_grid = read_sheet(&args.roster)
        .with_context(|| format!("read roster {}", args.roster.display()))?;
    let Some(column) = column_index(&args.name_column) else {
        bail!("invalid roster column '{}'", args.name_column);
    };
    let names = roster_from_column(&roster_grid, column);
    if names.is_empty() {
        bail!(
            "roster column {} of {} holds no names",
            args.name_column,
            args.roster.display()
        );
    }
    info!(names = names.len(), "loaded roster");

    let classifier = match &args.keyword {
        Some(pattern) => ParagraphClassifier::with_keyword(pattern)
            .with_context(|| format!("compile keyword pattern '{pattern}'"))?,
        None => ParagraphClassifier::new(),
    };
    let included = classifier.classify(&document, &names, inclusion_policy(args.policy));

    if included.is_empty() {
        println!("No paragraphs matched the policy.");
        return Ok(());
    }
    let mut table = Table::new();
    table.set_header(vec!["Offset", "Keyword", "Matched names", "Paragraph"]);
    apply_table_style(&mut table);
    for paragraph in &included {
        table.add_row(vec![
            paragraph.start_offset.to_string(),
            (if paragraph.contains_keyword { "так" } else { "—" }).to_string(),
            paragraph.matched_names.join(", "),
            snippet(&paragraph.text, 60),
        ]);
    }
    println!("{table}");
    println!("{} of the document's paragraphs included.", included.len());
    Ok(())
}

pub fn run_forms(args: &FormsArgs) -> Result<()> {
    let forms = all_forms(&args.name);
    for form in &forms {
        println!("{form}");
    }
    eprintln!("{} forms.", forms.len());
    Ok(())
}

pub fn run_match(args: &MatchArgs) -> Result<()> {
    let document = read_document(&args.document)
        .with_context(|| format!("read document {}", args.document.display()))?;
    let matched = matches(&document, &args.name, match_policy(args.policy));
    println!(
        "{}: {}",
        args.name,
        if matched { "знайдено" } else { "не знайдено" }
    );

    if args.debug {
        let diagnostics = debug_match(&document, &args.name);
        let mut table = Table::new();
        table.set_header(vec!["Form", "Matched", "Ratio"]);
        apply_table_style(&mut table);
        let mut shown = 0usize;
        for diagnostic in diagnostics
            .iter()
            .filter(|diagnostic| !diagnostic.matched_words.is_empty())
        {
            table.add_row(vec![
                diagnostic.form.clone(),
                format!(
                    "{}/{}",
                    diagnostic.matched_words.len(),
                    diagnostic.form_words.len()
                ),
                format!("{:.2}", diagnostic.ratio),
            ]);
            shown += 1;
        }
        if shown == 0 {
            println!("None of the {} generated forms matched any word.", diagnostics.len());
        } else {
            println!("{table}");
            println!(
                "{shown} of {} generated forms matched at least one word.",
                diagnostics.len()
            );
        }
    }
    Ok(())
}

fn inclusion_policy(arg: PolicyArg) -> InclusionPolicy {
    match arg {
        PolicyArg::KeywordOnly => InclusionPolicy::KeywordOnly,
        PolicyArg::NamesOnly => InclusionPolicy::NamesOnly,
        PolicyArg::KeywordAndNames => InclusionPolicy::KeywordAndNames,
        PolicyArg::KeywordOrNames => InclusionPolicy::KeywordOrNames,
    }
}

fn match_policy(arg: MatchPolicyArg) -> MatchPolicy {
    match arg {
        MatchPolicyArg::Strict => MatchPolicy::Strict,
        MatchPolicyArg::WholeWord => MatchPolicy::WholeWord,
        MatchPolicyArg::Partial => MatchPolicy::Partial,
    }
}

/// First `max_chars` characters of the text, single-line.
fn snippet(text: &str, max_chars: usize) -> String {
    let flat = text.replace('\n', " ");
    let mut result: String = flat.chars().take(max_chars).collect();
    if flat.chars().count() > max_chars {
        result.push('…');
    }
    result
}
