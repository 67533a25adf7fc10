//! CLI argument definitions for rosterctl.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rosterctl",
    version,
    about = "Redistribute subunit rosters and match personnel names",
    long_about = "Redistribute roster rows between spreadsheets keyed by subunit,\n\
                  and correlate nominative rosters against order documents using\n\
                  Ukrainian name declension."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Redistribute subunit rows from a folder of source sheets into a
    /// destination sheet.
    Redistribute(RedistributeArgs),

    /// Classify order-document paragraphs against a roster.
    Classify(ClassifyArgs),

    /// Print every declined surface form of a full name.
    Forms(FormsArgs),

    /// Diagnose whether and how a name matches a document.
    Match(MatchArgs),
}

#[derive(Parser)]
pub struct RedistributeArgs {
    /// Folder containing the source sheets (CSV).
    #[arg(value_name = "SOURCE_FOLDER")]
    pub source_dir: PathBuf,

    /// Destination sheet to redistribute into.
    #[arg(long = "dest", value_name = "CSV")]
    pub dest: PathBuf,

    /// Rule-set configuration file (JSON).
    #[arg(long = "rules", value_name = "JSON")]
    pub rules: PathBuf,

    /// Write the result here instead of overwriting the destination.
    #[arg(long = "output", value_name = "CSV")]
    pub output: Option<PathBuf>,

    /// Process and report without writing the destination.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct ClassifyArgs {
    /// Order document (plain text).
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    /// Roster sheet (CSV) listing names in nominative case.
    #[arg(long = "roster", value_name = "CSV")]
    pub roster: PathBuf,

    /// Column of the roster sheet holding the names.
    #[arg(long = "name-column", value_name = "LETTER", default_value = "A")]
    pub name_column: String,

    /// How keyword and name signals combine.
    #[arg(long = "policy", value_enum, default_value = "keyword-and-names")]
    pub policy: PolicyArg,

    /// Custom trigger-keyword regex (defaults to the order trigger).
    #[arg(long = "keyword", value_name = "REGEX")]
    pub keyword: Option<String>,
}

#[derive(Parser)]
pub struct FormsArgs {
    /// Full name, nominative, surname first.
    #[arg(value_name = "NAME")]
    pub name: String,
}

#[derive(Parser)]
pub struct MatchArgs {
    /// Document (plain text) to search.
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    /// Full name to look for, nominative, surname first.
    #[arg(long = "name", value_name = "NAME")]
    pub name: String,

    /// Matching policy.
    #[arg(long = "policy", value_enum, default_value = "whole-word")]
    pub policy: MatchPolicyArg,

    /// Show per-form match diagnostics.
    #[arg(long = "debug")]
    pub debug: bool,
}

/// Paragraph inclusion policy choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum PolicyArg {
    KeywordOnly,
    NamesOnly,
    KeywordAndNames,
    KeywordOrNames,
}

/// Name matching policy choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum MatchPolicyArg {
    Strict,
    WholeWord,
    Partial,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
