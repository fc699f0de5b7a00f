//! CLI argument definitions for the drawing register checker.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "drc",
    version,
    about = "Drawing register checker - compare a drawing list against delivered files",
    long_about = "Compare a drawing register (Excel or CSV) against a folder of delivered\n\
                  files. The register sheet, header row, and file name column are detected\n\
                  automatically and can each be overridden."
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
    /// Compare a register against a delivered folder and print the result.
    Check(CheckArgs),

    /// List the sheets of a register workbook with their register-likeness scores.
    Sheets(SheetsArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the register workbook (.xlsx, .xlsm, .xls, .ods) or CSV file.
    #[arg(value_name = "REGISTER")]
    pub register: PathBuf,

    /// Folder containing the delivered files (scanned recursively).
    #[arg(value_name = "FOLDER")]
    pub folder: PathBuf,

    /// Read this sheet instead of autodetecting the register sheet.
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheet: Option<String>,

    /// Use this header row (1-based) instead of autodetecting it.
    #[arg(long = "header-row", value_name = "ROW")]
    pub header_row: Option<usize>,

    /// Use this file name column (1-based) instead of autodetecting it.
    #[arg(long = "column", value_name = "COL")]
    pub column: Option<usize>,

    /// Write the full result as JSON to this path.
    #[arg(long = "json", value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Write the result rows as CSV to this path.
    #[arg(long = "csv", value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Exit with status 0 even when register entries are missing from the folder.
    #[arg(long = "no-fail-on-missing")]
    pub no_fail_on_missing: bool,

    /// Disable the fuzzy matching fallback; only exact normalized matches count.
    #[arg(long = "no-fuzzy")]
    pub no_fuzzy: bool,

    /// Similarity threshold for the fuzzy fallback (0.0 to 1.0).
    #[arg(long = "fuzzy-threshold", value_name = "T")]
    pub fuzzy_threshold: Option<f64>,

    /// Keep revision suffixes (Rev A, _rev01) when matching names.
    ///
    /// By default revision suffixes are stripped so that a delivered
    /// `ABC-001_RevB.pdf` satisfies a register entry `ABC-001 Rev A`.
    #[arg(long = "keep-revision")]
    pub keep_revision: bool,
}

#[derive(Parser)]
pub struct SheetsArgs {
    /// Path to the register workbook or CSV file.
    #[arg(value_name = "REGISTER")]
    pub register: PathBuf,
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
