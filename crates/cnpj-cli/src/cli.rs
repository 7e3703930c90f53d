//! CLI argument definitions for the CNPJ contact search.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "cnpj-search",
    version,
    about = "Busca contatos por CNPJ em planilhas heterogêneas",
    long_about = "Search contact records by company tax ID (CNPJ) across a folder of\n\
                  spreadsheets with inconsistent headers.\n\n\
                  Columns are matched by alias (Portuguese variants, accents and\n\
                  separators ignored) onto one canonical contact table, which is then\n\
                  filtered by the normalized key."
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

    /// Allow contact values (names, phones, e-mails) in log output.
    ///
    /// Contact records are personal data; without this flag, row-level
    /// values are replaced by a redaction token in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search the unified contact table by (partial) CNPJ.
    Search(SearchArgs),

    /// Export the whole unified contact table as CSV.
    Export(ExportArgs),

    /// List the canonical columns and their recognized header aliases.
    Columns,
}

#[derive(Parser)]
pub struct SearchArgs {
    /// Folder containing the source spreadsheets (.csv, .xlsx, .xls, .zip).
    #[arg(value_name = "SOURCE_FOLDER")]
    pub source_folder: PathBuf,

    /// Full or partial CNPJ; punctuation is ignored.
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Additionally write the matches to a CSV file (UTF-8 with BOM).
    #[arg(long = "export", value_name = "PATH")]
    pub export: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Folder containing the source spreadsheets (.csv, .xlsx, .xls, .zip).
    #[arg(value_name = "SOURCE_FOLDER")]
    pub source_folder: PathBuf,

    /// Output CSV path (UTF-8 with BOM).
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,
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
