//! CLI argument definitions for the E2B(R2) transpiler.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "e2b-transpiler",
    version,
    about = "E2B(R2) ICSR Transpiler - Convert adverse-event XML to tabular records",
    long_about = "Convert ICH E2B(R2) Individual Case Safety Report XML into three\n\
                  normalized tables (cases, drugs, reactions) ready for relational\n\
                  loading, written as CSV and/or JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

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
    /// Parse an E2B(R2) XML file and write the case/drug/reaction tables.
    Parse(ParseArgs),

    /// List the controlled-vocabulary code translation tables.
    Codes,
}

#[derive(Parser)]
pub struct ParseArgs {
    /// Path to the E2B(R2) XML file.
    #[arg(value_name = "XML_FILE")]
    pub xml_file: PathBuf,

    /// Output directory for generated tables (default: <XML_FILE stem>_output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Table format to generate.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: TableFormatArg,

    /// Parse and summarize without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableFormatArg {
    Csv,
    Json,
    Both,
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
