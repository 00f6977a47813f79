//! CLI argument definitions for `brood`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "brood",
    version,
    about = "Daphnia brood coding - normalize IDs, suggest child IDs, decide discards",
    long_about = "Normalize Daphnia specimen IDs, suggest the next child ID for a mother,\n\
                  and decide whether her line should be discarded.\n\n\
                  Lineage data is read from a CSV export of the broods table."
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

    /// Log output format.
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

    /// Configuration file (default: ./brood.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the canonical form of one or more IDs.
    Normalize(NormalizeArgs),

    /// Suggest the next child ID for a mother and decide on discard.
    Code(CodeArgs),

    /// Show alive counts per set against their thresholds.
    Population(PopulationArgs),
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// IDs as typed, e.g. `E13`, `E.1.3_0801`.
    #[arg(value_name = "ID", required = true)]
    pub ids: Vec<String>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct CodeArgs {
    /// CSV export of the broods table.
    #[arg(long = "data", value_name = "CSV")]
    pub data: PathBuf,

    /// Mother ID, core (`E.1`) or full (`E.1_0804`).
    #[arg(value_name = "MOTHER")]
    pub mother: String,

    /// Date suffix for the child as `MMDD` or `_MMDD` (default: today).
    #[arg(long = "date", value_name = "MMDD")]
    pub date: Option<String>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct PopulationArgs {
    /// CSV export of the broods table.
    #[arg(long = "data", value_name = "CSV")]
    pub data: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Text,
    Json,
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
