use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Calendar partition alignment analysis.
#[derive(Parser)]
#[command(
    name = "calpart",
    version,
    about = "Measures how fixed-day partitions align with calendar months"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Analyse every configured day increment and write the report.
    Analyze(AnalyzeArgs),
}

/// Report output format selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Human-readable text blocks.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Arguments for the `analyze` subcommand.
#[derive(clap::Args, Default)]
pub struct AnalyzeArgs {
    /// Path to TOML configuration file (built-in defaults when omitted).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override report output path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the first partition point (YYYY-MM-DD).
    #[arg(long)]
    pub start_date: Option<String>,

    /// Override the day increments, comma separated.
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub increments: Option<Vec<i64>>,

    /// Override the number of years to evaluate.
    #[arg(long)]
    pub years: Option<u32>,

    /// Include per-month detail after each summary.
    #[arg(long)]
    pub detailed: bool,

    /// Override the report format.
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
}
