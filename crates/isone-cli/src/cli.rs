use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Fetch ISO New England market data as tables.
#[derive(Debug, Parser)]
#[command(name = "isone", version, about = "Fetch ISO New England market data as tables")]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Load API credentials from this dotenv file instead of the process
    /// environment.
    #[arg(long, global = true, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the daily generation fuel mix for one day.
    FuelMix(FuelMixArgs),
}

#[derive(Debug, Args)]
pub struct FuelMixArgs {
    /// Day to fetch, in YYYYMMDD form.
    pub day: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}
