//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{DurationArgs, IrrArgs, ScanArgs, YtmArgs};

/// yieldsolve - IRR, yield-to-maturity and duration solvers
#[derive(Parser)]
#[command(name = "yieldsolve")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Settings file (.toml or .json)
    #[arg(short, long, global = true, env = "YIELDSOLVE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Internal rate of return of a cash-flow schedule
    Irr(IrrArgs),

    /// Sample NPV over a rate grid and report sign changes
    Scan(ScanArgs),

    /// Yield to maturity for every bond in a CSV file
    Ytm(YtmArgs),

    /// Duration profile for every bond in a CSV file
    Duration(DurationArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the values)
    Minimal,
}
