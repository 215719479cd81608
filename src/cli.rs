use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::formatting::{parse_color_mode, ColorMode};
use crate::io::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "tpepmap")]
#[command(about = "Totient and divisor-sum analyzer for the Totient-Parity Exclusion Principle", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (can be repeated: -v, -vv)
    /// -v: Show info messages
    /// -vv: Show debug messages, including computed factorizations
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze one or more positive integers
    Analyze {
        /// Integers to analyze
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<i64>,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Run the showcase analysis (8128, 945, 15015 unless configured)
    Demo {
        #[command(flatten)]
        report: ReportArgs,
    },

    /// Initialize a .tpep.toml configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Output and classification flags shared by `analyze` and `demo`.
#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    /// Output format (defaults to the configured format, then terminal)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Decimal places for ratios
    #[arg(long)]
    pub precision: Option<usize>,

    /// Relative tolerance of the stability check
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Configuration file (skips discovery of .tpep.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub plain: bool,

    /// When to color terminal output (auto, always, never)
    #[arg(long, value_parser = parse_color_mode)]
    pub color: Option<ColorMode>,
}
