use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::checker::Importance;
use crate::output::ColorMode;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "nwb-inspect")]
#[command(author, version, about = "Inspect NWB files against best-practice checks")]
#[command(long_about = "Runs a registry of best-practice checks over NWB containers and \
    reports findings grouped by importance.\n\n\
    Exit codes:\n  \
    0 - Inspection completed (whatever the findings)\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect a file or every NWB file in a directory
    Inspect(InspectArgs),

    /// List registered checks with their effective importance
    Checks(ChecksArgs),

    /// Write a sample importance override file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// File or directory to inspect
    pub path: PathBuf,

    /// Check modules to load before inspecting (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub modules: Vec<String>,

    /// Checks to skip (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub ignore: Option<Vec<String>>,

    /// Run only these checks (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub select: Option<Vec<String>>,

    /// Minimum importance to report
    #[arg(short, long, default_value = "BEST_PRACTICE_SUGGESTION")]
    pub threshold: Importance,

    /// Importance override file (YAML, TOML or JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Also write the results as JSON to this path
    #[arg(short, long)]
    pub json_file_path: Option<PathBuf>,

    /// Also write the text report to this path
    #[arg(long)]
    pub report_file_path: Option<PathBuf>,

    /// Replace existing report files
    #[arg(short, long)]
    pub overwrite: bool,

    /// Disable colored output (same as --color never)
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Parser, Debug)]
pub struct ChecksArgs {
    /// Check modules to load before listing (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub modules: Vec<String>,

    /// Importance override file to apply before listing
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the override file
    #[arg(short, long, default_value = "nwb-inspect.yaml")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
