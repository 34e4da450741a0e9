use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

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

/// Report output format
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum FormatChoice {
    /// Human-readable text
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "share-guard")]
#[command(
    author,
    version,
    about = "Audit shared directory trees for file-level compliance problems"
)]
#[command(long_about = "Walks a directory tree, runs every registered compliance check \
    against every file, and reports the problems it finds without modifying anything.\n\n\
    Exit codes:\n  \
    0 - Scan completed, no problems found\n  \
    1 - Scan completed, problems found\n  \
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

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a directory tree and report compliance problems
    Check(CheckArgs),

    /// List every problem code the scanner can report
    Codes,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Follow symbolic links into their targets
    #[arg(short = 'l', long)]
    pub follow_symlinks: bool,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub format: FormatChoice,

    /// Ignore-rule file (defaults to ~/.shareguardignore)
    #[arg(long)]
    pub ignore_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
