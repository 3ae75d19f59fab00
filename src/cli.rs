//! Command-line interface definition.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::case::Case;

/// Top-level CLI entry point for recase.
#[derive(Parser, Debug)]
#[command(
    name = "recase",
    about = "Convert strings to camelCase, dot.case or kebab-case",
    version
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared by every subcommand.
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone)]
pub struct GlobalOpts {
    /// Settings file (default: $XDG_CONFIG_HOME/recase/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Convert batch entries on a single thread (parallel is enabled by default)
    #[arg(long = "no-parallel", global = true, action = clap::ArgAction::SetFalse)]
    pub parallel: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert arguments, or stdin lines, to a case
    Convert(ConvertOpts),
    /// Run the conversions listed in a TOML or JSON file
    Batch(BatchOpts),
    /// Show example conversions for every case
    Demo,
    /// Print version information
    Version,
}

/// Options for the `convert` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct ConvertOpts {
    /// Target case (default: `default_case` from settings)
    #[arg(short, long, value_enum)]
    pub to: Option<Case>,

    /// Strings to convert; reads stdin line by line when omitted
    pub inputs: Vec<String>,
}

/// Options for the `batch` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct BatchOpts {
    /// Batch file (`.json` for JSON, TOML otherwise)
    pub file: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}
