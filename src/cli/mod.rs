//! CLI argument parsing for waygraph
//!
//! Global flags: --format, --config, --quiet, --verbose, --log-level, --log-json

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

pub use commands::Commands;
pub use output::OutputFormat;

/// Waygraph - weighted graph search and stepwise path consumption
#[derive(Parser, Debug)]
#[command(name = "waygraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Engine configuration file (defaults to ./waygraph.toml when present)
    #[arg(long, global = true, env = "WAYGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter level or directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
