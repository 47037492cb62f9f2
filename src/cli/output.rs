//! Output format selection

use clap::ValueEnum;

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text for people
    #[default]
    Human,
    /// Pretty-printed JSON
    Json,
}
