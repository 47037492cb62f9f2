//! Command dispatch logic for waygraph

use std::path::Path;
use std::time::Instant;

use tracing::debug;

use crate::cli::Cli;
use waygraph_core::config::{EngineConfig, CONFIG_FILE_NAME};
use waygraph_core::error::Result;

mod command;
mod commands;

pub use command::{Command, CommandContext};

/// Resolve the engine configuration: an explicit `--config` must exist,
/// the working-directory default is optional
pub fn load_config(cli: &Cli) -> Result<EngineConfig> {
    match &cli.config {
        Some(path) => EngineConfig::load(path),
        None => EngineConfig::load_or_default(Path::new(CONFIG_FILE_NAME)),
    }
}

pub fn run(cli: &Cli, config: EngineConfig, start: Instant) -> Result<()> {
    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => command::NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
