//! Command trait and context for dispatching commands

use std::path::Path;
use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use waygraph_core::config::EngineConfig;
use waygraph_core::error::Result;
use waygraph_core::persistence;
use waygraph_core::Graph;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: EngineConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: EngineConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    pub fn load_graph(&self, path: &Path) -> Result<Graph<String>> {
        let graph = persistence::load_graph(path)?;
        tracing::debug!(elapsed = ?self.start.elapsed(), "load_graph");
        Ok(graph)
    }

    pub fn json(&self) -> bool {
        self.cli.format == OutputFormat::Json
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("waygraph {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Weighted graph search and stepwise path consumption.");
        println!();
        println!("Run `waygraph --help` for usage information.");
        Ok(())
    }
}
