//! Command implementations for all waygraph commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{advance, frontier, info, search, traverse, trim};
use waygraph_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Info(args) => info::execute(ctx, args),
            Commands::Search(args) => search::execute(ctx, args),
            Commands::Advance(args) => advance::execute(ctx, args),
            Commands::Traverse(args) => traverse::execute(ctx, args),
            Commands::Frontier(args) => frontier::execute(ctx, args),
            Commands::Trim(args) => trim::execute(ctx, args),
        }
    }
}
