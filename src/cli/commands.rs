//! Subcommands and their arguments

use std::path::PathBuf;

use clap::{ArgGroup, Args, Subcommand};

use waygraph_core::TraversalOrder;

/// Top-level waygraph commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a graph file
    Info(InfoArgs),

    /// Find the cheapest route between two vertices
    Search(SearchArgs),

    /// Search, then advance along the route by steps or by cost budget
    Advance(AdvanceArgs),

    /// Walk the graph breadth-first or depth-first
    Traverse(TraverseArgs),

    /// List vertices affordable from a root within a cost budget
    Frontier(FrontierArgs),

    /// Remove vertices with no outgoing edges
    Trim(TrimArgs),
}

/// Arguments for the info command.
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Graph file (JSON)
    pub graph: PathBuf,
}

/// Arguments for the search command.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Graph file (JSON)
    pub graph: PathBuf,

    /// Start vertex
    pub from: String,

    /// End vertex
    pub to: String,
}

/// Arguments for the advance command.
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("mode").required(true).args(["steps", "budget"])))]
pub struct AdvanceArgs {
    /// Graph file (JSON)
    pub graph: PathBuf,

    /// Start vertex of the route
    pub from: String,

    /// End vertex of the route
    pub to: String,

    /// Current position on the route (defaults to the start)
    #[arg(long)]
    pub at: Option<String>,

    /// Advance at most this many steps
    #[arg(long)]
    pub steps: Option<usize>,

    /// Advance while vertex costs fit in this budget
    #[arg(long, allow_negative_numbers = true)]
    pub budget: Option<f64>,
}

/// Arguments for the traverse command.
#[derive(Args, Debug)]
pub struct TraverseArgs {
    /// Graph file (JSON)
    pub graph: PathBuf,

    /// Start vertex (defaults to the graph root)
    #[arg(long)]
    pub start: Option<String>,

    /// breadth-first (bfs) or depth-first (dfs); defaults to the graph's order
    #[arg(long)]
    pub order: Option<TraversalOrder>,

    /// Continue into unreached components
    #[arg(long)]
    pub all: bool,

    /// Print the edges followed instead of the vertices
    #[arg(long)]
    pub edges: bool,
}

/// Arguments for the frontier command.
#[derive(Args, Debug)]
pub struct FrontierArgs {
    /// Graph file (JSON)
    pub graph: PathBuf,

    /// Vertex to expand from
    pub root: String,

    /// Cost budget (defaults to frontier.max_cost from config)
    #[arg(long, allow_negative_numbers = true)]
    pub max_cost: Option<f64>,
}

/// Arguments for the trim command.
#[derive(Args, Debug)]
pub struct TrimArgs {
    /// Graph file (JSON)
    pub graph: PathBuf,

    /// Write the trimmed graph here instead of overwriting the input
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}
