//! `waygraph frontier` command - vertices affordable within a budget

use crate::cli::commands::FrontierArgs;
use crate::commands::dispatch::CommandContext;
use waygraph_core::error::Result;

/// Execute the frontier command
pub fn execute(ctx: &CommandContext, args: &FrontierArgs) -> Result<()> {
    let graph = ctx.load_graph(&args.graph)?;
    let max_cost = args.max_cost.unwrap_or(ctx.config.frontier.max_cost);
    let found = graph.affordable_vertices(&args.root, max_cost)?;

    if ctx.json() {
        let vertices: Vec<_> = found
            .iter()
            .map(|a| serde_json::json!({ "id": a.vertex.id(), "cost": a.cost }))
            .collect();
        let output = serde_json::json!({
            "root": args.root,
            "max_cost": max_cost,
            "vertices": vertices,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for a in &found {
        println!("{}\t{}", a.vertex.id(), a.cost);
    }
    if !ctx.quiet() {
        eprintln!("{} vertices within {}", found.len(), max_cost);
    }
    Ok(())
}
