//! `waygraph search` command - cheapest route between two vertices

use crate::cli::commands::SearchArgs;
use crate::commands::dispatch::CommandContext;
use waygraph_core::error::Result;

/// Execute the search command
pub fn execute(ctx: &CommandContext, args: &SearchArgs) -> Result<()> {
    let graph = ctx.load_graph(&args.graph)?;
    let (path, cost) = graph.search(&args.from, &args.to)?;
    tracing::debug!(elapsed = ?ctx.start.elapsed(), "search");

    let route: Vec<&str> = path.vertices().map(|v| v.id().as_str()).collect();

    if ctx.json() {
        let edges: Vec<_> = path
            .edges()
            .filter_map(|edge| {
                let (from, to) = edge.endpoints()?;
                Some(serde_json::json!({
                    "from": from.id(),
                    "to": to.id(),
                    "weight": edge.weight,
                    "cost": edge.traversal_cost(),
                }))
            })
            .collect();
        let output = serde_json::json!({
            "from": args.from,
            "to": args.to,
            "cost": cost,
            "length": path.length(),
            "max_single_cost": path.max_single_cost(),
            "route": route,
            "edges": edges,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", route.join(" -> "));
    if !ctx.quiet() {
        println!("cost: {} ({} steps)", cost, path.length());
    }
    Ok(())
}
