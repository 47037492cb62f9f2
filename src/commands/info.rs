//! `waygraph info` command - summarize a graph file

use crate::cli::commands::InfoArgs;
use crate::commands::dispatch::CommandContext;
use waygraph_core::error::Result;

/// Execute the info command
pub fn execute(ctx: &CommandContext, args: &InfoArgs) -> Result<()> {
    let graph = ctx.load_graph(&args.graph)?;
    let root = graph.root().map(|v| v.id().as_str());
    let sinks = graph.vertices().filter(|v| v.out_degree() == 0).count();

    if ctx.json() {
        let output = serde_json::json!({
            "path": args.graph.display().to_string(),
            "vertices": graph.len(),
            "edges": graph.edge_count(),
            "sinks": sinks,
            "root": root,
            "traversal_order": graph.traversal_order(),
            "default_heuristic": graph.default_heuristic(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("vertices: {}", graph.len());
    println!("edges: {}", graph.edge_count());
    if !ctx.quiet() {
        println!("sinks: {}", sinks);
        println!("root: {}", root.unwrap_or("-"));
        println!("order: {}", graph.traversal_order());
    }
    Ok(())
}
