//! `waygraph traverse` command - breadth-first or depth-first walk

use crate::cli::commands::TraverseArgs;
use crate::commands::dispatch::CommandContext;
use waygraph_core::error::Result;

/// Execute the traverse command
pub fn execute(ctx: &CommandContext, args: &TraverseArgs) -> Result<()> {
    let graph = ctx.load_graph(&args.graph)?;
    let order = args.order.unwrap_or_else(|| graph.traversal_order());

    let start = match (&args.start, graph.root()) {
        (Some(start), _) => Some(start.clone()),
        (None, Some(root)) => Some(root.id().clone()),
        (None, None) => None,
    };

    let mut vertices: Vec<String> = Vec::new();
    let mut edges = Vec::new();
    if let Some(start) = &start {
        if args.edges {
            for edge in graph.traverse_edges(start, order, args.all)? {
                if let Some((from, to)) = edge.endpoints() {
                    edges.push((from.id().clone(), to.id().clone(), edge.weight));
                }
            }
        } else {
            vertices = graph
                .traverse(start, order, args.all)?
                .map(|v| v.id().clone())
                .collect();
        }
    }

    if ctx.json() {
        let output = if args.edges {
            let edges: Vec<_> = edges
                .iter()
                .map(|(from, to, weight)| {
                    serde_json::json!({ "from": from, "to": to, "weight": weight })
                })
                .collect();
            serde_json::json!({ "start": start, "order": order, "edges": edges })
        } else {
            serde_json::json!({ "start": start, "order": order, "vertices": vertices })
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if args.edges {
        for (from, to, weight) in &edges {
            println!("{} -> {} ({})", from, to, weight);
        }
    } else {
        for id in &vertices {
            println!("{}", id);
        }
    }
    Ok(())
}
