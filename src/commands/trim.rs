//! `waygraph trim` command - drop vertices with no outgoing edges

use crate::cli::commands::TrimArgs;
use crate::commands::dispatch::CommandContext;
use waygraph_core::error::Result;
use waygraph_core::persistence;

/// Execute the trim command
pub fn execute(ctx: &CommandContext, args: &TrimArgs) -> Result<()> {
    let mut graph = ctx.load_graph(&args.graph)?;
    let removed = graph.trim_vertices();

    let output_path = args.output.as_ref().unwrap_or(&args.graph);
    persistence::save_graph(output_path, &graph)?;

    if ctx.json() {
        let output = serde_json::json!({
            "removed": removed,
            "remaining": graph.len(),
            "output": output_path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if !ctx.quiet() {
        println!(
            "removed {} vertices ({} remaining) -> {}",
            removed,
            graph.len(),
            output_path.display()
        );
    }
    Ok(())
}
