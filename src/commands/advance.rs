//! `waygraph advance` command - step along a searched route
//!
//! Searches `from -> to`, then moves from `--at` (default: the start) by a
//! step count or a cost budget, the way a consumer drives a route one tick
//! at a time.

use crate::cli::commands::AdvanceArgs;
use crate::commands::dispatch::CommandContext;
use waygraph_core::error::Result;

/// Execute the advance command
pub fn execute(ctx: &CommandContext, args: &AdvanceArgs) -> Result<()> {
    let graph = ctx.load_graph(&args.graph)?;
    let (path, _) = graph.search(&args.from, &args.to)?;
    let at = args.at.as_ref().unwrap_or(&args.from);

    let (reached, cost_used, steps_taken) = match args.budget {
        Some(budget) => {
            let (reached, used, taken) = path.advance_by_cost(at, budget)?;
            (reached, Some(used), taken)
        }
        None => {
            let (reached, taken) = path.advance_steps(at, args.steps.unwrap_or(0))?;
            (reached, None, taken)
        }
    };

    let remaining: Vec<&str> = path
        .vertices_from(reached.id())?
        .skip(1)
        .map(|v| v.id().as_str())
        .collect();
    let at_end = remaining.is_empty();

    if ctx.json() {
        let output = serde_json::json!({
            "from": at,
            "reached": reached.id(),
            "steps_taken": steps_taken,
            "cost_used": cost_used,
            "at_end": at_end,
            "remaining": remaining,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", reached.id());
    if !ctx.quiet() {
        println!("steps: {}", steps_taken);
        if let Some(used) = cost_used {
            println!("cost: {}", used);
        }
        if at_end {
            println!("(end of route)");
        } else {
            println!("remaining: {}", remaining.join(" -> "));
        }
    }
    Ok(())
}
