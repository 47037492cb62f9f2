//! Configuration type definitions

use crate::graph::TraversalOrder;
use serde::{Deserialize, Serialize};

/// Engine configuration, usually read from `waygraph.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Graph construction and iteration defaults
    #[serde(default)]
    pub graph: GraphConfig,

    /// Cost-bounded frontier defaults
    #[serde(default)]
    pub frontier: FrontierConfig,

    /// Logging defaults (CLI flags take precedence)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Defaults applied to a freshly built [`crate::graph::Graph`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Order used when the graph itself is iterated
    #[serde(default)]
    pub traversal_order: TraversalOrder,

    /// Heuristic given to vertices auto-created by `add_edge`
    #[serde(default)]
    pub default_heuristic: f64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            traversal_order: TraversalOrder::default(),
            default_heuristic: 0.0,
        }
    }
}

/// Configuration for `affordable_vertices` queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontierConfig {
    /// Budget used when a query does not supply one
    #[serde(default = "default_frontier_max_cost")]
    pub max_cost: f64,
}

impl Default for FrontierConfig {
    fn default() -> Self {
        Self {
            max_cost: default_frontier_max_cost(),
        }
    }
}

fn default_frontier_max_cost() -> f64 {
    10.0
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter level or directive (`debug`, `waygraph_core=trace`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Emit JSON lines instead of compact text
    #[serde(default)]
    pub json: bool,
}
