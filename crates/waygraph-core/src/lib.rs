//! Waygraph Core Library
//!
//! Generic weighted-graph engine: vertex and edge storage, BFS/DFS
//! traversal, a cost-bounded frontier query, uniform-cost search, and a
//! [`Path`](graph::Path) that can be consumed a step or a budget at a time.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod persistence;

pub use error::{ErrorKind, ExitCode, GraphError, Result};
pub use graph::{Edge, Graph, Path, TraversalOrder, Vertex};
