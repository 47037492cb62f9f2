//! Weighted directed graph engine
//!
//! Provides the graph container and the algorithms that run over it:
//! - BFS/DFS traversal, single component or whole graph
//! - cost-bounded frontier expansion (`affordable_vertices`)
//! - uniform-cost shortest-path search producing a stepwise [`Path`]

pub mod edge;
pub mod frontier;
pub mod path;
pub mod queue;
pub mod search;
pub mod session;
pub mod traversal;
pub mod vertex;

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::{bail_invalid, bail_missing_vertex};
use crate::config::GraphConfig;
use crate::error::{GraphError, Result};

pub use edge::Edge;
pub use frontier::Affordable;
pub use path::{Path, PathEdges, PathVertices};
pub use queue::UpdatablePriorityQueue;
pub use search::ShortestPathTree;
pub use session::{SessionId, TraversalSession};
pub use traversal::{EdgeTraversal, Traversal, TraversalOrder};
pub use vertex::Vertex;

/// Owns the vertex set of a weighted directed graph.
///
/// Every id named in an adjacency map is also a vertex key; `add_edge`
/// creates missing endpoints and `trim_vertices` strips edges into the
/// vertices it removes.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    pub(crate) vertices: HashMap<T, Vertex<T>>,
    root: Option<T>,
    traversal_order: TraversalOrder,
    default_heuristic: f64,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self {
            vertices: HashMap::new(),
            root: None,
            traversal_order: TraversalOrder::default(),
            default_heuristic: 0.0,
        }
    }
}

impl<T: Eq + Hash + Clone + Debug> Graph<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &GraphConfig) -> Self {
        Self {
            traversal_order: config.traversal_order,
            default_heuristic: config.default_heuristic,
            ..Self::default()
        }
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Insert a vertex, replacing any vertex with the same id.
    ///
    /// The replacement's adjacency is taken as given; targets it names that
    /// are not yet vertices are created so no edge dangles.
    pub fn add_vertex(&mut self, vertex: Vertex<T>) -> Result<()> {
        check_heuristic(vertex.id(), vertex.heuristic())?;
        let id = vertex.id().clone();
        let missing: Vec<T> = vertex
            .neighbors()
            .filter(|n| **n != id && !self.vertices.contains_key(*n))
            .cloned()
            .collect();
        for n in missing {
            let h = self.default_heuristic;
            self.vertices.insert(n.clone(), Vertex::with_heuristic(n, h));
        }
        if self.root.is_none() {
            self.root = Some(id.clone());
        }
        self.vertices.insert(id, vertex);
        Ok(())
    }

    /// Add (or re-weight) the directed edge `from -> to`.
    ///
    /// Missing endpoints are created with the graph's default heuristic.
    pub fn add_edge(&mut self, from: T, to: T, weight: f64) -> Result<()> {
        let h = self.default_heuristic;
        self.add_edge_with_heuristics(from, to, weight, h, h)
    }

    /// Like [`Graph::add_edge`], but endpoints created by this call get the
    /// supplied heuristics. Existing vertices keep theirs. Both heuristics
    /// must be finite and non-negative.
    pub fn add_edge_with_heuristics(
        &mut self,
        from: T,
        to: T,
        weight: f64,
        from_heuristic: f64,
        to_heuristic: f64,
    ) -> Result<()> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight {
                from: format!("{:?}", from),
                to: format!("{:?}", to),
                weight,
            });
        }
        check_heuristic(&from, from_heuristic)?;
        check_heuristic(&to, to_heuristic)?;
        self.ensure_vertex(from.clone(), from_heuristic);
        self.ensure_vertex(to.clone(), to_heuristic);
        if let Some(v) = self.vertices.get_mut(&from) {
            v.set_edge(to, weight);
        }
        Ok(())
    }

    /// Add `a -> b` and `b -> a` with the same weight
    pub fn add_undirected_edge(&mut self, a: T, b: T, weight: f64) -> Result<()> {
        self.add_edge(a.clone(), b.clone(), weight)?;
        self.add_edge(b, a, weight)
    }

    /// Remove the directed edge `from -> to`; returns its weight
    pub fn remove_edge(&mut self, from: &T, to: &T) -> Option<f64> {
        self.vertices.get_mut(from)?.remove_edge(to)
    }

    pub fn set_heuristic(&mut self, id: &T, heuristic: f64) -> Result<()> {
        check_heuristic(id, heuristic)?;
        match self.vertices.get_mut(id) {
            Some(v) => {
                v.set_heuristic(heuristic);
                Ok(())
            }
            None => bail_missing_vertex!(id),
        }
    }

    /// Remove every vertex that has no outgoing edges, along with the edges
    /// pointing into them. Returns how many vertices were removed.
    ///
    /// Only vertices that are sinks when the call starts are removed; their
    /// predecessors may become sinks in turn and are left for the next call.
    #[tracing::instrument(skip(self), fields(vertices = self.vertices.len()))]
    pub fn trim_vertices(&mut self) -> usize {
        let sinks: HashSet<T> = self
            .vertices
            .values()
            .filter(|v| v.out_degree() == 0)
            .map(|v| v.id().clone())
            .collect();
        if sinks.is_empty() {
            return 0;
        }

        for id in &sinks {
            self.vertices.remove(id);
        }
        for vertex in self.vertices.values_mut() {
            vertex
                .adjacent_mut()
                .retain(|to, _| !sinks.contains(to));
        }
        if self
            .root
            .as_ref()
            .is_some_and(|r| !self.vertices.contains_key(r))
        {
            self.root = self.vertices.keys().next().cloned();
        }

        tracing::debug!(removed = sinks.len(), remaining = self.vertices.len(), "trimmed");
        sinks.len()
    }

    // ------------------------------------------------------------------
    // Lookup
    // ------------------------------------------------------------------

    pub fn has_vertex(&self, id: &T) -> bool {
        self.vertices.contains_key(id)
    }

    pub fn has_edge(&self, from: &T, to: &T) -> bool {
        self.vertices
            .get(from)
            .is_some_and(|v| v.adjacent().contains_key(to))
    }

    /// The edge `from -> to`, or [`Edge::none`] if either end or the edge
    /// itself is missing.
    pub fn get_edge(&self, from: &T, to: &T) -> Edge<'_, T> {
        match (self.vertices.get(from), self.vertices.get(to)) {
            (Some(f), Some(t)) => match f.weight_to(to) {
                Some(w) => Edge::new(f, t, w),
                None => Edge::none(),
            },
            _ => Edge::none(),
        }
    }

    pub fn try_get_vertex(&self, id: &T) -> Option<&Vertex<T>> {
        self.vertices.get(id)
    }

    /// Vertex lookup for operations that require the id to exist
    pub(crate) fn require_vertex(&self, id: &T) -> Result<&Vertex<T>> {
        self.vertices
            .get(id)
            .ok_or_else(|| GraphError::vertex_not_found(id))
    }

    // ------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(Vertex::out_degree).sum()
    }

    /// All vertices, in no particular order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<T>> {
        self.vertices.values()
    }

    pub fn root(&self) -> Option<&Vertex<T>> {
        self.root.as_ref().and_then(|r| self.vertices.get(r))
    }

    pub fn set_root(&mut self, id: &T) -> Result<()> {
        if !self.vertices.contains_key(id) {
            bail_missing_vertex!(id);
        }
        self.root = Some(id.clone());
        Ok(())
    }

    pub fn traversal_order(&self) -> TraversalOrder {
        self.traversal_order
    }

    pub fn set_traversal_order(&mut self, order: TraversalOrder) {
        self.traversal_order = order;
    }

    pub fn default_heuristic(&self) -> f64 {
        self.default_heuristic
    }

    pub fn set_default_heuristic(&mut self, heuristic: f64) -> Result<()> {
        if !heuristic.is_finite() || heuristic < 0.0 {
            bail_invalid!("default heuristic", heuristic);
        }
        self.default_heuristic = heuristic;
        Ok(())
    }

    fn ensure_vertex(&mut self, id: T, heuristic: f64) {
        if !self.vertices.contains_key(&id) {
            if self.root.is_none() {
                self.root = Some(id.clone());
            }
            self.vertices
                .insert(id.clone(), Vertex::with_heuristic(id, heuristic));
        }
    }
}

/// Heuristics are arrival costs; search needs them finite and non-negative
fn check_heuristic<T: Debug>(id: &T, heuristic: f64) -> Result<()> {
    if !heuristic.is_finite() || heuristic < 0.0 {
        bail_invalid!(&format!("heuristic for {:?}", id), heuristic);
    }
    Ok(())
}
