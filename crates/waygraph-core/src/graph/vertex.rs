use std::collections::HashMap;
use std::hash::Hash;

/// A graph node: identity, outgoing weighted edges and an intrinsic
/// traversal cost.
///
/// The `heuristic` is charged every time a route arrives at (or passes
/// through) this vertex, on top of the weight of the edge used to get here.
/// It is not a goal-distance estimate.
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    id: T,
    adjacent: HashMap<T, f64>,
    heuristic: f64,
}

impl<T> Vertex<T> {
    pub fn new(id: T) -> Self {
        Self::with_heuristic(id, 0.0)
    }

    pub fn with_heuristic(id: T, heuristic: f64) -> Self {
        Self {
            id,
            adjacent: HashMap::new(),
            heuristic,
        }
    }

    pub fn id(&self) -> &T {
        &self.id
    }

    pub fn heuristic(&self) -> f64 {
        self.heuristic
    }

    pub fn set_heuristic(&mut self, heuristic: f64) {
        self.heuristic = heuristic;
    }

    /// Outgoing edges as `target id -> weight`
    pub fn adjacent(&self) -> &HashMap<T, f64> {
        &self.adjacent
    }

    pub fn out_degree(&self) -> usize {
        self.adjacent.len()
    }

    pub fn neighbors(&self) -> impl Iterator<Item = &T> {
        self.adjacent.keys()
    }

    pub(crate) fn adjacent_mut(&mut self) -> &mut HashMap<T, f64> {
        &mut self.adjacent
    }
}

impl<T: Eq + Hash> Vertex<T> {
    /// Weight of the edge to `to`, if there is one
    pub fn weight_to(&self, to: &T) -> Option<f64> {
        self.adjacent.get(to).copied()
    }

    /// Insert or replace the edge to `to`. Weight validation and endpoint
    /// creation are the graph's job.
    pub(crate) fn set_edge(&mut self, to: T, weight: f64) {
        self.adjacent.insert(to, weight);
    }

    pub(crate) fn remove_edge(&mut self, to: &T) -> Option<f64> {
        self.adjacent.remove(to)
    }
}
