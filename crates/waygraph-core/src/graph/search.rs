//! Shortest-path search
//!
//! Uniform-cost search (Dijkstra with decrease-key) over the whole vertex
//! set. Moving from `u` to `v` costs `weight(u, v) + heuristic(v)`: the
//! destination's intrinsic cost is paid once per arrival. No remaining-
//! distance estimate is used, so this is not goal-directed A*.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Instant;

use super::{Graph, Path, TraversalSession, UpdatablePriorityQueue};
use crate::error::{GraphError, Result};
use crate::trace_time;

/// Minimum number of vertices a search needs
const MIN_SEARCH_VERTICES: usize = 2;

/// Output of a successful search, before it is turned into a [`Path`]
#[derive(Debug, Clone)]
pub struct ShortestPathTree<T> {
    pub start: T,
    pub end: T,
    /// `child -> parent` for every vertex whose cost was relaxed
    pub predecessors: HashMap<T, T>,
    /// Best known cost from `start` for every vertex reached
    pub total_costs: HashMap<T, f64>,
    /// Cost of the route to `end`
    pub total_cost: f64,
}

impl<T: Eq + Hash + Clone + Debug> ShortestPathTree<T> {
    /// Number of predecessor hops from `end` back to `start`
    pub fn hops(&self) -> usize {
        let mut hops = 0;
        let mut current = &self.end;
        while *current != self.start {
            match self.predecessors.get(current) {
                Some(parent) => current = parent,
                None => break,
            }
            hops += 1;
            if hops > self.predecessors.len() {
                break;
            }
        }
        hops
    }
}

impl<T: Eq + Hash + Clone + Debug> Graph<T> {
    /// Find the cheapest route from `start` to `end` and return it as a
    /// stepwise [`Path`] together with its total cost.
    ///
    /// Fails with [`GraphError::NoPathFound`] when `end` is unreachable, and
    /// with a precondition error when either id is unknown, the ids are
    /// equal, or the graph has fewer than two vertices.
    pub fn search(&self, start: &T, end: &T) -> Result<(Path<'_, T>, f64)> {
        let tree = self.shortest_path_tree(start, end)?;
        let path = Path::from_tree(self, &tree)?;
        Ok((path, tree.total_cost))
    }

    /// Run the search and return the raw predecessor tree
    #[tracing::instrument(skip(self), fields(vertices = self.len()))]
    pub fn shortest_path_tree(&self, start: &T, end: &T) -> Result<ShortestPathTree<T>> {
        let started = Instant::now();
        if self.len() < MIN_SEARCH_VERTICES {
            return Err(GraphError::TooFewVertices {
                count: self.len(),
                required: MIN_SEARCH_VERTICES,
            });
        }
        let start_vertex = self.require_vertex(start)?;
        let end_vertex = self.require_vertex(end)?;
        if start == end {
            return Err(GraphError::SameEndpoints {
                id: format!("{:?}", start),
            });
        }

        let mut session = TraversalSession::new();
        let mut queue = UpdatablePriorityQueue::with_capacity(self.len());
        let mut predecessors: HashMap<&T, &T> = HashMap::new();

        for vertex in self.vertices.values() {
            queue.enqueue(vertex.id(), f64::INFINITY);
        }
        queue.enqueue(start_vertex.id(), 0.0);
        session.set_aggregate_cost(start_vertex.id(), 0.0);

        let mut settled = 0usize;
        let mut found = false;
        while let Some((id, priority)) = queue.dequeue() {
            if priority == f64::INFINITY {
                // Everything still queued is unreachable.
                break;
            }
            settled += 1;
            if id == end_vertex.id() {
                found = true;
                break;
            }
            let Some(current) = self.vertices.get(id) else {
                continue;
            };

            for (to, &weight) in current.adjacent() {
                if !queue.contains(&to) {
                    continue;
                }
                let Some(next) = self.vertices.get(to) else {
                    continue;
                };
                let candidate = priority + weight + next.heuristic();
                if candidate < session.aggregate_cost(&to) {
                    session.set_aggregate_cost(to, candidate);
                    queue.decrease_priority(&to, candidate);
                    predecessors.insert(to, id);
                    tracing::trace!(from = ?id, to = ?to, cost = candidate, "relaxed");
                }
            }
        }

        trace_time!(started, "search", settled = settled);

        if !found {
            tracing::debug!(session = %session.id(), settled, "no_path");
            return Err(GraphError::no_path(start, end));
        }

        let total_cost = session.aggregate_cost(&end_vertex.id());
        let total_costs = self
            .vertices
            .keys()
            .filter_map(|id| {
                let cost = session.aggregate_cost(&id);
                cost.is_finite().then(|| (id.clone(), cost))
            })
            .collect();
        let predecessors = predecessors
            .into_iter()
            .map(|(child, parent)| (child.clone(), parent.clone()))
            .collect();

        tracing::debug!(session = %session.id(), settled, total_cost, "path_found");
        Ok(ShortestPathTree {
            start: start.clone(),
            end: end.clone(),
            predecessors,
            total_costs,
            total_cost,
        })
    }
}
