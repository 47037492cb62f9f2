//! Cost-bounded frontier expansion
//!
//! `affordable_vertices` answers "which vertices can I afford to reach from
//! here". It is a single breadth-first pass: each vertex's aggregate cost is
//! fixed by the first parent that reaches it, and a cheaper route found later
//! through another parent is not taken into account. The result is therefore
//! an approximation of the exact minimum-cost frontier; an exact answer
//! needs the decrease-key discipline used by `search`.

use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;

use super::{Graph, TraversalSession, Vertex};
use crate::bail_invalid;
use crate::error::Result;

/// A vertex admitted by [`Graph::affordable_vertices`] and the aggregate cost
/// it was admitted at
#[derive(Debug)]
pub struct Affordable<'g, T> {
    pub vertex: &'g Vertex<T>,
    pub cost: f64,
}

impl<T> Clone for Affordable<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Affordable<'_, T> {}

impl<T: Eq + Hash + Clone + Debug> Graph<T> {
    /// Vertices reachable from `root` whose aggregate cost stays within
    /// `max_cost`, in admission order.
    ///
    /// A vertex's aggregate cost is its parent's aggregate cost plus its own
    /// heuristic (edge weights are not charged). `root` is always admitted at
    /// cost 0, even for a negative budget. A `NaN` budget is rejected.
    #[tracing::instrument(skip(self))]
    pub fn affordable_vertices(
        &self,
        root: &T,
        max_cost: f64,
    ) -> Result<Vec<Affordable<'_, T>>> {
        if max_cost.is_nan() {
            bail_invalid!("cost budget", max_cost);
        }
        let root = self.require_vertex(root)?;

        let mut session = TraversalSession::new();
        let mut queue = VecDeque::new();
        let mut admitted = Vec::new();

        session.set_visited(root.id(), true);
        session.set_aggregate_cost(root.id(), 0.0);
        queue.push_back(root);
        admitted.push(Affordable {
            vertex: root,
            cost: 0.0,
        });

        while let Some(current) = queue.pop_front() {
            let base = session.aggregate_cost(&current.id());
            for to in current.neighbors() {
                if session.visited(&to) {
                    continue;
                }
                let Some(next) = self.vertices.get(to) else {
                    continue;
                };
                let cost = base + next.heuristic();
                if cost > max_cost {
                    continue;
                }
                session.set_visited(next.id(), true);
                session.set_aggregate_cost(next.id(), cost);
                queue.push_back(next);
                admitted.push(Affordable { vertex: next, cost });
            }
        }

        tracing::debug!(
            session = %session.id(),
            max_cost,
            admitted = admitted.len(),
            "frontier_expanded"
        );
        Ok(admitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use std::collections::HashMap;

    fn costs(found: &[Affordable<'_, &'static str>]) -> HashMap<&'static str, f64> {
        found.iter().map(|a| (*a.vertex.id(), a.cost)).collect()
    }

    #[test]
    fn test_root_always_included_at_zero() {
        let mut g = Graph::new();
        g.add_edge_with_heuristics("r", "x", 1.0, 50.0, 5.0).unwrap();

        let found = g.affordable_vertices(&"r", -1.0).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(*found[0].vertex.id(), "r");
        assert_eq!(found[0].cost, 0.0);
    }

    #[test]
    fn test_budget_excludes_expensive_vertices() {
        // r -> a (h=2) -> b (h=2) -> c (h=2)
        let mut g = Graph::new();
        g.add_edge_with_heuristics("r", "a", 100.0, 0.0, 2.0).unwrap();
        g.add_edge_with_heuristics("a", "b", 100.0, 2.0, 2.0).unwrap();
        g.add_edge_with_heuristics("b", "c", 100.0, 2.0, 2.0).unwrap();

        let found = costs(&g.affordable_vertices(&"r", 4.0).unwrap());
        assert_eq!(found.len(), 3);
        assert_eq!(found["a"], 2.0);
        assert_eq!(found["b"], 4.0);
        assert!(!found.contains_key("c"));
    }

    #[test]
    fn test_never_exceeds_budget() {
        let mut g = Graph::new();
        for i in 0..20u32 {
            g.add_edge_with_heuristics(i, i + 1, 1.0, f64::from(i % 3), f64::from((i + 1) % 3))
                .unwrap();
            g.add_edge(i, i + 2, 1.0).unwrap();
        }
        for budget in [0.0, 1.0, 2.5, 7.0] {
            for a in g.affordable_vertices(&0, budget).unwrap() {
                assert!(a.cost <= budget);
            }
        }
    }

    #[test]
    fn test_first_parent_fixes_cost() {
        // r -> x (h=5) -> t (h=1); r -> y (h=0) -> t
        // BFS reaches t first through whichever of x/y is dequeued first;
        // once admitted its cost is not revised.
        let mut g = Graph::new();
        g.add_edge_with_heuristics("r", "x", 1.0, 0.0, 5.0).unwrap();
        g.add_edge_with_heuristics("r", "y", 1.0, 0.0, 0.0).unwrap();
        g.add_edge_with_heuristics("x", "t", 1.0, 5.0, 1.0).unwrap();
        g.add_edge("y", "t", 1.0).unwrap();

        let found = g.affordable_vertices(&"r", 10.0).unwrap();
        let by_id = costs(&found);
        assert_eq!(by_id.len(), 4);
        assert!(by_id["t"] == 6.0 || by_id["t"] == 1.0);
        let t_count = found.iter().filter(|a| *a.vertex.id() == "t").count();
        assert_eq!(t_count, 1);
    }

    #[test]
    fn test_nan_budget_rejected() {
        let mut g = Graph::new();
        g.add_edge("r", "x", 1.0).unwrap();
        let err = g.affordable_vertices(&"r", f64::NAN).unwrap_err();
        assert!(matches!(err, GraphError::InvalidValue { .. }));
    }

    #[test]
    fn test_unknown_root_errors() {
        let g: Graph<&str> = Graph::new();
        let err = g.affordable_vertices(&"nope", 1.0).unwrap_err();
        assert!(matches!(err, GraphError::VertexNotFound { .. }));
    }
}
