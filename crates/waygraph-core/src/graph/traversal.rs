//! Breadth-first and depth-first walks
//!
//! Traversals are pull-based iterators. The frontier and visited marks are
//! owned by the iterator, so dropping it part way through leaves the graph
//! untouched.

use std::collections::hash_map;
use std::collections::VecDeque;
use std::fmt::{self, Debug};
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use super::{Edge, Graph, TraversalSession, Vertex};
use crate::error::{GraphError, Result};

/// Order in which a traversal expands its frontier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraversalOrder {
    /// FIFO frontier
    #[default]
    BreadthFirst,
    /// LIFO frontier
    DepthFirst,
}

impl std::str::FromStr for TraversalOrder {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "breadth-first" | "bfs" => Ok(TraversalOrder::BreadthFirst),
            "depth-first" | "dfs" => Ok(TraversalOrder::DepthFirst),
            other => Err(GraphError::invalid_value(
                "traversal order",
                format!("{other} (expected: breadth-first, depth-first)"),
            )),
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalOrder::BreadthFirst => write!(f, "breadth-first"),
            TraversalOrder::DepthFirst => write!(f, "depth-first"),
        }
    }
}

/// A frontier entry: the vertex and the edge it was reached through
struct Step<'g, T> {
    vertex: &'g Vertex<T>,
    via: Option<(&'g Vertex<T>, f64)>,
}

/// Lazy vertex sequence produced by [`Graph::traverse`]
pub struct Traversal<'g, T> {
    graph: &'g Graph<T>,
    order: TraversalOrder,
    frontier: VecDeque<Step<'g, T>>,
    session: TraversalSession<&'g T>,
    /// Restart candidates; `Some` only for whole-graph walks
    unvisited: Option<hash_map::Values<'g, T, Vertex<T>>>,
}

impl<'g, T: Eq + Hash + Clone + Debug> Traversal<'g, T> {
    pub(crate) fn new(
        graph: &'g Graph<T>,
        start: Option<&'g Vertex<T>>,
        order: TraversalOrder,
        include_all: bool,
    ) -> Self {
        let session = TraversalSession::new();
        tracing::trace!(session = %session.id(), %order, include_all, "traversal_start");
        Self {
            graph,
            order,
            frontier: start
                .map(|vertex| Step { vertex, via: None })
                .into_iter()
                .collect(),
            session,
            unvisited: include_all.then(|| graph.vertices.values()),
        }
    }

    pub fn order(&self) -> TraversalOrder {
        self.order
    }

    /// Number of vertices yielded so far
    pub fn visited_count(&self) -> usize {
        self.session.visited_count()
    }

    fn pop(&mut self) -> Option<Step<'g, T>> {
        match self.order {
            TraversalOrder::BreadthFirst => self.frontier.pop_front(),
            TraversalOrder::DepthFirst => self.frontier.pop_back(),
        }
    }

    /// Seed the frontier with some unvisited vertex, if any remain
    fn restart(&mut self) -> bool {
        let Some(candidates) = self.unvisited.as_mut() else {
            return false;
        };
        let session = &self.session;
        match candidates.find(|&v| !session.visited(&v.id())) {
            Some(vertex) => {
                self.frontier.push_back(Step { vertex, via: None });
                true
            }
            None => false,
        }
    }

    fn advance(&mut self) -> Option<Step<'g, T>> {
        loop {
            let Some(step) = self.pop() else {
                if self.restart() {
                    continue;
                }
                tracing::trace!(
                    session = %self.session.id(),
                    visited = self.session.visited_count(),
                    "traversal_done"
                );
                return None;
            };

            if !self.session.visit(step.vertex.id()) {
                continue;
            }

            for (to, &weight) in step.vertex.adjacent() {
                if self.session.visited(&to) {
                    continue;
                }
                if let Some(next) = self.graph.vertices.get(to) {
                    self.frontier.push_back(Step {
                        vertex: next,
                        via: Some((step.vertex, weight)),
                    });
                }
            }
            return Some(step);
        }
    }
}

impl<'g, T: Eq + Hash + Clone + Debug> Iterator for Traversal<'g, T> {
    type Item = &'g Vertex<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(|step| step.vertex)
    }
}

/// Lazy edge sequence produced by [`Graph::traverse_edges`].
///
/// Yields, for every vertex other than a walk's starting point, the edge
/// through which it was first visited (a spanning forest).
pub struct EdgeTraversal<'g, T> {
    inner: Traversal<'g, T>,
}

impl<'g, T: Eq + Hash + Clone + Debug> Iterator for EdgeTraversal<'g, T> {
    type Item = Edge<'g, T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let step = self.inner.advance()?;
            if let Some((from, weight)) = step.via {
                return Some(Edge::new(from, step.vertex, weight));
            }
        }
    }
}

impl<T: Eq + Hash + Clone + Debug> Graph<T> {
    /// Walk the vertices reachable from `start`.
    ///
    /// With `include_all`, the walk continues from an arbitrary unvisited
    /// vertex whenever the frontier empties, so every vertex is yielded
    /// exactly once.
    pub fn traverse(
        &self,
        start: &T,
        order: TraversalOrder,
        include_all: bool,
    ) -> Result<Traversal<'_, T>> {
        let start = self.require_vertex(start)?;
        Ok(Traversal::new(self, Some(start), order, include_all))
    }

    /// Same walk as [`Graph::traverse`], yielding the edges it follows
    pub fn traverse_edges(
        &self,
        start: &T,
        order: TraversalOrder,
        include_all: bool,
    ) -> Result<EdgeTraversal<'_, T>> {
        Ok(EdgeTraversal {
            inner: self.traverse(start, order, include_all)?,
        })
    }

    /// Walk every vertex, starting at the root, in the graph's traversal
    /// order. Empty for an empty graph.
    pub fn iter(&self) -> Traversal<'_, T> {
        Traversal::new(self, self.root(), self.traversal_order(), true)
    }
}

impl<'g, T: Eq + Hash + Clone + Debug> IntoIterator for &'g Graph<T> {
    type Item = &'g Vertex<T>;
    type IntoIter = Traversal<'g, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// 1 -> 2 -> 4, 1 -> 3 -> 4, plus a separate 5 <-> 6 component
    fn two_components() -> Graph<u32> {
        let mut g = Graph::new();
        g.add_edge(1, 2, 1.0).unwrap();
        g.add_edge(1, 3, 1.0).unwrap();
        g.add_edge(2, 4, 1.0).unwrap();
        g.add_edge(3, 4, 1.0).unwrap();
        g.add_undirected_edge(5, 6, 1.0).unwrap();
        g
    }

    fn ids<'g>(it: impl Iterator<Item = &'g Vertex<u32>>) -> Vec<u32> {
        it.map(|v| *v.id()).collect()
    }

    #[test]
    fn test_order_parse_and_display() {
        assert_eq!(
            "bfs".parse::<TraversalOrder>().unwrap(),
            TraversalOrder::BreadthFirst
        );
        assert_eq!(
            "Depth-First".parse::<TraversalOrder>().unwrap(),
            TraversalOrder::DepthFirst
        );
        assert!("sideways".parse::<TraversalOrder>().is_err());
        assert_eq!(TraversalOrder::DepthFirst.to_string(), "depth-first");
    }

    #[test]
    fn test_bfs_single_component_by_level() {
        let g = two_components();
        let order = ids(g.traverse(&1, TraversalOrder::BreadthFirst, false).unwrap());
        assert_eq!(order.len(), 4);
        assert_eq!(order[0], 1);
        let level_one: HashSet<u32> = order[1..3].iter().copied().collect();
        assert_eq!(level_one, HashSet::from([2, 3]));
        assert_eq!(order[3], 4);
    }

    #[test]
    fn test_dfs_goes_deep_first() {
        let mut g = Graph::new();
        g.add_edge('a', 'b', 1.0).unwrap();
        g.add_edge('b', 'c', 1.0).unwrap();
        g.add_edge('c', 'd', 1.0).unwrap();
        let order: Vec<char> = g
            .traverse(&'a', TraversalOrder::DepthFirst, false)
            .unwrap()
            .map(|v| *v.id())
            .collect();
        assert_eq!(order, vec!['a', 'b', 'c', 'd']);
    }

    #[test]
    fn test_include_all_covers_every_component_once() {
        let g = two_components();
        for order in [TraversalOrder::BreadthFirst, TraversalOrder::DepthFirst] {
            let seen = ids(g.traverse(&1, order, true).unwrap());
            assert_eq!(seen.len(), g.len());
            let unique: HashSet<u32> = seen.iter().copied().collect();
            assert_eq!(unique.len(), g.len());
        }
    }

    #[test]
    fn test_include_all_from_sink_still_covers_graph() {
        let g = two_components();
        let seen = ids(g.traverse(&4, TraversalOrder::BreadthFirst, true).unwrap());
        assert_eq!(seen[0], 4);
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_edge_traversal_is_spanning_forest() {
        let g = two_components();
        let edges: Vec<(u32, u32)> = g
            .traverse_edges(&1, TraversalOrder::BreadthFirst, true)
            .unwrap()
            .map(|e| {
                let (from, to) = e.endpoints().unwrap();
                (*from.id(), *to.id())
            })
            .collect();
        // Six vertices in two trees: four edges.
        assert_eq!(edges.len(), 4);
        let targets: HashSet<u32> = edges.iter().map(|&(_, to)| to).collect();
        assert_eq!(targets.len(), 4);
        assert!(!targets.contains(&1));
        for (from, to) in edges {
            assert!(g.has_edge(&from, &to));
        }
    }

    #[test]
    fn test_abandoned_traversal_does_not_affect_next_one() {
        let g = two_components();
        let mut first = g.traverse(&1, TraversalOrder::BreadthFirst, false).unwrap();
        first.next();
        first.next();
        drop(first);

        let again = ids(g.traverse(&1, TraversalOrder::BreadthFirst, false).unwrap());
        assert_eq!(again.len(), 4);
    }

    #[test]
    fn test_interleaved_traversals_are_independent() {
        let g = two_components();
        let mut a = g.traverse(&1, TraversalOrder::BreadthFirst, false).unwrap();
        let mut b = g.traverse(&1, TraversalOrder::DepthFirst, false).unwrap();
        let mut count_a = 0;
        let mut count_b = 0;
        loop {
            let na = a.next().is_some();
            let nb = b.next().is_some();
            count_a += usize::from(na);
            count_b += usize::from(nb);
            if !na && !nb {
                break;
            }
        }
        assert_eq!((count_a, count_b), (4, 4));
    }

    #[test]
    fn test_graph_iteration_uses_root_and_covers_all() {
        let mut g = two_components();
        g.set_traversal_order(TraversalOrder::DepthFirst);
        let seen: Vec<u32> = (&g).into_iter().map(|v| *v.id()).collect();
        assert_eq!(seen[0], 1);
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_missing_start_is_precondition_error() {
        let g = two_components();
        let err = g
            .traverse(&99, TraversalOrder::BreadthFirst, false)
            .err()
            .unwrap();
        assert!(matches!(err, GraphError::VertexNotFound { .. }));
    }

    #[test]
    fn test_empty_graph_iterates_nothing() {
        let g: Graph<u32> = Graph::new();
        assert_eq!(g.iter().count(), 0);
    }
}
