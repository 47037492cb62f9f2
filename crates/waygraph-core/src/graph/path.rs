//! Materialized search result that can be consumed incrementally
//!
//! A [`Path`] is a forward successor map over vertices borrowed from the
//! graph. Callers step along it one vertex, N vertices, or a cost budget at
//! a time instead of taking the whole route at once.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use super::{Edge, Graph, ShortestPathTree, Vertex};
use crate::bail_invalid;
use crate::error::{GraphError, Result};

/// Route from `start` to `end` through a borrowed graph
#[derive(Debug)]
pub struct Path<'g, T> {
    graph: &'g Graph<T>,
    start: &'g Vertex<T>,
    end: &'g Vertex<T>,
    /// Next vertex and the weight of the edge leading to it, for every path
    /// vertex except `end`
    successor: HashMap<&'g T, (&'g Vertex<T>, f64)>,
}

impl<T> Clone for Path<'_, T> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            start: self.start,
            end: self.end,
            successor: self.successor.clone(),
        }
    }
}

impl<'g, T: Eq + Hash + Clone + Debug> Path<'g, T> {
    pub(crate) fn from_tree(graph: &'g Graph<T>, tree: &ShortestPathTree<T>) -> Result<Self> {
        Self::from_predecessors(graph, &tree.start, &tree.end, &tree.predecessors)
    }

    /// Build a path by walking `predecessors` (`child -> parent`) back from
    /// `end` to `start`.
    ///
    /// Each vertex has at most one recorded parent, so a walk that reaches a
    /// parent twice is a cycle. Fails if `start == end`, a predecessor is
    /// missing, a recorded hop is not an edge of `graph`, or the chain never
    /// reaches `start`.
    pub fn from_predecessors(
        graph: &'g Graph<T>,
        start: &T,
        end: &T,
        predecessors: &HashMap<T, T>,
    ) -> Result<Self> {
        let start = graph.require_vertex(start)?;
        let end = graph.require_vertex(end)?;
        if start.id() == end.id() {
            return Err(GraphError::SameEndpoints {
                id: format!("{:?}", start.id()),
            });
        }

        let mut successor: HashMap<&'g T, (&'g Vertex<T>, f64)> = HashMap::new();
        let mut current = end;
        let mut hops = 0usize;

        while current.id() != start.id() {
            let parent_id =
                predecessors
                    .get(current.id())
                    .ok_or_else(|| GraphError::MissingPredecessor {
                        id: format!("{:?}", current.id()),
                        end: format!("{:?}", end.id()),
                    })?;
            let parent = graph.require_vertex(parent_id)?;
            let weight =
                parent
                    .weight_to(current.id())
                    .ok_or_else(|| GraphError::DanglingEdge {
                        from: format!("{:?}", parent.id()),
                        to: format!("{:?}", current.id()),
                    })?;

            match successor.entry(parent.id()) {
                Entry::Vacant(slot) => {
                    slot.insert((current, weight));
                }
                Entry::Occupied(_) => {
                    return Err(GraphError::PredecessorCycle {
                        id: format!("{:?}", parent.id()),
                    });
                }
            }

            hops += 1;
            if hops > predecessors.len() {
                return Err(GraphError::PredecessorCycle {
                    id: format!("{:?}", current.id()),
                });
            }
            current = parent;
        }

        let path = Self {
            graph,
            start,
            end,
            successor,
        };
        path.check_reaches_end()?;
        Ok(path)
    }

    fn check_reaches_end(&self) -> Result<()> {
        let mut current = self.start;
        for _ in 0..=self.successor.len() {
            if current.id() == self.end.id() {
                return Ok(());
            }
            match self.successor.get(current.id()) {
                Some(&(next, _)) => current = next,
                None => break,
            }
        }
        Err(GraphError::PredecessorCycle {
            id: format!("{:?}", current.id()),
        })
    }

    pub fn graph(&self) -> &'g Graph<T> {
        self.graph
    }

    pub fn start(&self) -> &'g Vertex<T> {
        self.start
    }

    pub fn end(&self) -> &'g Vertex<T> {
        self.end
    }

    pub fn contains(&self, id: &T) -> bool {
        id == self.end.id() || self.successor.contains_key(id)
    }

    fn require_on_path(&self, id: &T) -> Result<&'g Vertex<T>> {
        if id == self.end.id() {
            return Ok(self.end);
        }
        match self.successor.get(id) {
            Some(_) => self.graph.require_vertex(id),
            None => Err(GraphError::not_on_path(id)),
        }
    }

    /// The vertex after `from`
    pub fn next(&self, from: &T) -> Result<&'g Vertex<T>> {
        if from == self.end.id() {
            return Err(GraphError::EndOfPath {
                id: format!("{:?}", from),
            });
        }
        self.successor
            .get(from)
            .map(|&(next, _)| next)
            .ok_or_else(|| GraphError::not_on_path(from))
    }

    /// Take up to `steps` steps from `from`, stopping early at `end`.
    /// Returns the vertex reached and the number of steps taken.
    pub fn advance_steps(&self, from: &T, steps: usize) -> Result<(&'g Vertex<T>, usize)> {
        let mut current = self.require_on_path(from)?;
        let mut taken = 0;
        while taken < steps {
            let Some(&(next, _)) = self.successor.get(current.id()) else {
                break;
            };
            current = next;
            taken += 1;
        }
        Ok((current, taken))
    }

    /// Step from `from` while the next vertex's heuristic still fits in what
    /// is left of `max_cost`. Returns the vertex reached, the cost spent and
    /// the number of steps taken.
    pub fn advance_by_cost(&self, from: &T, max_cost: f64) -> Result<(&'g Vertex<T>, f64, usize)> {
        if max_cost.is_nan() || max_cost < 0.0 {
            bail_invalid!("cost budget", max_cost);
        }
        let mut current = self.require_on_path(from)?;
        let mut used = 0.0;
        let mut taken = 0;
        while let Some(&(next, _)) = self.successor.get(current.id()) {
            let cost = next.heuristic();
            if used + cost > max_cost {
                break;
            }
            used += cost;
            current = next;
            taken += 1;
        }
        Ok((current, used, taken))
    }

    /// Vertices from `from` up to and including `to`, or up to `end` if
    /// `to` does not come after `from`
    pub fn vertices_between(&self, from: &T, to: &T) -> Result<PathVertices<'_, 'g, T>> {
        let first = self.require_on_path(from)?;
        Ok(PathVertices {
            path: self,
            next: Some(first),
            stop: self.graph.try_get_vertex(to).map(Vertex::id),
        })
    }

    /// Vertices from `from` through `end`
    pub fn vertices_from(&self, from: &T) -> Result<PathVertices<'_, 'g, T>> {
        let first = self.require_on_path(from)?;
        Ok(PathVertices {
            path: self,
            next: Some(first),
            stop: None,
        })
    }

    /// Every vertex on the path, `start` through `end`
    pub fn vertices(&self) -> PathVertices<'_, 'g, T> {
        PathVertices {
            path: self,
            next: Some(self.start),
            stop: None,
        }
    }

    /// First vertex with id `target` at or after `from`. `None` when
    /// `target` is not ahead of `from` or `from` is not on the path.
    pub fn seek(&self, from: &T, target: &T) -> Option<&'g Vertex<T>> {
        self.vertices_from(from)
            .ok()?
            .find(|v| v.id() == target)
    }

    /// Steps from `start` to `end`
    pub fn length(&self) -> usize {
        self.successor.len()
    }

    /// Largest vertex heuristic along the path, `start` and `end` included
    pub fn max_single_cost(&self) -> f64 {
        self.vertices()
            .map(Vertex::heuristic)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Edges between consecutive path vertices
    pub fn edges(&self) -> PathEdges<'_, 'g, T> {
        PathEdges {
            path: self,
            current: Some(self.start),
        }
    }

    /// Sum of `weight + heuristic(to)` over [`Path::edges`]; matches the
    /// cost reported by [`Graph::search`]
    pub fn route_cost(&self) -> f64 {
        self.edges().map(|e| e.traversal_cost()).sum()
    }
}

/// Iterator over path vertices, see [`Path::vertices`]
pub struct PathVertices<'p, 'g, T> {
    path: &'p Path<'g, T>,
    next: Option<&'g Vertex<T>>,
    stop: Option<&'g T>,
}

impl<T> Clone for PathVertices<'_, '_, T> {
    fn clone(&self) -> Self {
        Self {
            path: self.path,
            next: self.next,
            stop: self.stop,
        }
    }
}

impl<'g, T: Eq + Hash> Iterator for PathVertices<'_, 'g, T> {
    type Item = &'g Vertex<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if self.stop != Some(current.id()) {
            self.next = self.path.successor.get(current.id()).map(|&(v, _)| v);
        }
        Some(current)
    }
}

/// Iterator over path edges, see [`Path::edges`]
pub struct PathEdges<'p, 'g, T> {
    path: &'p Path<'g, T>,
    current: Option<&'g Vertex<T>>,
}

impl<'g, T: Eq + Hash> Iterator for PathEdges<'_, 'g, T> {
    type Item = Edge<'g, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let from = self.current?;
        match self.path.successor.get(from.id()) {
            Some(&(to, weight)) => {
                self.current = Some(to);
                Some(Edge::new(from, to, weight))
            }
            None => {
                self.current = None;
                None
            }
        }
    }
}
