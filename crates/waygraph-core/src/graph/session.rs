//! Per-call traversal marks
//!
//! Visited flags and aggregate costs belong to one traversal or search call.
//! They live in a [`TraversalSession`] owned by that call (or by the iterator
//! it returns) and are dropped with it, so vertices never carry stale marks
//! and read-only traversals can overlap.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SESSION: AtomicU64 = AtomicU64::new(1);

/// Opaque token identifying one traversal call, used to correlate log events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

impl SessionId {
    /// Mint a token never handed out before in this process
    pub fn mint() -> Self {
        SessionId(NEXT_SESSION.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}", self.0)
    }
}

#[derive(Debug, Clone, Copy)]
struct Marks {
    visited: bool,
    aggregate_cost: f64,
}

impl Default for Marks {
    fn default() -> Self {
        Self {
            visited: false,
            aggregate_cost: f64::INFINITY,
        }
    }
}

/// Transient marks for one traversal, keyed by vertex id.
///
/// Ids never touched report `visited == false` and
/// `aggregate_cost == +inf`.
#[derive(Debug)]
pub struct TraversalSession<K> {
    id: SessionId,
    marks: HashMap<K, Marks>,
}

impl<K: Eq + Hash> TraversalSession<K> {
    pub fn new() -> Self {
        Self {
            id: SessionId::mint(),
            marks: HashMap::new(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn visited(&self, key: &K) -> bool {
        self.marks.get(key).is_some_and(|m| m.visited)
    }

    pub fn set_visited(&mut self, key: K, visited: bool) {
        self.marks.entry(key).or_default().visited = visited;
    }

    /// Mark `key` visited; returns false if it already was
    pub fn visit(&mut self, key: K) -> bool {
        let marks = self.marks.entry(key).or_default();
        !std::mem::replace(&mut marks.visited, true)
    }

    pub fn aggregate_cost(&self, key: &K) -> f64 {
        self.marks
            .get(key)
            .map_or(f64::INFINITY, |m| m.aggregate_cost)
    }

    pub fn set_aggregate_cost(&mut self, key: K, cost: f64) {
        self.marks.entry(key).or_default().aggregate_cost = cost;
    }

    /// Number of ids currently marked visited
    pub fn visited_count(&self) -> usize {
        self.marks.values().filter(|m| m.visited).count()
    }

    /// Clear every visited flag in this session
    pub fn reset_visited(&mut self) {
        for marks in self.marks.values_mut() {
            marks.visited = false;
        }
    }

    /// Clear every aggregate cost in this session
    pub fn reset_aggregate_cost(&mut self) {
        for marks in self.marks.values_mut() {
            marks.aggregate_cost = f64::INFINITY;
        }
    }
}

impl<K: Eq + Hash> Default for TraversalSession<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_marks_have_defaults() {
        let session: TraversalSession<&str> = TraversalSession::new();
        assert!(!session.visited(&"a"));
        assert_eq!(session.aggregate_cost(&"a"), f64::INFINITY);
    }

    #[test]
    fn test_visit_reports_first_time_only() {
        let mut session = TraversalSession::new();
        assert!(session.visit(7));
        assert!(!session.visit(7));
        assert!(session.visited(&7));
        assert_eq!(session.visited_count(), 1);
    }

    #[test]
    fn test_resets_are_independent() {
        let mut session = TraversalSession::new();
        session.set_visited("a", true);
        session.set_aggregate_cost("a", 4.0);

        session.reset_visited();
        assert!(!session.visited(&"a"));
        assert_eq!(session.aggregate_cost(&"a"), 4.0);

        session.reset_aggregate_cost();
        assert_eq!(session.aggregate_cost(&"a"), f64::INFINITY);
    }

    #[test]
    fn test_sessions_get_distinct_tokens() {
        let a: TraversalSession<u8> = TraversalSession::new();
        let b: TraversalSession<u8> = TraversalSession::new();
        assert_ne!(a.id(), b.id());
    }
}
