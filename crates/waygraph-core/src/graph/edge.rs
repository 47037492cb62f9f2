use super::Vertex;

/// Immutable view of one directed edge, built on demand from the source
/// vertex's adjacency. Edges are never stored on their own.
///
/// A lookup that finds nothing returns [`Edge::none`]: both endpoints
/// `None` and a `NaN` weight.
#[derive(Debug)]
pub struct Edge<'g, T> {
    pub from: Option<&'g Vertex<T>>,
    pub to: Option<&'g Vertex<T>>,
    pub weight: f64,
}

impl<'g, T> Edge<'g, T> {
    pub(crate) fn new(from: &'g Vertex<T>, to: &'g Vertex<T>, weight: f64) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
            weight,
        }
    }

    /// The "no such edge" sentinel
    pub fn none() -> Self {
        Self {
            from: None,
            to: None,
            weight: f64::NAN,
        }
    }

    pub fn is_none(&self) -> bool {
        self.from.is_none() || self.to.is_none()
    }

    /// Both endpoints, or `None` for the sentinel
    pub fn endpoints(&self) -> Option<(&'g Vertex<T>, &'g Vertex<T>)> {
        self.from.zip(self.to)
    }

    /// Weight plus the destination's heuristic: what a route pays to take
    /// this edge. `NaN` for the sentinel.
    pub fn traversal_cost(&self) -> f64 {
        match self.to {
            Some(to) => self.weight + to.heuristic(),
            None => f64::NAN,
        }
    }
}

// Manual impls: a derive would require `T: Clone`/`T: Copy` even though only
// references are held.
impl<T> Clone for Edge<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Edge<'_, T> {}
