//! Error macros for waygraph

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphError::invalid_value($context, $value))
    };
}

/// Macro for rejecting an id that is not a vertex of the graph
#[macro_export]
macro_rules! bail_missing_vertex {
    ($id:expr) => {
        return Err($crate::error::GraphError::vertex_not_found($id))
    };
}
