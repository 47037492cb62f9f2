//! Error types and exit codes for waygraph
//!
//! Errors fall into four kinds:
//! - precondition violations (bad ids, `start == end`, invalid weights)
//! - inconsistent state (a path stepped with a vertex it does not contain)
//! - no path found (valid inputs, but the target is unreachable)
//! - I/O and decoding failures from persistence and configuration
//!
//! Expected misses (`get_edge`, `try_get_vertex`, `Path::seek`) are not errors;
//! they return a sentinel or `Option`.

mod macros;

use thiserror::Error;

/// Exit codes used by the waygraph CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure - IO, decoding (1)
    Failure = 1,
    /// Usage or precondition error (2)
    Usage = 2,
    /// Inconsistent graph or path data (3)
    Data = 3,
    /// Target unreachable from source (4)
    NoPath = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Coarse classification of a [`GraphError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Programmer error: the call was invalid for this graph
    Precondition,
    /// Input data contradicts itself (corrupt predecessor map, stale path)
    Inconsistent,
    /// Inputs were valid but no route exists
    NoPath,
    /// IO or decoding failure
    Failure,
}

/// Errors that can occur during graph operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Precondition violations (exit code 2)
    #[error("start and end are the same vertex: {id}")]
    SameEndpoints { id: String },

    #[error("vertex not found: {id}")]
    VertexNotFound { id: String },

    #[error("graph has {count} vertices, at least {required} required")]
    TooFewVertices { count: usize, required: usize },

    #[error("invalid weight {weight} for edge {from} -> {to} (must be finite and non-negative)")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Inconsistent state (exit code 3)
    #[error("no predecessor recorded for {id} while rebuilding path to {end}")]
    MissingPredecessor { id: String, end: String },

    #[error("predecessor chain revisits {id} before reaching the start")]
    PredecessorCycle { id: String },

    #[error("vertex is not on this path: {id}")]
    NotOnPath { id: String },

    #[error("vertex {id} is the end of the path and has no successor")]
    EndOfPath { id: String },

    #[error("edge {from} -> {to} does not exist in the graph")]
    DanglingEdge { from: String, to: String },

    // No route (exit code 4)
    #[error("no path from {from} to {to}")]
    NoPathFound { from: String, to: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },
}

impl GraphError {
    /// Create a vertex-not-found error from any debuggable id
    pub fn vertex_not_found(id: &impl std::fmt::Debug) -> Self {
        GraphError::VertexNotFound {
            id: format!("{:?}", id),
        }
    }

    /// Create a not-on-path error from any debuggable id
    pub fn not_on_path(id: &impl std::fmt::Debug) -> Self {
        GraphError::NotOnPath {
            id: format!("{:?}", id),
        }
    }

    /// Create a no-path-found error for a search between two ids
    pub fn no_path(from: &impl std::fmt::Debug, to: &impl std::fmt::Debug) -> Self {
        GraphError::NoPathFound {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed operation
    pub fn failed(operation: &str, error: impl std::fmt::Display) -> Self {
        GraphError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::SameEndpoints { .. }
            | GraphError::VertexNotFound { .. }
            | GraphError::TooFewVertices { .. }
            | GraphError::InvalidWeight { .. }
            | GraphError::InvalidValue { .. } => ErrorKind::Precondition,

            GraphError::MissingPredecessor { .. }
            | GraphError::PredecessorCycle { .. }
            | GraphError::NotOnPath { .. }
            | GraphError::EndOfPath { .. }
            | GraphError::DanglingEdge { .. } => ErrorKind::Inconsistent,

            GraphError::NoPathFound { .. } => ErrorKind::NoPath,

            GraphError::Io(_)
            | GraphError::Json(_)
            | GraphError::Toml(_)
            | GraphError::FailedOperation { .. } => ErrorKind::Failure,
        }
    }

    /// True when the target was unreachable; callers typically fall back
    /// (stay put, pick another goal) instead of treating this as a bug.
    pub fn is_no_path(&self) -> bool {
        self.kind() == ErrorKind::NoPath
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self.kind() {
            ErrorKind::Precondition => ExitCode::Usage,
            ErrorKind::Inconsistent => ExitCode::Data,
            ErrorKind::NoPath => ExitCode::NoPath,
            ErrorKind::Failure => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::SameEndpoints { .. } => "same_endpoints",
            GraphError::VertexNotFound { .. } => "vertex_not_found",
            GraphError::TooFewVertices { .. } => "too_few_vertices",
            GraphError::InvalidWeight { .. } => "invalid_weight",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::MissingPredecessor { .. } => "missing_predecessor",
            GraphError::PredecessorCycle { .. } => "predecessor_cycle",
            GraphError::NotOnPath { .. } => "not_on_path",
            GraphError::EndOfPath { .. } => "end_of_path",
            GraphError::DanglingEdge { .. } => "dangling_edge",
            GraphError::NoPathFound { .. } => "no_path_found",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::FailedOperation { .. } => "failed_operation",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for waygraph operations
pub type Result<T> = std::result::Result<T, GraphError>;
