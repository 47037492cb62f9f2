//! Graph files
//!
//! A graph is stored as JSON. The id-keyed vertex map is written as an
//! ordered list of `(id, record)` pairs so that any serializable id type
//! round-trips, not only strings.

use std::fmt::Debug;
use std::fs;
use std::hash::Hash;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::{Graph, TraversalOrder, Vertex};

/// On-disk form of a [`Graph`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphRecord<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<T>,
    #[serde(default)]
    pub traversal_order: TraversalOrder,
    #[serde(default)]
    pub default_heuristic: f64,
    #[serde(default = "Vec::new")]
    pub vertices: Vec<(T, VertexRecord<T>)>,
}

/// On-disk form of a [`Vertex`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexRecord<T> {
    #[serde(default)]
    pub heuristic: f64,
    #[serde(default = "Vec::new")]
    pub adjacent: Vec<(T, f64)>,
}

impl<T: Eq + Hash + Clone + Debug> Graph<T> {
    /// Snapshot the graph into its serializable form
    pub fn to_record(&self) -> GraphRecord<T> {
        GraphRecord {
            root: self.root().map(|v| v.id().clone()),
            traversal_order: self.traversal_order(),
            default_heuristic: self.default_heuristic(),
            vertices: self
                .vertices()
                .map(|v| {
                    let adjacent = v
                        .adjacent()
                        .iter()
                        .map(|(to, &w)| (to.clone(), w))
                        .collect();
                    (
                        v.id().clone(),
                        VertexRecord {
                            heuristic: v.heuristic(),
                            adjacent,
                        },
                    )
                })
                .collect(),
        }
    }

    /// Rebuild a graph, rejecting edges to undeclared vertices, invalid
    /// weights and invalid heuristics. A missing root defaults to the first
    /// listed vertex.
    pub fn from_record(record: GraphRecord<T>) -> Result<Self> {
        let first = record.vertices.first().map(|(id, _)| id.clone());
        let mut graph = Graph::new();
        graph.set_traversal_order(record.traversal_order);
        graph.set_default_heuristic(record.default_heuristic)?;

        for (id, vertex) in &record.vertices {
            graph.add_vertex(Vertex::with_heuristic(id.clone(), vertex.heuristic))?;
        }
        for (id, vertex) in record.vertices {
            for (to, weight) in vertex.adjacent {
                if !graph.has_vertex(&to) {
                    return Err(GraphError::DanglingEdge {
                        from: format!("{:?}", id),
                        to: format!("{:?}", to),
                    });
                }
                graph.add_edge(id.clone(), to, weight)?;
            }
        }

        if let Some(root) = record.root.or(first) {
            graph.set_root(&root)?;
        }
        Ok(graph)
    }
}

/// Read a graph file
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_graph<T>(path: &Path) -> Result<Graph<T>>
where
    T: Eq + Hash + Clone + Debug + DeserializeOwned,
{
    let content = fs::read_to_string(path)?;
    let record: GraphRecord<T> = serde_json::from_str(&content)?;
    let graph = Graph::from_record(record)?;
    tracing::debug!(
        vertices = graph.len(),
        edges = graph.edge_count(),
        "graph_loaded"
    );
    Ok(graph)
}

/// Write a graph file, creating parent directories as needed
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn save_graph<T>(path: &Path, graph: &Graph<T>) -> Result<()>
where
    T: Eq + Hash + Clone + Debug + Serialize,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(&graph.to_record())?;
    fs::write(path, content)?;
    tracing::debug!(vertices = graph.len(), "graph_saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> Graph<String> {
        let mut g = Graph::new();
        g.add_edge_with_heuristics("a".into(), "b".into(), 1.0, 0.0, 2.0)
            .unwrap();
        g.add_edge("b".into(), "c".into(), 3.5).unwrap();
        g.set_traversal_order(TraversalOrder::DepthFirst);
        g
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("graph.json");
        let g = sample();
        save_graph(&path, &g).unwrap();

        let loaded: Graph<String> = load_graph(&path).unwrap();
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded.edge_count(), 2);
        assert_eq!(loaded.root().unwrap().id(), "a");
        assert_eq!(loaded.traversal_order(), TraversalOrder::DepthFirst);
        assert_eq!(loaded.get_edge(&"b".into(), &"c".into()).weight, 3.5);
        assert_eq!(loaded.try_get_vertex(&"b".into()).unwrap().heuristic(), 2.0);
    }

    #[test]
    fn test_record_uses_pair_list() {
        let json = serde_json::to_value(sample().to_record()).unwrap();
        assert_eq!(json["traversal_order"], "depth-first");
        let vertices = json["vertices"].as_array().unwrap();
        assert_eq!(vertices.len(), 3);
        assert!(vertices[0][0].is_string());
        assert!(vertices[0][1]["adjacent"].is_array());
    }

    #[test]
    fn test_integer_ids() {
        let json = r#"{ "vertices": [[1, {"adjacent": [[2, 1.0]]}], [2, {}]] }"#;
        let record: GraphRecord<u32> = serde_json::from_str(json).unwrap();
        let g = Graph::from_record(record).unwrap();
        assert!(g.has_edge(&1, &2));
        assert_eq!(*g.root().unwrap().id(), 1);
    }

    #[test]
    fn test_dangling_edge_rejected() {
        let json = r#"{ "vertices": [["a", {"adjacent": [["ghost", 1.0]]}]] }"#;
        let record: GraphRecord<String> = serde_json::from_str(json).unwrap();
        let err = Graph::from_record(record).unwrap_err();
        assert!(matches!(err, GraphError::DanglingEdge { .. }));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let json = r#"{ "vertices": [["a", {"adjacent": [["b", -2.0]]}], ["b", {}]] }"#;
        let record: GraphRecord<String> = serde_json::from_str(json).unwrap();
        let err = Graph::from_record(record).unwrap_err();
        assert!(matches!(err, GraphError::InvalidWeight { .. }));
    }

    #[test]
    fn test_invalid_heuristic_rejected() {
        let json = r#"{ "vertices": [["a", {"heuristic": -3.0}]] }"#;
        let record: GraphRecord<String> = serde_json::from_str(json).unwrap();
        let err = Graph::from_record(record).unwrap_err();
        assert!(matches!(err, GraphError::InvalidValue { .. }));

        let json = r#"{ "default_heuristic": -1.0, "vertices": [] }"#;
        let record: GraphRecord<String> = serde_json::from_str(json).unwrap();
        assert!(matches!(
            Graph::from_record(record).unwrap_err(),
            GraphError::InvalidValue { .. }
        ));
    }

    #[test]
    fn test_unknown_root_rejected() {
        let json = r#"{ "root": "zzz", "vertices": [["a", {}]] }"#;
        let record: GraphRecord<String> = serde_json::from_str(json).unwrap();
        assert!(Graph::from_record(record).is_err());
    }

    #[test]
    fn test_malformed_file_is_json_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_graph::<String>(&path).unwrap_err();
        assert!(matches!(err, GraphError::Json(_)));
        assert_eq!(err.exit_code(), crate::error::ExitCode::Failure);
    }
}
