use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for waygraph
pub fn waygraph() -> Command {
    cargo_bin_cmd!("waygraph")
}

/// A -> B (1), B -> D (1), A -> C (5), C -> D (1); D is a sink
pub const DIAMOND: &str = r#"{
  "root": "A",
  "vertices": [
    ["A", { "adjacent": [["B", 1.0], ["C", 5.0]] }],
    ["B", { "adjacent": [["D", 1.0]] }],
    ["C", { "adjacent": [["D", 1.0]] }],
    ["D", { "heuristic": 10.0 }]
  ]
}"#;

/// Two undirected components: a <-> b <-> c and x <-> y
pub const ISLANDS: &str = r#"{
  "root": "a",
  "vertices": [
    ["a", { "adjacent": [["b", 1.0]] }],
    ["b", { "adjacent": [["a", 1.0], ["c", 1.0]] }],
    ["c", { "adjacent": [["b", 1.0]] }],
    ["x", { "heuristic": 2.0, "adjacent": [["y", 1.0]] }],
    ["y", { "heuristic": 3.0, "adjacent": [["x", 1.0]] }]
  ]
}"#;

/// Write a graph file into `dir` and return its path
pub fn write_graph(dir: &Path, name: &str, json: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, json).unwrap();
    path
}

/// Parse stdout as JSON
#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}
