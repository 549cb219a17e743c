//! Core types for the word graph.
//!
//! Defines the node and edge payloads stored in the graph and the
//! result structures returned by graph queries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Data stored in a graph node: the normalized word itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeData {
    /// Lowercase, alphabetic-only token. Identity of the vertex.
    pub word: String,
}

impl NodeData {
    pub fn new(word: String) -> Self {
        Self { word }
    }
}

/// Data stored on a graph edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeData {
    /// How many times the target immediately followed the source. Always >= 1.
    pub weight: u32,
}

impl EdgeData {
    pub fn new(weight: u32) -> Self {
        Self { weight }
    }
}

/// A borrowed view of one edge, as yielded by `WordGraph::edges`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeightedEdge<'a> {
    pub source: &'a str,
    pub target: &'a str,
    pub weight: u32,
}

/// A successful shortest-path answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPath {
    /// Vertices from source to target inclusive. Consecutive pairs are edges.
    pub path: Vec<String>,
    /// Sum of edge weights along `path`.
    pub total_weight: u64,
}

impl ShortestPath {
    /// Consecutive `(from, to)` pairs along the path.
    pub fn steps(&self) -> impl Iterator<Item = (&str, &str)> {
        self.path
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }
}

impl fmt::Display for ShortestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (total weight: {})",
            self.path.join(" -> "),
            self.total_weight
        )
    }
}

/// Statistics about the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub vertex_count: usize,
    pub edge_count: usize,
    /// Sum of all edge weights, i.e. the number of adjacent token pairs seen.
    pub total_weight: u64,
    /// Vertices with no outgoing edges.
    pub sink_count: usize,
}

impl fmt::Display for GraphStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vertices: {}\nEdges:    {}\nPairs:    {}\nSinks:    {}",
            self.vertex_count, self.edge_count, self.total_weight, self.sink_count
        )
    }
}
