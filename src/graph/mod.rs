//! Word graph module: the structural backbone of wordgraph.
//!
//! Provides the graph data model, the builder that folds text into it,
//! and the read-only analyses: bridge words, shortest paths and random walks.

pub mod bridge;
pub mod builder;
pub mod engine;
pub mod path;
pub mod types;
pub mod walk;

pub use builder::{build_graph_from_file, build_graph_from_text, GraphBuilder};
pub use engine::WordGraph;
pub use types::{EdgeData, GraphStats, NodeData, ShortestPath, WeightedEdge};
