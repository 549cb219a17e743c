//! # wordgraph
//!
//! Builds a weighted, directed word-adjacency graph from plain text and
//! answers questions about it.
//!
//! ## Key Features
//!
//! - **Bridge words**: words `b` with `w1 -> b -> w2` in the text
//! - **Text augmentation**: splice bridge words into new text
//! - **Shortest paths**: Dijkstra over observed pair counts
//! - **Random walks**: wander the graph without revisiting a word
//!
//! ## Quick Start
//!
//! ```rust
//! use wordgraph::build_graph_from_text;
//!
//! let graph = build_graph_from_text("the dog chases the cat. the cat runs.");
//!
//! assert!(graph.find_bridge_words("the", "runs").contains("cat"));
//! let path = graph.shortest_path("the", "runs").unwrap();
//! assert_eq!(path.path, vec!["the", "cat", "runs"]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod graph;
pub mod parser;
pub mod query;
pub mod render;

// Re-exports for convenience
pub use config::WordGraphConfig;
pub use error::{GraphError, Result};

// Graph re-exports
pub use generate::generate_new_text;
pub use graph::{
    build_graph_from_file, build_graph_from_text, GraphBuilder, GraphStats, ShortestPath,
    WordGraph,
};
pub use parser::tokenize;
pub use query::{
    calc_shortest_path, generate_text, query_bridge_words, random_walk, BridgeOutcome,
    BridgeResponse, GenerateOutcome, GenerateResponse, PathOutcome, PathResponse, WalkOutcome,
    WalkResponse,
};
