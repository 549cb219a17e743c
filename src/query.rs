//! Query API: the user-facing wrappers around the graph operations.
//!
//! Each function returns a serializable response whose `Display` is the
//! message shown to a person. Failures are part of the response, never a panic.

use rand::Rng;
use serde::Serialize;
use std::fmt;

use crate::error::GraphError;
use crate::generate::generate_new_text;
use crate::graph::{ShortestPath, WordGraph};

// ─── Bridge words ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BridgeOutcome {
    /// One or both words never appeared in the training text.
    UnknownWord { missing: Vec<String> },
    /// Both words are known but nothing links them.
    NoBridge,
    /// Sorted bridge words.
    Found { bridges: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BridgeResponse {
    pub word1: String,
    pub word2: String,
    #[serde(flatten)]
    pub outcome: BridgeOutcome,
}

/// Look up bridge words, telling unknown words apart from "no bridge".
pub fn query_bridge_words(graph: &WordGraph, word1: &str, word2: &str) -> BridgeResponse {
    let missing = missing_words(graph, &[word1, word2]);
    let outcome = if !missing.is_empty() {
        BridgeOutcome::UnknownWord { missing }
    } else {
        let bridges: Vec<String> = graph.find_bridge_words(word1, word2).into_iter().collect();
        if bridges.is_empty() {
            BridgeOutcome::NoBridge
        } else {
            BridgeOutcome::Found { bridges }
        }
    };

    BridgeResponse {
        word1: word1.to_owned(),
        word2: word2.to_owned(),
        outcome,
    }
}

impl fmt::Display for BridgeResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w1, w2) = (&self.word1, &self.word2);
        match &self.outcome {
            BridgeOutcome::UnknownWord { missing } if missing.len() == 1 => {
                write!(f, "No \"{}\" in the graph!", missing[0])
            }
            BridgeOutcome::UnknownWord { .. } => {
                write!(f, "No \"{}\" or \"{}\" in the graph!", w1, w2)
            }
            BridgeOutcome::NoBridge => write!(f, "No bridge words from {} to {}!", w1, w2),
            BridgeOutcome::Found { bridges } if bridges.len() == 1 => {
                write!(f, "The bridge word from {} to {} is: {}.", w1, w2, bridges[0])
            }
            BridgeOutcome::Found { bridges } => {
                let (last, rest) = bridges.split_last().ok_or(fmt::Error)?;
                write!(
                    f,
                    "The bridge words from {} to {} are: {} and {}.",
                    w1,
                    w2,
                    rest.join(", "),
                    last
                )
            }
        }
    }
}

// ─── Shortest path ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PathOutcome {
    Found(ShortestPath),
    UnknownWord { missing: Vec<String> },
    NoPath,
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResponse {
    pub from: String,
    pub to: String,
    #[serde(flatten)]
    pub outcome: PathOutcome,
}

impl PathResponse {
    pub fn path(&self) -> Option<&ShortestPath> {
        match &self.outcome {
            PathOutcome::Found(path) => Some(path),
            _ => None,
        }
    }
}

/// Compute the shortest path between two words.
pub fn calc_shortest_path(graph: &WordGraph, from: &str, to: &str) -> PathResponse {
    let outcome = match graph.shortest_path(from, to) {
        Ok(path) => PathOutcome::Found(path),
        Err(GraphError::UnknownWord { words }) => PathOutcome::UnknownWord { missing: words },
        Err(GraphError::NoPath { .. }) => PathOutcome::NoPath,
        Err(e) => PathOutcome::Failed {
            error: e.to_string(),
        },
    };
    PathResponse {
        from: from.to_owned(),
        to: to.to_owned(),
        outcome,
    }
}

impl fmt::Display for PathResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            PathOutcome::Found(path) => write!(f, "{}", path),
            PathOutcome::UnknownWord { missing } => {
                let quoted: Vec<String> = missing.iter().map(|w| format!("\"{}\"", w)).collect();
                write!(f, "No {} in the graph!", quoted.join(" or "))
            }
            PathOutcome::NoPath => write!(f, "No path from {} to {}!", self.from, self.to),
            PathOutcome::Failed { error } => write!(f, "Error: {}", error),
        }
    }
}

// ─── Text generation ────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GenerateOutcome {
    Found { output: String },
    /// The input had no words.
    EmptyInput,
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateResponse {
    pub input: String,
    #[serde(flatten)]
    pub outcome: GenerateOutcome,
}

impl GenerateResponse {
    pub fn output(&self) -> Option<&str> {
        match &self.outcome {
            GenerateOutcome::Found { output } => Some(output.as_str()),
            _ => None,
        }
    }
}

/// Augment `text` with bridge words.
pub fn generate_text<R: Rng + ?Sized>(
    graph: &WordGraph,
    text: &str,
    rng: &mut R,
) -> GenerateResponse {
    let outcome = match generate_new_text(graph, text, rng) {
        Ok(output) => GenerateOutcome::Found { output },
        Err(GraphError::EmptyInput) => GenerateOutcome::EmptyInput,
        Err(e) => GenerateOutcome::Failed {
            error: e.to_string(),
        },
    };
    GenerateResponse {
        input: text.to_owned(),
        outcome,
    }
}

impl fmt::Display for GenerateResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            GenerateOutcome::Found { output } => write!(f, "{}", output),
            GenerateOutcome::EmptyInput => write!(f, "Please enter at least one word."),
            GenerateOutcome::Failed { error } => write!(f, "Error: {}", error),
        }
    }
}

// ─── Random walk ────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WalkOutcome {
    Found { walk: Vec<String> },
    /// No vertex to start from.
    EmptyGraph,
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalkResponse {
    #[serde(flatten)]
    pub outcome: WalkOutcome,
}

impl WalkResponse {
    pub fn walk(&self) -> Option<&[String]> {
        match &self.outcome {
            WalkOutcome::Found { walk } => Some(walk.as_slice()),
            _ => None,
        }
    }
}

/// Random walk from a random vertex.
pub fn random_walk<R: Rng + ?Sized>(graph: &WordGraph, rng: &mut R) -> WalkResponse {
    let outcome = match graph.random_walk(rng) {
        Ok(walk) => WalkOutcome::Found { walk },
        Err(GraphError::EmptyGraph) => WalkOutcome::EmptyGraph,
        Err(e) => WalkOutcome::Failed {
            error: e.to_string(),
        },
    };
    WalkResponse { outcome }
}

impl fmt::Display for WalkResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            WalkOutcome::Found { walk } => write!(f, "{}", walk.join(" ")),
            WalkOutcome::EmptyGraph => write!(f, "The graph is empty."),
            WalkOutcome::Failed { error } => write!(f, "Error: {}", error),
        }
    }
}

// ─── Helpers ────────────────────────────────────────────────────

fn missing_words(graph: &WordGraph, words: &[&str]) -> Vec<String> {
    let mut missing: Vec<String> = Vec::new();
    for &word in words {
        if !graph.has_vertex(word) && !missing.iter().any(|m| m == word) {
            missing.push(word.to_owned());
        }
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixture() -> WordGraph {
        GraphBuilder::build(&["the", "dog", "chases", "the", "cat", "the", "cat", "runs"])
    }

    #[test]
    fn test_bridge_messages() {
        let graph = fixture();

        let found = query_bridge_words(&graph, "the", "runs");
        assert_eq!(
            found.outcome,
            BridgeOutcome::Found { bridges: vec!["cat".to_string()] }
        );
        assert_eq!(found.to_string(), "The bridge word from the to runs is: cat.");

        let none = query_bridge_words(&graph, "dog", "cat");
        assert_eq!(none.outcome, BridgeOutcome::NoBridge);
        assert_eq!(none.to_string(), "No bridge words from dog to cat!");

        let unknown = query_bridge_words(&graph, "the", "unicorn");
        assert_eq!(unknown.to_string(), "No \"unicorn\" in the graph!");

        let both = query_bridge_words(&graph, "ghost", "unicorn");
        assert_eq!(both.to_string(), "No \"ghost\" or \"unicorn\" in the graph!");
    }

    #[test]
    fn test_bridge_message_many() {
        let graph = GraphBuilder::build(&[
            "go", "to", "town", "go", "into", "town", "go", "around", "town",
        ]);
        let response = query_bridge_words(&graph, "go", "town");
        assert_eq!(
            response.to_string(),
            "The bridge words from go to town are: around, into and to."
        );
    }

    #[test]
    fn test_bridge_json() {
        let graph = fixture();
        let json = serde_json::to_value(query_bridge_words(&graph, "the", "runs")).unwrap();
        assert_eq!(json["status"], "found");
        assert_eq!(json["bridges"][0], "cat");
        assert_eq!(json["word1"], "the");
    }

    #[test]
    fn test_path_messages() {
        let graph = fixture();
        let found = calc_shortest_path(&graph, "the", "runs");
        assert!(found.path().is_some());
        assert_eq!(found.to_string(), "the -> cat -> runs (total weight: 3)");

        let no_path = calc_shortest_path(&graph, "runs", "dog");
        assert_eq!(no_path.outcome, PathOutcome::NoPath);
        let json = serde_json::to_value(&no_path).unwrap();
        assert_eq!(json["status"], "no_path");
        assert_eq!(no_path.to_string(), "No path from runs to dog!");

        let unknown = calc_shortest_path(&graph, "ghost", "unicorn");
        assert_eq!(unknown.to_string(), "No \"ghost\" or \"unicorn\" in the graph!");
    }

    #[test]
    fn test_path_json() {
        let graph = fixture();
        let json = serde_json::to_value(calc_shortest_path(&graph, "the", "runs")).unwrap();
        assert_eq!(json["status"], "found");
        assert_eq!(json["total_weight"], 3);
        assert_eq!(json["path"][1], "cat");
    }

    #[test]
    fn test_generate_messages() {
        let graph = fixture();
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(generate_text(&graph, "the runs", &mut rng).to_string(), "the cat runs");
        let empty = generate_text(&graph, "", &mut rng);
        assert_eq!(empty.outcome, GenerateOutcome::EmptyInput);
        assert_eq!(empty.output(), None);
        assert_eq!(empty.to_string(), "Please enter at least one word.");
    }

    #[test]
    fn test_generate_json_carries_status() {
        let graph = fixture();
        let mut rng = StdRng::seed_from_u64(5);
        let found = serde_json::to_value(generate_text(&graph, "the runs", &mut rng)).unwrap();
        assert_eq!(found["status"], "found");
        assert_eq!(found["output"], "the cat runs");

        let empty = serde_json::to_value(generate_text(&graph, "   ", &mut rng)).unwrap();
        assert_eq!(empty["status"], "empty_input");
        assert_eq!(empty["input"], "   ");
    }

    #[test]
    fn test_walk_messages() {
        let mut rng = StdRng::seed_from_u64(5);
        let empty = random_walk(&WordGraph::new(), &mut rng);
        assert_eq!(empty.outcome, WalkOutcome::EmptyGraph);
        assert_eq!(empty.walk(), None);
        assert_eq!(empty.to_string(), "The graph is empty.");

        let graph = GraphBuilder::build(&["only", "edge"]);
        let response = random_walk(&graph, &mut rng);
        let walk = response.walk().unwrap();
        assert!(!walk.is_empty());
        assert_eq!(response.to_string(), walk.join(" "));
    }

    #[test]
    fn test_walk_json_carries_status() {
        let mut rng = StdRng::seed_from_u64(5);
        let empty = serde_json::to_value(random_walk(&WordGraph::new(), &mut rng)).unwrap();
        assert_eq!(empty["status"], "empty_graph");

        let graph = GraphBuilder::build(&["only", "edge"]);
        let found = serde_json::to_value(random_walk(&graph, &mut rng)).unwrap();
        assert_eq!(found["status"], "found");
        assert!(found["walk"].as_array().is_some_and(|walk| !walk.is_empty()));
    }
}
