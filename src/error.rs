//! Error types for wordgraph.

use thiserror::Error;

/// Everything that can go wrong while building or querying a word graph.
///
/// Query failures (`UnknownWord`, `NoPath`, `EmptyGraph`, `EmptyInput`) are
/// ordinary outcomes that callers report and move on from.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("word(s) not in the graph: {}", .words.join(", "))]
    UnknownWord { words: Vec<String> },

    #[error("no path from {from} to {to}")]
    NoPath { from: String, to: String },

    #[error("the graph is empty")]
    EmptyGraph,

    #[error("input text contains no words")]
    EmptyInput,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(String),

    #[error("render failed: {0}")]
    Render(String),
}

impl GraphError {
    /// Build an `UnknownWord` error from the words that failed a membership check.
    pub fn unknown<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        GraphError::UnknownWord {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

/// Result type alias for wordgraph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
