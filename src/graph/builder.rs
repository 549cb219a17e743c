//! Graph builder: folds a token stream into the word graph.
//!
//! Reads the training text, tokenizes it, and assembles the weighted
//! adjacency graph in a single linear pass.

use std::fs;
use std::path::Path;
use tracing::{debug, info};

use super::engine::WordGraph;
use crate::error::Result;
use crate::parser::tokenize;

/// Folds adjacent token pairs into a [`WordGraph`].
///
/// Vertices are created by pairs only: a stream of zero or one tokens
/// produces an empty graph.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: WordGraph,
    pairs: usize,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observation of `from` immediately followed by `to`.
    /// Pairs with an empty side are ignored.
    pub fn add_pair(&mut self, from: &str, to: &str) -> &mut Self {
        if from.is_empty() || to.is_empty() {
            return self;
        }
        let from = self.graph.add_word(from);
        let to = self.graph.add_word(to);
        self.graph.increment_edge(from, to);
        self.pairs += 1;
        self
    }

    /// Record every adjacent pair of `tokens`.
    pub fn add_tokens<S: AsRef<str>>(&mut self, tokens: &[S]) -> &mut Self {
        for pair in tokens.windows(2) {
            self.add_pair(pair[0].as_ref(), pair[1].as_ref());
        }
        self
    }

    /// Finish building. The returned graph is read-only.
    pub fn finish(self) -> WordGraph {
        info!(
            vertices = self.graph.vertex_count(),
            edges = self.graph.edge_count(),
            pairs = self.pairs,
            "word graph built"
        );
        self.graph
    }

    /// Build a graph from an already tokenized stream.
    pub fn build<S: AsRef<str>>(tokens: &[S]) -> WordGraph {
        let mut builder = Self::new();
        builder.add_tokens(tokens);
        builder.finish()
    }
}

/// Tokenize `text` and build its word graph.
pub fn build_graph_from_text(text: &str) -> WordGraph {
    let tokens = tokenize(text);
    GraphBuilder::build(&tokens)
}

/// Read a text file and build its word graph.
///
/// Lines are joined before tokenizing, so the last word of one line is
/// adjacent to the first word of the next. Bytes that are not valid UTF-8
/// (Latin-1 accents, say) decode to replacement characters, which the
/// tokenizer treats as separators.
pub fn build_graph_from_file(path: &Path) -> Result<WordGraph> {
    debug!(file = %path.display(), "reading training text");
    let bytes = fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(build_graph_from_text(&text))
}
