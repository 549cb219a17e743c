//! The core graph store for wordgraph.
//!
//! Uses petgraph to store word adjacency and provides read-only
//! query primitives that the analysis operations build on.

use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

use super::types::*;

/// The word adjacency graph: vertices are words, edge weights count how
/// often one word immediately followed another.
///
/// Built once by [`super::builder::GraphBuilder`] and read-only afterwards.
/// Vertices are stored in first-occurrence order, which is the iteration
/// order of [`WordGraph::all_vertices`].
#[derive(Debug, Clone)]
pub struct WordGraph {
    /// The directed graph storing word transitions.
    graph: DiGraph<NodeData, EdgeData>,
    /// Index: word -> node index.
    word_index: HashMap<String, NodeIndex>,
    /// Index: (source, target) -> edge index, so repeated pairs bump one edge.
    edge_index: HashMap<(NodeIndex, NodeIndex), EdgeIndex>,
}

impl WordGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            word_index: HashMap::new(),
            edge_index: HashMap::new(),
        }
    }

    // ─── Construction (builder only) ────────────────────────────

    /// Add a word vertex, or return the existing one.
    pub(crate) fn add_word(&mut self, word: &str) -> NodeIndex {
        if let Some(&idx) = self.word_index.get(word) {
            return idx;
        }
        let idx = self.graph.add_node(NodeData::new(word.to_owned()));
        self.word_index.insert(word.to_owned(), idx);
        idx
    }

    /// Record one more observation of `from` followed by `to`.
    pub(crate) fn increment_edge(&mut self, from: NodeIndex, to: NodeIndex) {
        match self.edge_index.get(&(from, to)) {
            Some(&edge) => self.graph[edge].weight += 1,
            None => {
                let edge = self.graph.add_edge(from, to, EdgeData::new(1));
                self.edge_index.insert((from, to), edge);
            }
        }
    }

    // ─── Internal accessors for the algorithms ──────────────────

    pub(crate) fn node_index(&self, word: &str) -> Option<NodeIndex> {
        self.word_index.get(word).copied()
    }

    pub(crate) fn word(&self, idx: NodeIndex) -> &str {
        &self.graph[idx].word
    }

    pub(crate) fn node_bound(&self) -> usize {
        self.graph.node_count()
    }

    pub(crate) fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub(crate) fn has_edge(&self, from: NodeIndex, to: NodeIndex) -> bool {
        self.edge_index.contains_key(&(from, to))
    }

    /// Outgoing `(target, weight)` pairs in the order the edges were first seen.
    pub(crate) fn successors(&self, idx: NodeIndex) -> Vec<(NodeIndex, u32)> {
        let mut out: Vec<(EdgeIndex, NodeIndex, u32)> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|edge| (edge.id(), edge.target(), edge.weight().weight))
            .collect();
        // petgraph walks outgoing edges newest-first
        out.sort_by_key(|(edge, _, _)| edge.index());
        out.into_iter()
            .map(|(_, target, weight)| (target, weight))
            .collect()
    }

    // ─── Query Operations ───────────────────────────────────────

    /// Whether `word` appeared anywhere in the training text (as source or target).
    pub fn has_vertex(&self, word: &str) -> bool {
        self.word_index.contains_key(word)
    }

    /// Outgoing neighbors of `word` with their weights, sorted by word.
    ///
    /// Empty when `word` has no outgoing edges or is not in the graph.
    pub fn neighbors_of(&self, word: &str) -> BTreeMap<&str, u32> {
        let Some(idx) = self.node_index(word) else {
            return BTreeMap::new();
        };
        self.graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|edge| (self.word(edge.target()), edge.weight().weight))
            .collect()
    }

    /// Weight of the edge `from -> to`, if it exists.
    pub fn weight(&self, from: &str, to: &str) -> Option<u32> {
        let from = self.node_index(from)?;
        let to = self.node_index(to)?;
        self.edge_index
            .get(&(from, to))
            .map(|&edge| self.graph[edge].weight)
    }

    /// Every vertex, including sink-only ones, in first-occurrence order.
    pub fn all_vertices(&self) -> impl Iterator<Item = &str> + '_ {
        self.graph.node_weights().map(|node| node.word.as_str())
    }

    /// Every edge, grouped by source in first-occurrence order.
    pub fn edges(&self) -> Vec<WeightedEdge<'_>> {
        self.graph
            .node_indices()
            .flat_map(|source| {
                self.successors(source)
                    .into_iter()
                    .map(move |(target, weight)| WeightedEdge {
                        source: self.word(source),
                        target: self.word(target),
                        weight,
                    })
            })
            .collect()
    }

    /// Number of distinct successors of `word` (0 if unknown).
    pub fn out_degree(&self, word: &str) -> usize {
        self.node_index(word)
            .map(|idx| self.graph.edges_directed(idx, Direction::Outgoing).count())
            .unwrap_or(0)
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Owned snapshot of the adjacency structure: source -> (target -> weight).
    ///
    /// Sink-only vertices do not appear as keys.
    pub fn to_adjacency(&self) -> BTreeMap<String, BTreeMap<String, u32>> {
        let mut adjacency: BTreeMap<String, BTreeMap<String, u32>> = BTreeMap::new();
        for edge in self.edges() {
            adjacency
                .entry(edge.source.to_owned())
                .or_default()
                .insert(edge.target.to_owned(), edge.weight);
        }
        adjacency
    }

    // ─── Stats ──────────────────────────────────────────────────

    /// Get graph statistics.
    pub fn stats(&self) -> GraphStats {
        let total_weight = self
            .graph
            .edge_weights()
            .map(|edge| u64::from(edge.weight))
            .sum();
        let sink_count = self
            .graph
            .node_indices()
            .filter(|&idx| {
                self.graph
                    .edges_directed(idx, Direction::Outgoing)
                    .next()
                    .is_none()
            })
            .count();

        let stats = GraphStats {
            vertex_count: self.vertex_count(),
            edge_count: self.edge_count(),
            total_weight,
            sink_count,
        };
        debug!(?stats, "computed graph stats");
        stats
    }
}

impl Default for WordGraph {
    fn default() -> Self {
        Self::new()
    }
}
