//! Bridge words: `b` bridges `word1` to `word2` when both
//! `word1 -> b` and `b -> word2` are edges.

use std::collections::BTreeSet;
use tracing::debug;

use super::engine::WordGraph;

impl WordGraph {
    /// All bridge words from `word1` to `word2`, sorted.
    ///
    /// Returns an empty set both when no bridge exists and when either word
    /// is not in the graph; check [`WordGraph::has_vertex`] to tell them apart.
    /// Edge weights play no part in qualification.
    pub fn find_bridge_words(&self, word1: &str, word2: &str) -> BTreeSet<String> {
        let (Some(from), Some(to)) = (self.node_index(word1), self.node_index(word2)) else {
            return BTreeSet::new();
        };

        let bridges: BTreeSet<String> = self
            .successors(from)
            .into_iter()
            .filter(|&(middle, _)| self.has_edge(middle, to))
            .map(|(middle, _)| self.word(middle).to_owned())
            .collect();

        debug!(word1, word2, found = bridges.len(), "bridge word lookup");
        bridges
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::builder::GraphBuilder;

    fn fixture() -> crate::WordGraph {
        GraphBuilder::build(&["the", "dog", "chases", "the", "cat", "the", "cat", "runs"])
    }

    #[test]
    fn test_bridge_found() {
        let graph = fixture();
        let bridges = graph.find_bridge_words("the", "runs");
        assert_eq!(bridges.into_iter().collect::<Vec<_>>(), vec!["cat"]);
    }

    #[test]
    fn test_multiple_bridges_sorted() {
        let graph = GraphBuilder::build(&[
            "go", "to", "town", "go", "into", "town", "go", "at", "home",
        ]);
        let bridges: Vec<String> = graph.find_bridge_words("go", "town").into_iter().collect();
        assert_eq!(bridges, vec!["into", "to"]);
    }

    #[test]
    fn test_no_bridge_between_known_words() {
        let graph = fixture();
        assert!(graph.find_bridge_words("dog", "cat").is_empty());
        // direct edge is not a bridge
        assert!(graph.find_bridge_words("the", "cat").is_empty());
    }

    #[test]
    fn test_unknown_words_yield_empty() {
        let graph = fixture();
        assert!(graph.find_bridge_words("the", "unicorn").is_empty());
        assert!(graph.find_bridge_words("unicorn", "runs").is_empty());
    }

    #[test]
    fn test_sink_target_is_valid() {
        // "runs" never has outgoing edges but is still a vertex
        let graph = fixture();
        assert!(graph.has_vertex("runs"));
        assert!(!graph.find_bridge_words("the", "runs").is_empty());
    }

    #[test]
    fn test_self_bridge_via_cycle() {
        let graph = GraphBuilder::build(&["a", "b", "a"]);
        let bridges: Vec<String> = graph.find_bridge_words("a", "a").into_iter().collect();
        assert_eq!(bridges, vec!["b"]);
    }
}
