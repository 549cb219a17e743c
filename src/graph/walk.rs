//! Random walk that never revisits a vertex.

use petgraph::graph::NodeIndex;
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::debug;

use super::engine::WordGraph;
use crate::error::{GraphError, Result};

impl WordGraph {
    /// Walk the graph from a uniformly random vertex.
    ///
    /// At each step the next vertex is drawn uniformly from the unvisited
    /// successors of the current one. The walk stops at a vertex with no
    /// outgoing edges, or when every successor has already been visited.
    /// No vertex appears twice, so the walk has at most `vertex_count()` entries.
    ///
    /// # Errors
    /// `EmptyGraph` if there is no vertex to start from.
    pub fn random_walk<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<String>> {
        let vertices: Vec<NodeIndex> = self.node_indices().collect();
        let &start = vertices.choose(rng).ok_or(GraphError::EmptyGraph)?;
        Ok(self.walk_from(start, rng))
    }

    /// Same as [`WordGraph::random_walk`] but starting at `start`.
    ///
    /// # Errors
    /// `UnknownWord` if `start` is not a vertex.
    pub fn random_walk_from<R: Rng + ?Sized>(
        &self,
        start: &str,
        rng: &mut R,
    ) -> Result<Vec<String>> {
        let start = self
            .node_index(start)
            .ok_or_else(|| GraphError::unknown([start]))?;
        Ok(self.walk_from(start, rng))
    }

    fn walk_from<R: Rng + ?Sized>(&self, start: NodeIndex, rng: &mut R) -> Vec<String> {
        let mut visited = vec![false; self.node_bound()];
        let mut walk = Vec::new();
        let mut current = start;

        loop {
            visited[current.index()] = true;
            walk.push(self.word(current).to_owned());

            let successors = self.successors(current);
            if successors.is_empty() {
                debug!(steps = walk.len(), "walk reached a sink");
                break;
            }
            let unvisited: Vec<NodeIndex> = successors
                .into_iter()
                .map(|(target, _)| target)
                .filter(|target| !visited[target.index()])
                .collect();
            match unvisited.choose(rng) {
                Some(&next) => current = next,
                None => {
                    debug!(steps = walk.len(), "walk hit a fully visited neighborhood");
                    break;
                }
            }
        }

        walk
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::builder::GraphBuilder;
    use crate::GraphError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_empty_graph() {
        let graph = crate::WordGraph::new();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(graph.random_walk(&mut rng), Err(GraphError::EmptyGraph)));
    }

    #[test]
    fn test_chain_is_followed_to_sink() {
        let graph = GraphBuilder::build(&["one", "two", "three", "four"]);
        let mut rng = StdRng::seed_from_u64(7);
        let walk = graph.random_walk_from("one", &mut rng).unwrap();
        assert_eq!(walk, vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn test_sink_start_is_single_vertex() {
        let graph = GraphBuilder::build(&["one", "two"]);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(graph.random_walk_from("two", &mut rng).unwrap(), vec!["two"]);
    }

    #[test]
    fn test_cycle_stops_before_repeat() {
        let graph = GraphBuilder::build(&["a", "b", "c", "a"]);
        let mut rng = StdRng::seed_from_u64(3);
        let walk = graph.random_walk_from("b", &mut rng).unwrap();
        assert_eq!(walk, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_no_repeats_and_bounded() {
        let text = "the quick brown fox jumps over the lazy dog and the dog barks at the fox \
                    while the quick cat watches the lazy fox jump over the brown dog";
        let graph = crate::build_graph_from_text(text);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let walk = graph.random_walk(&mut rng).unwrap();
            let unique: HashSet<&String> = walk.iter().collect();
            assert_eq!(unique.len(), walk.len(), "walk repeated a vertex: {:?}", walk);
            assert!(walk.len() <= graph.vertex_count());
            for pair in walk.windows(2) {
                assert!(graph.weight(&pair[0], &pair[1]).is_some());
            }
        }
    }

    #[test]
    fn test_start_is_drawn_from_all_vertices() {
        // "b" is a sink and must still be a possible start
        let graph = crate::build_graph_from_text("a b");
        let starts: HashSet<String> = (0..64)
            .map(|seed| {
                let walk = graph.random_walk(&mut StdRng::seed_from_u64(seed)).unwrap();
                walk[0].clone()
            })
            .collect();
        assert_eq!(starts, HashSet::from(["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_next_step_is_drawn_from_all_successors() {
        let graph = GraphBuilder::build(&["a", "b", "a", "c"]);
        let seconds: HashSet<String> = (0..64)
            .map(|seed| {
                let walk = graph
                    .random_walk_from("a", &mut StdRng::seed_from_u64(seed))
                    .unwrap();
                walk[1].clone()
            })
            .collect();
        assert_eq!(seconds, HashSet::from(["b".to_string(), "c".to_string()]));
    }

    #[test]
    fn test_seeded_walk_is_reproducible() {
        let graph = crate::build_graph_from_text("a b c a c b a d b d c d a");
        let first = graph.random_walk(&mut StdRng::seed_from_u64(99)).unwrap();
        let second = graph.random_walk(&mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_start() {
        let graph = GraphBuilder::build(&["a", "b"]);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            graph.random_walk_from("zzz", &mut rng),
            Err(GraphError::UnknownWord { .. })
        ));
    }
}
