//! Single-source shortest path (Dijkstra) over edge weights.

use petgraph::graph::NodeIndex;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tracing::debug;

use super::engine::WordGraph;
use super::types::ShortestPath;
use crate::error::{GraphError, Result};

impl WordGraph {
    /// Cheapest path from `from` to `to`, where each edge costs its weight.
    ///
    /// Ties between equally cheap paths are settled by frontier pop order
    /// (distance, then node insertion order), so a given graph always yields
    /// the same path. `from == to` yields `[from]` with weight 0.
    ///
    /// # Errors
    /// - `UnknownWord` if either word is not a vertex.
    /// - `NoPath` if `to` is unreachable from `from`.
    pub fn shortest_path(&self, from: &str, to: &str) -> Result<ShortestPath> {
        let (source, target) = match (self.node_index(from), self.node_index(to)) {
            (Some(source), Some(target)) => (source, target),
            (source, target) => {
                let mut missing = Vec::new();
                if source.is_none() {
                    missing.push(from);
                }
                if target.is_none() && from != to {
                    missing.push(to);
                }
                return Err(GraphError::unknown(missing));
            }
        };

        let n = self.node_bound();
        let mut dist: Vec<Option<u64>> = vec![None; n];
        let mut prev: Vec<Option<NodeIndex>> = vec![None; n];
        // Duplicate entries instead of decrease-key; stale pops are skipped.
        let mut frontier: BinaryHeap<Reverse<(u64, NodeIndex)>> = BinaryHeap::new();

        dist[source.index()] = Some(0);
        frontier.push(Reverse((0, source)));
        let mut relaxations = 0usize;

        while let Some(Reverse((d, node))) = frontier.pop() {
            if node == target {
                break;
            }
            if dist[node.index()].is_some_and(|best| d > best) {
                continue;
            }
            for (next, weight) in self.successors(node) {
                let candidate = d + u64::from(weight);
                if dist[next.index()].map_or(true, |best| candidate < best) {
                    dist[next.index()] = Some(candidate);
                    prev[next.index()] = Some(node);
                    frontier.push(Reverse((candidate, next)));
                    relaxations += 1;
                }
            }
        }

        let Some(total_weight) = dist[target.index()] else {
            debug!(from, to, relaxations, "target unreachable");
            return Err(GraphError::NoPath {
                from: from.to_owned(),
                to: to.to_owned(),
            });
        };

        let mut indices = vec![target];
        let mut current = target;
        while let Some(p) = prev[current.index()] {
            indices.push(p);
            current = p;
        }
        indices.reverse();

        let path: Vec<String> = indices
            .into_iter()
            .map(|idx| self.word(idx).to_owned())
            .collect();
        debug!(
            from,
            to,
            hops = path.len() - 1,
            total_weight,
            relaxations,
            "shortest path found"
        );

        Ok(ShortestPath { path, total_weight })
    }
}
