//! A loaded graph plus everything the commands need around it.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::config::WordGraphConfig;
use crate::graph::WordGraph;
use crate::query::{self, BridgeResponse, GenerateResponse, PathResponse, WalkResponse};
use crate::render::{graph_description, write_walk, GraphRenderer, GraphvizRenderer};

/// Owns the graph, the random source and the output collaborators.
///
/// Rendering and walk-file failures are logged and never interrupt a command.
pub struct Session {
    pub graph: WordGraph,
    pub config: WordGraphConfig,
    rng: StdRng,
    renderer: Option<Box<dyn GraphRenderer>>,
}

impl Session {
    pub fn new(graph: WordGraph, config: WordGraphConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let renderer: Option<Box<dyn GraphRenderer>> = if config.render {
            Some(Box::new(GraphvizRenderer::new(
                PathBuf::from("."),
                config.dot_command.clone(),
            )))
        } else {
            None
        };
        Self {
            graph,
            config,
            rng,
            renderer,
        }
    }

    /// Replace the renderer (or disable rendering with `None`).
    pub fn with_renderer(mut self, renderer: Option<Box<dyn GraphRenderer>>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Render the whole graph, optionally highlighting a path.
    pub fn render_graph(&self, highlight: Option<&[String]>) -> Option<PathBuf> {
        let renderer = self.renderer.as_ref()?;
        let description = graph_description(&self.graph, highlight);
        match renderer.render(&description, &self.config.graph_name) {
            Ok(path) => Some(path),
            Err(e) => {
                warn!(error = %e, "graph rendering skipped");
                None
            }
        }
    }

    pub fn bridge(&self, word1: &str, word2: &str) -> BridgeResponse {
        query::query_bridge_words(&self.graph, word1, word2)
    }

    pub fn generate(&mut self, text: &str) -> GenerateResponse {
        query::generate_text(&self.graph, text, &mut self.rng)
    }

    /// Shortest path; a found path is also rendered highlighted on the graph.
    pub fn shortest_path(&mut self, from: &str, to: &str) -> PathResponse {
        let response = query::calc_shortest_path(&self.graph, from, to);
        if let Some(found) = response.path() {
            if let Some(file) = self.render_graph(Some(&found.path)) {
                info!(file = %file.display(), "shortest path highlighted");
            }
        }
        response
    }

    /// Random walk, also written to the configured walk output.
    pub fn walk(&mut self) -> WalkResponse {
        let response = query::random_walk(&self.graph, &mut self.rng);
        if let Some(walk) = response.walk() {
            if let Err(e) = write_walk(&self.config.walk_output, walk) {
                warn!(
                    error = %e,
                    file = %self.config.walk_output.display(),
                    "failed to write walk"
                );
            }
        }
        response
    }
}
