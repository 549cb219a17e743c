//! Configuration loaded from `wordgraph.toml`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{GraphError, Result};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "wordgraph.toml";

/// Runtime settings. Every field has a default, so an empty or partial
/// file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordGraphConfig {
    /// Training text file.
    pub input: PathBuf,
    /// Base file name for rendered graphs (`<graph_name>.dot` / `.png`).
    pub graph_name: String,
    /// Where random walks are written.
    pub walk_output: PathBuf,
    /// Fixed seed for every random choice. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Whether to hand graph descriptions to Graphviz at all.
    pub render: bool,
    /// Graphviz executable.
    pub dot_command: String,
}

impl Default for WordGraphConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("text.txt"),
            graph_name: "DirectedGraph".to_string(),
            walk_output: PathBuf::from("random_traversal.txt"),
            seed: None,
            render: true,
            dot_command: "dot".to_string(),
        }
    }
}

impl WordGraphConfig {
    /// Parse a TOML document.
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| GraphError::Config(e.to_string()))
    }

    /// Load from `path`, falling back to defaults when the file is absent
    /// or cannot be parsed.
    pub fn load(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(_) => {
                debug!(config = %path.display(), "no config file, using defaults");
                return Self::default();
            }
        };
        match Self::parse(&contents) {
            Ok(config) => {
                debug!(config = %path.display(), "config loaded");
                config
            }
            Err(e) => {
                warn!(config = %path.display(), error = %e, "ignoring invalid config");
                Self::default()
            }
        }
    }
}
