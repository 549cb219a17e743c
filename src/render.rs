//! Textual output of the graph and the collaborators that consume it.
//!
//! The graph is described as a Graphviz edge list. Turning that description
//! into an image is delegated to a [`GraphRenderer`].

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

use crate::error::{GraphError, Result};
use crate::graph::WordGraph;

/// Describe every edge as `source -> target [label="weight"];`, one per line.
///
/// When `highlight` is given, each consecutive pair on it is appended as
/// `"from" -> "to" [color=green, penwidth=2.0];`.
pub fn graph_description(graph: &WordGraph, highlight: Option<&[String]>) -> String {
    let mut out = String::new();
    for edge in graph.edges() {
        let _ = writeln!(
            out,
            "{} -> {} [label=\"{}\"];",
            edge.source, edge.target, edge.weight
        );
    }
    if let Some(path) = highlight {
        for pair in path.windows(2) {
            let _ = writeln!(
                out,
                "\"{}\" -> \"{}\" [color=green, penwidth=2.0];",
                pair[0], pair[1]
            );
        }
    }
    out
}

/// Human-readable adjacency listing: `source -> t1 t1 t2`, each target
/// repeated as many times as its weight. Sinks get no line.
pub fn adjacency_listing(graph: &WordGraph) -> String {
    let mut out = String::new();
    let mut current: Option<&str> = None;
    for edge in graph.edges() {
        if current != Some(edge.source) {
            if current.is_some() {
                out.push('\n');
            }
            let _ = write!(out, "{} ->", edge.source);
            current = Some(edge.source);
        }
        for _ in 0..edge.weight {
            let _ = write!(out, " {}", edge.target);
        }
    }
    if current.is_some() {
        out.push('\n');
    }
    out
}

/// Turns a graph description into an artifact on disk.
pub trait GraphRenderer {
    /// Render `description` under `base_name`; returns the file produced.
    fn render(&self, description: &str, base_name: &str) -> Result<PathBuf>;
}

/// Quote bare edge endpoints so words such as `node` or `graph` are not
/// parsed as DOT keywords. Lines that are already quoted pass through.
fn quote_endpoints(line: &str) -> String {
    if line.starts_with('"') {
        return line.to_owned();
    }
    let Some((source, rest)) = line.split_once(" -> ") else {
        return line.to_owned();
    };
    let Some((target, attrs)) = rest.split_once(' ') else {
        return line.to_owned();
    };
    format!("\"{}\" -> \"{}\" {}", source, target, attrs)
}

fn write_dot_file(dir: &Path, description: &str, base_name: &str) -> Result<PathBuf> {
    let dot_path = dir.join(format!("{}.dot", base_name));
    let mut contents = String::with_capacity(description.len() * 2 + 16);
    contents.push_str("digraph G {\n");
    for line in description.lines() {
        contents.push_str(&quote_endpoints(line));
        contents.push('\n');
    }
    contents.push_str("}\n");
    fs::write(&dot_path, contents)?;
    debug!(file = %dot_path.display(), "wrote dot file");
    Ok(dot_path)
}

/// Writes `<base_name>.dot` and nothing else.
#[derive(Debug, Clone)]
pub struct DotFileRenderer {
    pub dir: PathBuf,
}

impl DotFileRenderer {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl GraphRenderer for DotFileRenderer {
    fn render(&self, description: &str, base_name: &str) -> Result<PathBuf> {
        write_dot_file(&self.dir, description, base_name)
    }
}

/// Writes `<base_name>.dot`, then runs Graphviz to produce `<base_name>.png`.
#[derive(Debug, Clone)]
pub struct GraphvizRenderer {
    pub dir: PathBuf,
    /// Graphviz executable, usually `dot`.
    pub command: String,
}

impl GraphvizRenderer {
    pub fn new(dir: impl Into<PathBuf>, command: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            command: command.into(),
        }
    }
}

impl GraphRenderer for GraphvizRenderer {
    fn render(&self, description: &str, base_name: &str) -> Result<PathBuf> {
        let dot_path = write_dot_file(&self.dir, description, base_name)?;
        let png_path = self.dir.join(format!("{}.png", base_name));

        let status = Command::new(&self.command)
            .arg("-Tpng")
            .arg(&dot_path)
            .arg("-o")
            .arg(&png_path)
            .status()
            .map_err(|e| GraphError::Render(format!("failed to run {}: {}", self.command, e)))?;

        if !status.success() {
            return Err(GraphError::Render(format!(
                "{} exited with {}",
                self.command, status
            )));
        }

        info!(file = %png_path.display(), "graph image written");
        Ok(png_path)
    }
}

/// Write a random walk as space-separated words.
pub fn write_walk(path: &Path, walk: &[String]) -> Result<()> {
    let mut contents = walk.join(" ");
    contents.push('\n');
    fs::write(path, contents)?;
    info!(file = %path.display(), words = walk.len(), "random walk written");
    Ok(())
}
