//! CLI module for wordgraph.
//!
//! Commands:
//! - Query: bridge, generate, path, walk
//! - Inspect: show, stats
//! - Interactive: repl (default)

pub mod repl;
pub mod session;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use session::Session;

#[derive(Parser)]
#[command(name = "wordgraph")]
#[command(about = "Word adjacency graphs from plain text")]
#[command(version)]
pub struct Cli {
    /// Training text file (overrides the config file)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Config file
    #[arg(short, long, default_value = crate::config::CONFIG_FILE)]
    pub config: PathBuf,

    /// Seed for every random choice (reproducible output)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Do not hand graph descriptions to Graphviz
    #[arg(long)]
    pub no_render: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    // ─── Query Commands ─────────────────────────────────────────────
    /// Find bridge words between two words
    Bridge {
        word1: String,
        word2: String,
    },

    /// Insert bridge words into a piece of text
    Generate {
        /// Text to augment (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Shortest weighted path between two words
    Path {
        from: String,
        to: String,
    },

    /// Random walk from a random word, written to the walk output file
    Walk {
        /// Output file (overrides the config file)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    // ─── Inspect ────────────────────────────────────────────────────
    /// Print the adjacency listing of the graph
    Show {
        /// Print the Graphviz edge list instead
        #[arg(long)]
        dot: bool,
    },

    /// Show graph statistics
    Stats,

    // ─── Interactive ────────────────────────────────────────────────
    /// Interactive menu (default)
    Repl,
}
