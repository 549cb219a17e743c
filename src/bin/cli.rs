//! wordgraph CLI - word adjacency graphs from plain text.
//!
//! Usage:
//!   wordgraph                       # Interactive menu over text.txt
//!   wordgraph -i corpus.txt show    # Adjacency listing
//!   wordgraph bridge <w1> <w2>      # Bridge words
//!   wordgraph generate <text...>    # Insert bridge words into text
//!   wordgraph path <from> <to>      # Shortest weighted path
//!   wordgraph walk                  # Random walk, written to a file
//!   wordgraph stats                 # Graph statistics

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use std::fmt::Display;
use std::io;
use tracing::{error, info};

use wordgraph::cli::{repl, Cli, Commands, Session};
use wordgraph::render::{adjacency_listing, graph_description};
use wordgraph::{build_graph_from_file, WordGraph, WordGraphConfig};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Tracing goes to stderr so stdout only carries results.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut config = WordGraphConfig::load(&cli.config);
    if let Some(input) = cli.input {
        config.input = input;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.no_render {
        config.render = false;
    }

    // An unreadable input is reported once; queries then see an empty graph.
    let graph = match build_graph_from_file(&config.input) {
        Ok(graph) => graph,
        Err(e) => {
            error!(file = %config.input.display(), error = %e, "cannot read input text");
            eprintln!("Cannot read {}: {}", config.input.display(), e);
            WordGraph::new()
        }
    };
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph ready"
    );

    let json = cli.json;
    let mut session = Session::new(graph, config);

    match cli.command {
        Some(Commands::Bridge { word1, word2 }) => emit(json, &session.bridge(&word1, &word2))?,
        Some(Commands::Generate { text }) => emit(json, &session.generate(&text.join(" ")))?,
        Some(Commands::Path { from, to }) => emit(json, &session.shortest_path(&from, &to))?,
        Some(Commands::Walk { output }) => {
            if let Some(output) = output {
                session.config.walk_output = output;
            }
            emit(json, &session.walk())?;
        }
        Some(Commands::Show { dot }) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&session.graph.to_adjacency())?);
            } else if dot {
                print!("{}", graph_description(&session.graph, None));
            } else {
                print!("{}", adjacency_listing(&session.graph));
            }
        }
        Some(Commands::Stats) => emit(json, &session.graph.stats())?,
        Some(Commands::Repl) | None => {
            print!("{}", adjacency_listing(&session.graph));
            if let Some(file) = session.render_graph(None) {
                println!("Graph rendered to {}", file.display());
            }
            let stdin = io::stdin();
            repl::run(&mut session, stdin.lock(), io::stdout().lock())?;
        }
    }

    Ok(())
}

fn emit<T: Serialize + Display>(json: bool, response: &T) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(response)?);
    } else {
        println!("{}", response);
    }
    Ok(())
}
