//! Structural check of a causal factor graph
//!
//! Usage:
//!   causal_fg_check causal.fg
//!   causal_fg_check causal.fg --json

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use bnet::causal::{read_causal_graph, GraphSummary};
use bnet::cli::init_tracing;

#[derive(Parser)]
#[command(name = "causal_fg_check")]
#[command(about = "Read a causal factor graph and report its variables")]
struct Cli {
    /// Causal factor graph file to check
    causal_fg: PathBuf,
    /// Print the summary as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let text = std::fs::read_to_string(&cli.causal_fg)
        .with_context(|| format!("Failed to read causal graph from {:?}", cli.causal_fg))?;
    let graph = read_causal_graph(&text)
        .with_context(|| format!("Invalid causal graph {:?}", cli.causal_fg))?;
    let summary = GraphSummary::from_graph(&graph);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Factors: {}", summary.factors);
    println!(
        "  singletons={} conjunctions={} disjunctions={}",
        summary.singletons, summary.conjunctions, summary.disjunctions
    );
    println!("All variables #: {}", summary.variables);
    println!("Terminal variables #: {}", summary.terminal_variables.len());
    let terminals: Vec<String> = summary
        .terminal_variables
        .iter()
        .map(|v| v.to_string())
        .collect();
    println!("{}", terminals.join("\t"));

    Ok(())
}
