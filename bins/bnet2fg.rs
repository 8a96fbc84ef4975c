//! bnet → factor graph network
//!
//! Usage:
//!   bnet2fg ruleProb.txt 0.99 < named_bnet.out > factorGraph.fg 2> bnet2fg.log
//!   bnet2fg ruleProb.txt 0.99 --input named_bnet.out --config config/bnet.toml

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use bnet::cli::{init_tracing, read_input};
use bnet::config::Config;
use bnet::emit::{transcode, FactorGraphEmitter, OutputSink};
use bnet::probability::{parse_probability, Resolver, RuleProbabilityTable};

#[derive(Parser)]
#[command(name = "bnet2fg")]
#[command(about = "Convert a bnet file into a factor graph network")]
struct Cli {
    /// Rule probability file, one `<rule>: <probability>` per line
    rule_probs: PathBuf,
    /// Firing probability for rules missing from the rule file
    #[arg(value_parser = parse_probability)]
    default_probability: f64,
    /// Read the bnet from this file instead of stdin
    #[arg(long)]
    input: Option<PathBuf>,
    /// TOML settings file (sentinel rule, log mirroring)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = Config::load_or_default(cli.config.as_ref())?;

    let table = RuleProbabilityTable::load(&cli.rule_probs)?;
    let input = read_input(cli.input.as_deref())?;

    let resolver = Resolver::with_config(&table, cli.default_probability, &config.resolver);
    let emitter = FactorGraphEmitter::with_resolver(resolver);

    let stdout = io::stdout();
    let mut sink = OutputSink::with_logging(BufWriter::new(stdout.lock()), &config.logging);
    transcode(&input, &emitter, &mut sink)?;

    Ok(())
}
