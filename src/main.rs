use anyhow::Context;
use clap::Parser;
use connplan::{ConnectionPlan, PlanError};
use std::io::{self, Read};
use std::process;
use tracing::debug;

#[derive(Parser)]
#[command(name = "connplan")]
#[command(version)]
#[command(about = "Print MongoDB connection strings for a planned deployment")]
#[command(
    long_about = "Reads one JSON deployment request on stdin and prints the \
connection strings for either a replica set or a sharded cluster."
)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read deployment request from stdin")?;
    debug!("read {} bytes from stdin", input.len());

    match ConnectionPlan::from_json(&input) {
        Ok(plan) => {
            println!("{plan}");
            Ok(())
        }
        Err(PlanError::ShardSpec(err)) => {
            eprintln!("Error parsing 'sharded': {err}");
            process::exit(1);
        }
        Err(err) => Err(err).context("failed to build connection plan"),
    }
}
