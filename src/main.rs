//! Bullseye entry point
//!
//! Parses the command line, plays the requested number of games and prints
//! the mean score.

use std::num::NonZeroU32;

use bullseye::{RunConfig, run};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bullseye", version, about, long_about = None)]
struct Cli {
    /// Seed for random number generation (ignored if not a non-negative integer)
    #[arg(long)]
    seed: Option<String>,

    /// Number of games to run [default: 100000]
    #[arg(long)]
    games: Option<NonZeroU32>,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = RunConfig::from_options(cli.seed.as_deref(), cli.games);
    let summary = run(&config);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("exp(pi/4) approx equal to {}", summary.estimate());
    }
    Ok(())
}
