//! Game simulator CLI - plays X01 legs between simulated players in memory.
//!
//! Useful for tuning skill levels and sanity-checking checkout play without
//! running the HTTP server.

mod metrics;
mod simulator;

use std::time::Instant;

use clap::Parser;
use metrics::{print_summary, summarize};
use simulator::{LegResult, PlayerSpec, Simulator, ThrowMode};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "game-simulator")]
#[command(about = "In-memory X01 darts simulator")]
struct Args {
    /// Number of legs to play
    #[arg(short, long, default_value = "1")]
    legs: u32,

    /// Starting score for every leg
    #[arg(long, default_value = "501")]
    start: u32,

    /// Player as NAME:SKILL[:twenties|nineteens]; repeat for more players
    #[arg(long = "player")]
    players: Vec<PlayerSpec>,

    /// Base seed; a random one is drawn and reported when omitted
    #[arg(long, conflicts_with = "perfect")]
    seed: Option<u64>,

    /// Every dart hits what it aims at
    #[arg(long)]
    perfect: bool,

    /// Abandon a leg after this many turns
    #[arg(long, default_value = "200")]
    max_turns: u32,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let roster = if args.players.is_empty() {
        vec![PlayerSpec::new("Alice", 32.0), PlayerSpec::new("Anthony", 50.0)]
    } else {
        args.players
    };

    let (mode, seed) = if args.perfect {
        (ThrowMode::Perfect, None)
    } else {
        let seed = args.seed.unwrap_or_else(rand::random);
        (ThrowMode::Random { seed: Some(seed) }, Some(seed))
    };
    info!(
        legs = args.legs,
        start = args.start,
        players = roster.len(),
        ?seed,
        "starting simulation"
    );

    let names: Vec<(String, f64)> = roster.iter().map(|p| (p.name.clone(), p.skill)).collect();
    let simulator = Simulator::new(args.start, roster, mode, args.max_turns);

    let started = Instant::now();
    let mut results: Vec<LegResult> = Vec::with_capacity(args.legs as usize);
    let mut errors = 0;
    for leg_no in 0..args.legs {
        match simulator.play_leg(leg_no) {
            Ok(result) => results.push(result),
            Err(e) => {
                warn!(leg = leg_no, error = %e, "leg failed");
                errors += 1;
            }
        }
    }
    info!(
        elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
        "simulation finished"
    );

    let summary = summarize(&names, &results, args.start, seed);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }

    if errors > 0 {
        return Err(format!("{errors} leg(s) failed").into());
    }
    Ok(())
}
