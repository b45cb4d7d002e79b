//! Hegemon CLI - play a dice-driven territory conquest session in the terminal.

// Allow print in the CLI binary, and unwrap in its tests
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::Parser;
use std::process::ExitCode;

/// Hegemon - dice-driven territory conquest in the terminal
#[derive(Parser, Debug)]
#[command(name = "hegemon")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Player army color (red and green are the scripted opponents)
    #[arg(short, long, value_enum, default_value = "yellow")]
    faction: cli::PlayerColor,

    /// Random seed for a reproducible session (default: time-based)
    #[arg(short, long)]
    seed: Option<u64>,

    /// End-of-session summary format
    #[arg(long, value_enum, default_value = "text")]
    summary: cli::SummaryFormat,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Generate seed if not provided
    let seed = args.seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    });

    match cli::play::execute(args.faction.faction(), seed, args.summary) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
