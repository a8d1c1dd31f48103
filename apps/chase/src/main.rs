//! chase: command-line runner for the wolf-and-sheep pursuit simulation.
//!
//! One wolf starts at the origin and chases the nearest of N randomly
//! grazing sheep until all are eaten or the round limit is hit.  Each round
//! is appended to `pos.json` (positions) and `alive.csv` (alive counts) in
//! the output directory.

mod cli;
mod console;
mod logging;
mod settings;

#[cfg(test)]
mod tests;

use std::io;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use chase_output::{CsvWriter, JsonWriter, OutputObserver};
use chase_sim::{SimBuilder, SimStatus};

use cli::Cli;
use console::ConsoleObserver;

// ── Constants ─────────────────────────────────────────────────────────────────

const LOG_FILE:  &str = "chase.log";
const JSON_FILE: &str = "pos.json";
const CSV_FILE:  &str = "alive.csv";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(level) = cli.log {
        logging::init(level, Path::new(LOG_FILE))?;
    }

    let config = match settings::resolve(&cli, rand::random()) {
        Ok(c) => c,
        Err(e) => {
            error!("Error loading config: {e:#}");
            return Err(e);
        }
    };
    info!(
        rounds = config.round_limit,
        sheep = config.prey_count,
        spawn_limit = config.spawn_limit,
        sheep_step = config.prey_step,
        wolf_step = config.predator_step,
        seed = config.seed,
        "starting simulation"
    );

    let mut sim = SimBuilder::new(config.clone()).build()?;

    std::fs::create_dir_all(&cli.output)?;
    let writers = (
        JsonWriter::open(cli.output.join(JSON_FILE))?,
        CsvWriter::open(cli.output.join(CSV_FILE))?,
    );
    let mut obs = ConsoleObserver::new(
        OutputObserver::new(writers),
        io::stdin().lock(),
        io::stdout(),
        config.round_limit,
        cli.wait,
    );

    let t0 = Instant::now();
    let result = sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    info!(status = %result.status, rounds = result.rounds, "simulation finished");
    println!();
    match result.status {
        SimStatus::AllCaught => println!(
            "All {} sheep eaten in {} rounds ({:.3} s)",
            config.prey_count,
            result.rounds,
            elapsed.as_secs_f64()
        ),
        SimStatus::RoundLimitReached => println!(
            "Round limit {} reached with {} of {} sheep alive ({:.3} s)",
            config.round_limit,
            result.live_count,
            config.prey_count,
            elapsed.as_secs_f64()
        ),
    }
    println!("Wolf is on position: {}", result.predator);
    println!("Seed: {}", config.seed);

    Ok(())
}
