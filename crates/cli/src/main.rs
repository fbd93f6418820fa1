// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker odds CLI.
//!
//! ```bash
//! $ poker-odds --players "9d 9c, Kd Kc" --flop "Ah 9h Jd" --turn 3d
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::info;

use poker_odds_eval::{EquityConfig, EquityEngine};

mod report;
mod request;

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Cli {
    /// The players hole cards separated by commas, as in "9d 9c, Kd Kc".
    #[clap(long, short)]
    players: String,
    /// The flop cards, as in "Ah 9h Jd".
    #[clap(long, short)]
    flop: Option<String>,
    /// The turn card.
    #[clap(long, short, requires = "flop")]
    turn: Option<String>,
    /// Cards out of play.
    #[clap(long, short, default_value = "")]
    expose: String,
    /// Number of random boards sampled preflop.
    #[clap(long, default_value_t = EquityConfig::DEFAULT_SAMPLES)]
    samples: usize,
    /// Number of parallel tasks.
    #[clap(long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..=64))]
    tasks: u16,
    /// Seed for sampling preflop boards.
    #[clap(long)]
    seed: Option<u64>,
    /// Prints the results as JSON.
    #[clap(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let request = request::Request::parse(
        &cli.players,
        cli.flop.as_deref(),
        cli.turn.as_deref(),
        &cli.expose,
    )?;

    let engine = EquityEngine::new(EquityConfig {
        samples: cli.samples,
        tasks: cli.tasks as usize,
        seed: cli.seed,
    });

    let equities = engine.board_equities(&request.hands, &request.board, &request.exposed)?;
    if !equities.is_exact() {
        info!(
            "Monte Carlo estimate from {} random {} boards",
            equities.completions(),
            equities.stage()
        );
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&equities)?);
    } else {
        print!("{}", report::Report::new(&equities));
    }

    Ok(())
}
