// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::Parser;
use log::{error, info};
use std::path::PathBuf;

use drawpoker_bot::{CallingStation, RandomBot};
use drawpoker_core::{Chips, Strategy};
use drawpoker_table::{Config, Table};

static NICKNAMES: &[&str] = &["Alice", "Bob", "Carol", "Dave", "Frank"];

#[derive(Debug, Parser)]
struct Cli {
    /// Number of bots at the table.
    #[clap(long, short, default_value_t = 5, value_parser = clap::value_parser!(u8).range(2..=5))]
    seats: u8,
    /// How many bots always call instead of betting at random.
    #[clap(long, default_value_t = 0)]
    callers: u8,
    /// Starting chips for each bot.
    #[clap(long, short, default_value_t = 500)]
    chips: u32,
    /// The ante.
    #[clap(long, short, default_value_t = 5)]
    ante: u32,
    /// Maximum number of hands to play.
    #[clap(long, default_value_t = 1000)]
    hands: usize,
    /// Seed for a reproducible game.
    #[clap(long)]
    seed: Option<u64>,
    /// Directory with the hand rank tables.
    #[clap(long, short)]
    data_dir: Option<PathBuf>,
}

fn run(cli: Cli) -> Result<()> {
    let config = Config {
        seats: cli.seats as usize,
        chips: Chips::new(cli.chips),
        ante: Chips::new(cli.ante),
        seed: cli.seed,
        data_dir: cli.data_dir,
    };

    let mut table = Table::new(&config)?;
    for (idx, nickname) in NICKNAMES.iter().take(config.seats).enumerate() {
        let strategy: Box<dyn Strategy> = if idx < cli.callers as usize {
            Box::new(CallingStation)
        } else if let Some(seed) = cli.seed {
            Box::new(RandomBot::with_seed(seed.wrapping_add(idx as u64)))
        } else {
            Box::new(RandomBot::new())
        };

        table.join(nickname, strategy)?;
    }

    let standings = table.run(cli.hands)?;
    info!("Game ended after {} hands", table.hands_played());
    for standing in standings {
        info!("{} finished with {} chips", standing.nickname, standing.chips);
    }

    Ok(())
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(Cli::parse()) {
        error!("{e:#}");
    }
}
