// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five card draw table engine.
//!
//! A [Table] seats players with their [Strategy](drawpoker_core::Strategy),
//! takes the ante, deals the cards, runs the betting and discard rounds and pays
//! the pot at showdown. Everything that happens at the table is sent to an
//! [EventSink], the default sink logs the events.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use std::path::PathBuf;

use drawpoker_core::Chips;

pub mod event;
pub use event::{BetAction, EventSink, LogSink, TableEvent};

pub mod table;
pub use table::{Player, Standing, Table};

/// Table configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of seats.
    pub seats: usize,
    /// Chips given to each player that joins.
    pub chips: Chips,
    /// The ante paid by each player at the start of a hand.
    pub ante: Chips,
    /// Seed for reproducible games.
    pub seed: Option<u64>,
    /// Directory with the hand rank tables, the embedded tables are used if
    /// not set.
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seats: 5,
            chips: Chips::new(500),
            ante: Chips::new(5),
            seed: None,
            data_dir: None,
        }
    }
}
