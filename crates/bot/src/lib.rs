// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Draw poker bot strategies.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use log::debug;
use rand::prelude::*;

use drawpoker_core::{
    Chips, Strategy, TableView,
    cards::{Card, Rank},
};

/// A bot that picks bets and discards at random.
#[derive(Debug)]
pub struct RandomBot {
    rng: StdRng,
}

impl Default for RandomBot {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomBot {
    /// Creates a bot seeded from the thread rng.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_rng(&mut rand::rng()))
    }

    /// Creates a bot with a reproducible seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl Strategy for RandomBot {
    fn bet(&mut self, view: &TableView) -> Chips {
        let choices = [
            Chips::ZERO,
            view.stack,
            view.call,
            view.pot,
            view.pot * 2,
            view.call * 2,
        ];

        // Amounts above the stack are not legal, cap them to an all in.
        let amount = choices
            .choose(&mut self.rng)
            .copied()
            .unwrap_or_default()
            .min(view.stack);

        debug!("Bot {} bets {amount}", view.player);
        amount
    }

    fn discards(&mut self, view: &TableView) -> Vec<Card> {
        let has_ace = view.hand.iter().any(|c| c.rank() == Rank::Ace);
        let max = if has_ace { 4 } else { 3 };
        let count = self.rng.random_range(0..=max);

        let mut candidates = view.hand.clone();
        if count == 4 {
            // Keep an ace.
            if let Some(pos) = candidates.iter().position(|c| c.rank() == Rank::Ace) {
                candidates.swap_remove(pos);
            }
        }

        candidates.shuffle(&mut self.rng);
        candidates.truncate(count);
        candidates
    }
}

/// A bot that always checks or calls and keeps its pairs.
#[derive(Debug, Default)]
pub struct CallingStation;

impl Strategy for CallingStation {
    fn bet(&mut self, view: &TableView) -> Chips {
        if view.can_check() {
            Chips::ZERO
        } else if view.can_call() {
            view.call
        } else {
            view.stack
        }
    }

    fn discards(&mut self, view: &TableView) -> Vec<Card> {
        let unpaired = view
            .hand
            .iter()
            .filter(|c| view.hand.iter().filter(|o| o.rank() == c.rank()).count() == 1)
            .copied()
            .collect::<Vec<_>>();

        // Draw three to a pair, otherwise keep the two highest cards.
        let mut discards = unpaired;
        discards.sort_by_key(|c| c.rank());
        discards.truncate(3);
        discards
    }
}
