// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player decisions interface.
use serde::{Deserialize, Serialize};

use drawpoker_cards::Card;

use crate::{Chips, PlayerId};

/// What a player can see when asked for a decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    /// The player asked to act.
    pub player: PlayerId,
    /// The player cards.
    pub hand: Vec<Card>,
    /// The player stack.
    pub stack: Chips,
    /// The player contribution to the pot.
    pub contribution: Chips,
    /// The chips in the pot.
    pub pot: Chips,
    /// The chips needed to call.
    pub call: Chips,
}

impl TableView {
    /// Checks if the player can check.
    pub fn can_check(&self) -> bool {
        self.call == Chips::ZERO
    }

    /// Checks if the player can call without going all in.
    pub fn can_call(&self) -> bool {
        self.call > Chips::ZERO && self.call < self.stack
    }
}

/// A player decisions provider.
pub trait Strategy {
    /// Returns the chips to add to the pot.
    ///
    /// Zero checks or folds, the call amount calls, more than that raises and
    /// the whole stack goes all in.
    fn bet(&mut self, view: &TableView) -> Chips;

    /// Returns the cards to discard from the player hand.
    fn discards(&mut self, view: &TableView) -> Vec<Card>;
}
