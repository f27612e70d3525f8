// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Players action state during a betting round.
use ahash::AHashMap;

use crate::{Error, PlayerId, Result};

/// A player action flags.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ActionStatus {
    /// The player folded.
    pub folded: bool,
    /// The player has no chips left to bet.
    pub all_in: bool,
    /// The player matched the largest contribution.
    pub min_called: bool,
}

impl ActionStatus {
    /// Checks if the player has nothing left to do in this round.
    pub fn has_acted(&self) -> bool {
        self.folded || self.all_in || self.min_called
    }
}

/// Tracks the action status of the players in a hand.
#[derive(Debug, Default, Clone)]
pub struct ActionTracker {
    status: AHashMap<PlayerId, ActionStatus>,
}

impl ActionTracker {
    /// Starts a new hand with the given players.
    pub fn new_round(&mut self, players: &[PlayerId]) {
        self.status.clear();
        self.status
            .extend(players.iter().map(|p| (*p, ActionStatus::default())));
    }

    /// Reopens the betting after a raise, every player has to act again.
    pub fn extend_round(&mut self) {
        for status in self.status.values_mut() {
            status.min_called = false;
        }
    }

    /// Stops tracking a player.
    pub fn untrack(&mut self, player: PlayerId) -> Result<ActionStatus> {
        self.status
            .remove(&player)
            .ok_or(Error::UnknownPlayer(player))
    }

    /// A player status.
    pub fn status(&self, player: PlayerId) -> Result<ActionStatus> {
        self.status
            .get(&player)
            .copied()
            .ok_or(Error::UnknownPlayer(player))
    }

    fn status_mut(&mut self, player: PlayerId) -> Result<&mut ActionStatus> {
        self.status
            .get_mut(&player)
            .ok_or(Error::UnknownPlayer(player))
    }

    /// Marks a player as folded.
    pub fn set_folded(&mut self, player: PlayerId) -> Result<()> {
        self.status_mut(player)?.folded = true;
        Ok(())
    }

    /// Marks a player as all in.
    pub fn set_all_in(&mut self, player: PlayerId) -> Result<()> {
        self.status_mut(player)?.all_in = true;
        Ok(())
    }

    /// Marks a player as having called.
    pub fn set_min_called(&mut self, player: PlayerId) -> Result<()> {
        self.status_mut(player)?.min_called = true;
        Ok(())
    }

    /// Checks if a player has acted in this round.
    pub fn has_acted(&self, player: PlayerId) -> Result<bool> {
        self.status(player).map(|s| s.has_acted())
    }

    /// The players that haven't folded, in the given order.
    pub fn showdown_players(&self, order: &[PlayerId]) -> Vec<PlayerId> {
        order
            .iter()
            .filter(|p| self.status.get(p).is_some_and(|s| !s.folded))
            .copied()
            .collect()
    }

    /// The players that can still bet, in the given order.
    pub fn acting_players(&self, order: &[PlayerId]) -> Vec<PlayerId> {
        order
            .iter()
            .filter(|p| {
                self.status
                    .get(p)
                    .is_some_and(|s| !s.folded && !s.all_in)
            })
            .copied()
            .collect()
    }

    /// Checks if every player in the order has acted.
    pub fn is_round_complete(&self, order: &[PlayerId]) -> bool {
        order
            .iter()
            .all(|p| self.status.get(p).is_none_or(|s| s.has_acted()))
    }
}
