// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table player types.
use ahash::AHashMap;
use std::fmt;

use drawpoker_core::{
    Error, PlayerId, Result, Strategy,
    cards::Card,
    eval::HandValue,
};

/// A table player.
pub struct Player {
    /// The player id.
    pub player_id: PlayerId,
    /// This player nickname.
    pub nickname: String,
    /// The player decisions provider.
    pub strategy: Box<dyn Strategy>,
    /// This player cards.
    pub hand: Vec<Card>,
    /// The value of this player hand.
    pub value: Option<HandValue>,
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("player_id", &self.player_id)
            .field("nickname", &self.nickname)
            .field("hand", &self.hand)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

impl Player {
    /// Creates a new player with no cards.
    pub fn new(nickname: &str, strategy: Box<dyn Strategy>) -> Self {
        Self {
            player_id: PlayerId::new_id(),
            nickname: nickname.to_string(),
            strategy,
            hand: Vec::default(),
            value: None,
        }
    }

    /// Gives cards to this player.
    pub fn set_hand(&mut self, hand: Vec<Card>, value: HandValue) {
        self.hand = hand;
        self.value = Some(value);
    }

    /// Returns this player cards.
    pub fn take_hand(&mut self) -> Vec<Card> {
        self.value = None;
        std::mem::take(&mut self.hand)
    }
}

/// The players at the table.
#[derive(Debug, Default)]
pub struct PlayersState {
    players: AHashMap<PlayerId, Player>,
}

impl PlayersState {
    /// Adds a player.
    pub fn join(&mut self, player: Player) {
        self.players.insert(player.player_id, player);
    }

    /// Removes a player.
    pub fn leave(&mut self, player_id: PlayerId) -> Result<Player> {
        self.players
            .remove(&player_id)
            .ok_or(Error::UnknownPlayer(player_id))
    }

    /// Returns a player.
    pub fn get(&self, player_id: PlayerId) -> Result<&Player> {
        self.players
            .get(&player_id)
            .ok_or(Error::UnknownPlayer(player_id))
    }

    /// Returns a mutable player.
    pub fn get_mut(&mut self, player_id: PlayerId) -> Result<&mut Player> {
        self.players
            .get_mut(&player_id)
            .ok_or(Error::UnknownPlayer(player_id))
    }

    /// The number of players.
    pub fn count(&self) -> usize {
        self.players.len()
    }

    /// Returns an iterator to all players.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.values_mut()
    }
}
