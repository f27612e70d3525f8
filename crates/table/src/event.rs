// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table events.
use ahash::AHashMap;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::sync::mpsc;

use drawpoker_core::{
    Chips, PlayerId,
    cards::Card,
    eval::HandValue,
};

/// A player betting action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BetAction {
    /// Bet nothing with nothing to call.
    Check,
    /// Matched the largest contribution.
    Call,
    /// Bet more than the call amount.
    Raise,
    /// Bet the whole stack.
    AllIn,
    /// Gave up the hand.
    Fold,
}

/// Something that happened at the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableEvent {
    /// A player sat at the table.
    PlayerJoined {
        /// The player id.
        player: PlayerId,
        /// The player nickname.
        nickname: String,
        /// The player seat.
        seat: usize,
        /// The player starting chips.
        chips: Chips,
    },
    /// A player left the table.
    PlayerLeft {
        /// The player id.
        player: PlayerId,
    },
    /// A new hand started.
    HandStarted {
        /// The hand number.
        hand: usize,
    },
    /// A player paid the ante.
    AntePaid {
        /// The player id.
        player: PlayerId,
        /// The chips paid.
        amount: Chips,
        /// The ante took all the player chips.
        all_in: bool,
    },
    /// The deck has been shuffled.
    DeckShuffled,
    /// The button moved.
    ButtonMoved {
        /// The player on the button.
        player: PlayerId,
    },
    /// Hands have been dealt.
    HandsDealt,
    /// A player made a bet.
    Bet {
        /// The player id.
        player: PlayerId,
        /// The bet action.
        action: BetAction,
        /// The chips added to the pot.
        amount: Chips,
    },
    /// A player changed some cards.
    Discarded {
        /// The player id.
        player: PlayerId,
        /// The number of cards changed.
        count: usize,
    },
    /// A player decision was replaced with the default one.
    DefaultDecision {
        /// The player id.
        player: PlayerId,
    },
    /// A player showed its hand.
    Showed {
        /// The player id.
        player: PlayerId,
        /// The player cards.
        hand: Vec<Card>,
        /// The hand value.
        value: HandValue,
    },
    /// A player mucked its hand.
    Mucked {
        /// The player id.
        player: PlayerId,
    },
    /// A player won chips.
    Won {
        /// The player id.
        player: PlayerId,
        /// The chips won.
        amount: Chips,
        /// The winning hand value if it was shown.
        value: Option<HandValue>,
    },
    /// Chips went back to a player.
    Refunded {
        /// The player id.
        player: PlayerId,
        /// The chips returned.
        amount: Chips,
    },
    /// The hand was aborted because of an error.
    HandAborted {
        /// The error message.
        reason: String,
    },
    /// Cards have been collected.
    CardsCollected,
    /// A player chips at the end of a hand.
    Standing {
        /// The player id.
        player: PlayerId,
        /// The player stack.
        chips: Chips,
    },
    /// Only one player is left.
    GameOver {
        /// The winner.
        winner: PlayerId,
    },
}

/// Receives table events.
pub trait EventSink {
    /// Handles an event.
    fn emit(&mut self, event: &TableEvent);
}

impl EventSink for mpsc::Sender<TableEvent> {
    fn emit(&mut self, event: &TableEvent) {
        let _ = self.send(event.clone());
    }
}

/// Logs events using the players nicknames.
#[derive(Debug, Default)]
pub struct LogSink {
    nicknames: AHashMap<PlayerId, String>,
}

impl LogSink {
    fn name(&self, player: &PlayerId) -> String {
        self.nicknames
            .get(player)
            .cloned()
            .unwrap_or_else(|| player.to_string())
    }
}

impl EventSink for LogSink {
    fn emit(&mut self, event: &TableEvent) {
        match event {
            TableEvent::PlayerJoined {
                player,
                nickname,
                seat,
                chips,
            } => {
                self.nicknames.insert(*player, nickname.clone());
                info!("{nickname} sits at seat {seat} with {chips} chips");
            }
            TableEvent::PlayerLeft { player } => {
                info!("{} is leaving the table", self.name(player));
            }
            TableEvent::HandStarted { hand } => info!("Hand {hand}"),
            TableEvent::AntePaid {
                player,
                amount,
                all_in,
            } => {
                if *all_in {
                    info!("The ante forced {} all in with {amount}", self.name(player));
                } else {
                    info!("{} paid {amount} for the ante", self.name(player));
                }
            }
            TableEvent::DeckShuffled => info!("The deck has been shuffled"),
            TableEvent::ButtonMoved { player } => {
                info!("The button was given to {}", self.name(player));
            }
            TableEvent::HandsDealt => info!("Hands have been dealt"),
            TableEvent::Bet {
                player,
                action,
                amount,
            } => {
                let name = self.name(player);
                match action {
                    BetAction::Check => info!("{name} checks"),
                    BetAction::Call => info!("{name} calls {amount}"),
                    BetAction::Raise => info!("{name} raises with {amount}"),
                    BetAction::AllIn => info!("{name} goes all in with {amount}"),
                    BetAction::Fold => info!("{name} folds"),
                }
            }
            TableEvent::Discarded { player, count } => {
                info!("{} changes {count} cards", self.name(player));
            }
            TableEvent::DefaultDecision { player } => {
                info!("{} gets the default decision", self.name(player));
            }
            TableEvent::Showed {
                player,
                hand,
                value,
            } => {
                let cards = hand.iter().map(|c| c.to_string()).collect::<Vec<_>>();
                info!("{} shows {} {value}", self.name(player), cards.join(" "));
            }
            TableEvent::Mucked { player } => info!("{} mucks", self.name(player)),
            TableEvent::Won {
                player,
                amount,
                value,
            } => match value {
                Some(value) => info!("{} won {amount} with {value}", self.name(player)),
                None => info!("{} won {amount}", self.name(player)),
            },
            TableEvent::Refunded { player, amount } => {
                info!("{} got {amount} back", self.name(player));
            }
            TableEvent::HandAborted { reason } => warn!("Hand aborted: {reason}"),
            TableEvent::CardsCollected => info!("Cards have been collected"),
            TableEvent::Standing { player, chips } => {
                info!("{} has {chips} chips", self.name(player));
            }
            TableEvent::GameOver { winner } => info!("{} has won!", self.name(winner)),
        }
    }
}
