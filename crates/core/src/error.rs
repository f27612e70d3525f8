// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table errors.
use thiserror::Error;

use drawpoker_cards::DeckError;
use drawpoker_eval::EvalError;

use crate::{Chips, PlayerId};

/// Errors raised by the table bookkeeping.
#[derive(Debug, Error)]
pub enum Error {
    /// Deck errors.
    #[error(transparent)]
    Deck(#[from] DeckError),
    /// Hand evaluation and discard errors.
    #[error(transparent)]
    Eval(#[from] EvalError),
    /// The player is not tracked.
    #[error("player {0} is not tracked")]
    UnknownPlayer(PlayerId),
    /// The player is already tracked.
    #[error("player {0} is already tracked")]
    AlreadyTracked(PlayerId),
    /// The player is already seated.
    #[error("player {player} is already seated at seat {seat}")]
    DuplicateSeat {
        /// The player.
        player: PlayerId,
        /// The seat the player occupies.
        seat: usize,
    },
    /// The seat is occupied by another player.
    #[error("seat {seat} is occupied by {player}")]
    OccupiedSeat {
        /// The seat.
        seat: usize,
        /// The player at the seat.
        player: PlayerId,
    },
    /// The seat is already empty.
    #[error("seat {0} is empty")]
    EmptySeat(usize),
    /// The seat index is out of range.
    #[error("no seat with index {0}")]
    NoSuchSeat(usize),
    /// There are not enough free seats.
    #[error("not enough seats for {players} players, {free} seats free")]
    TableFull {
        /// Number of players to seat.
        players: usize,
        /// Number of free seats.
        free: usize,
    },
    /// The player doesn't have enough chips.
    #[error("player {player} cannot pay {amount} with a stack of {stack}")]
    InsufficientChips {
        /// The player.
        player: PlayerId,
        /// The requested amount.
        amount: Chips,
        /// The player stack.
        stack: Chips,
    },
    /// The chips at the table would not fit in a chips amount.
    #[error("player {player} cannot get {amount} chips, table total is {total}")]
    ChipsOverflow {
        /// The player.
        player: PlayerId,
        /// The chips to add.
        amount: Chips,
        /// The chips already at the table.
        total: Chips,
    },
    /// The bet amount is not a fold, a call, a raise or an all in.
    #[error("player {player} bet {amount} is not legal, call amount is {call}")]
    IllegalAction {
        /// The player.
        player: PlayerId,
        /// The bet amount.
        amount: Chips,
        /// The amount to call.
        call: Chips,
    },
}

impl Error {
    /// Checks if this error is a rule violation the player can fix by making a
    /// different decision.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Error::IllegalAction { .. } | Error::InsufficientChips { .. } => true,
            Error::Eval(e) => e.is_recoverable(),
            _ => false,
        }
    }
}

/// Result alias for table operations.
pub type Result<T> = std::result::Result<T, Error>;
