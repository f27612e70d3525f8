// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five card draw hand evaluator.
//!
//! Hands are ranked with three perfect hash tables in the style of the
//! [Cactus Kev's][kevlink] poker evaluator: flushes and hands with five distinct
//! values are keyed by the bitwise or of the cards value bits, hands with
//! repeated values are keyed by the product of the cards primes.
//!
//! ```
//! # use drawpoker_eval::*;
//! let evaluator = HandEvaluator::new(HandRankTables::embedded());
//! let royal = [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten]
//!     .map(|r| Card::new(r, Suit::Spades));
//! let value = evaluator.evaluate(&royal).unwrap();
//! assert_eq!(value.rank(), 1);
//! assert_eq!(value.category(), HandCategory::RoyalFlush);
//! ```
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use std::path::PathBuf;
use thiserror::Error;

pub mod eval;
pub use eval::{HAND_SIZE, HandEvaluator};

pub mod tables;
pub use tables::{HandCategory, HandRankTables, HandValue, RANK_CLASSES, TableKind};

// Reexport cards types.
pub use drawpoker_cards::{Card, Deck, DeckError, Rank, Suit};

/// Evaluator errors.
#[derive(Debug, Error)]
pub enum EvalError {
    /// A hand doesn't have five cards.
    #[error("invalid hand size {0}, expected 5 cards")]
    InvalidHandSize(usize),
    /// The discards are not allowed by the draw rules.
    #[error("cannot discard {0} cards")]
    IllegalDiscard(usize),
    /// Some discarded cards are not in the hand.
    #[error("discarded cards are not in the hand")]
    CardsNotHeld,
    /// A hand key is not in the tables.
    #[error("no rank for key {key} in {table}")]
    MissingKey {
        /// The table that was searched.
        table: TableKind,
        /// The hand key.
        key: u32,
    },
    /// A rank data file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// The file path.
        path: PathBuf,
        /// The io error.
        source: std::io::Error,
    },
    /// A rank data line is malformed.
    #[error("{table} line {line}: {reason}")]
    Parse {
        /// The table being parsed.
        table: TableKind,
        /// The line number.
        line: usize,
        /// What is wrong with the line.
        reason: &'static str,
    },
    /// Two lines in a table have the same key.
    #[error("duplicate key {key} in {table}")]
    DuplicateKey {
        /// The table being parsed.
        table: TableKind,
        /// The repeated key.
        key: u32,
    },
    /// A rank appears more than once.
    #[error("rank {0} appears more than once")]
    DuplicateRank(u16),
    /// A rank class is missing from the tables.
    #[error("missing rank class {0}")]
    MissingRankClass(u16),
}

impl EvalError {
    /// Checks if the error is a rule violation the player can fix by choosing
    /// different discards.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, EvalError::IllegalDiscard(_) | EvalError::CardsNotHeld)
    }
}
