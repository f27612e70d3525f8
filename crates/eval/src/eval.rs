// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand evaluator.
use std::sync::Arc;

use drawpoker_cards::{Card, Rank};

use crate::{EvalError, HandRankTables, HandValue, TableKind};

/// Number of cards in a five card draw hand.
pub const HAND_SIZE: usize = 5;

/// Checks if five cards have the same suit.
#[inline]
pub fn has_flush(cards: &[Card]) -> bool {
    cards.len() == HAND_SIZE && cards.iter().fold(0xf, |acc, c| acc & c.suit_bits()) != 0
}

/// Checks if all cards have distinct values.
#[inline]
pub fn has_unique5(cards: &[Card]) -> bool {
    value_bits(cards).count_ones() == 5
}

/// The bitwise or of the cards value masks.
#[inline]
pub fn value_bits(cards: &[Card]) -> u32 {
    cards.iter().fold(0, |acc, c| acc | c.value_mask())
}

/// The product of the cards value primes.
#[inline]
pub fn prime_product(cards: &[Card]) -> u32 {
    cards.iter().map(Card::prime).product()
}

/// Evaluates five cards hands using the rank tables.
#[derive(Debug, Clone)]
pub struct HandEvaluator {
    tables: Arc<HandRankTables>,
}

impl HandEvaluator {
    /// Creates an evaluator with the given tables.
    pub fn new(tables: Arc<HandRankTables>) -> Self {
        Self { tables }
    }

    /// The evaluator tables.
    pub fn tables(&self) -> &HandRankTables {
        &self.tables
    }

    /// Evaluates a five cards hand.
    pub fn evaluate(&self, hand: &[Card]) -> Result<HandValue, EvalError> {
        if hand.len() != HAND_SIZE {
            return Err(EvalError::InvalidHandSize(hand.len()));
        }

        let (kind, key) = Self::lookup_key(hand);
        self.tables
            .get(kind, key)
            .ok_or(EvalError::MissingKey { table: kind, key })
    }

    /// Returns the table and key used to look up a five cards hand.
    pub fn lookup_key(hand: &[Card]) -> (TableKind, u32) {
        if has_flush(hand) {
            (TableKind::Flush, value_bits(hand))
        } else if has_unique5(hand) {
            (TableKind::UniqueFive, value_bits(hand))
        } else {
            (TableKind::Dupes, prime_product(hand))
        }
    }

    /// Checks if a player holding `hand` is allowed to discard `discards`.
    ///
    /// A player may discard up to three cards, or four cards if the card kept is
    /// an ace. Returns [EvalError::IllegalDiscard] when the rules forbid the
    /// discard.
    pub fn check_discards(hand: &[Card], discards: &[Card]) -> Result<(), EvalError> {
        if hand.len() != HAND_SIZE {
            return Err(EvalError::InvalidHandSize(hand.len()));
        }

        let held = discards
            .iter()
            .enumerate()
            .all(|(idx, c)| hand.contains(c) && !discards[..idx].contains(c));
        if !held {
            return Err(EvalError::CardsNotHeld);
        }

        let kept = hand
            .iter()
            .filter(|c| !discards.contains(*c))
            .copied()
            .collect::<Vec<_>>();

        match discards.len() {
            0..=3 => Ok(()),
            4 if prime_product(&kept) % Rank::Ace.prime() == 0 => Ok(()),
            n => Err(EvalError::IllegalDiscard(n)),
        }
    }
}
