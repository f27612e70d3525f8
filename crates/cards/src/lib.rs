// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five card draw cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use drawpoker_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::from_indices(11, 2);
//! assert_eq!(kd, Card::new(Rank::King, Suit::Diamonds));
//! ```
//!
//! and a [Deck] type that deals cards from the top and keeps track of the cards
//! that have been dealt, cards go back into the deck with [Deck::collect]:
//!
//! ```
//! # use drawpoker_cards::Deck;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let hand = deck.deal_many(5).unwrap();
//! assert_eq!(deck.len(), 47);
//! deck.collect();
//! assert_eq!(deck.len(), 52);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, DeckError, PRIMES, Rank, Suit};
