// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Primes used to encode a card rank.
pub const PRIMES: [u32; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

/// Errors raised by deck operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// There are not enough cards left in the deck.
    #[error("not enough cards in the deck: requested {requested}, remaining {remaining}")]
    EmptyDeck {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards remaining.
        remaining: usize,
    },
}

/// A Poker card.
///
/// A card is represented using the encoding in the [Cactus Kev's][kevlink] Poker
/// hand evaluator with each card having the following format:
///
/// ```text
///   +--------+--------+--------+--------+
///   |xxxbbbbb|bbbbbbbb|cdhsrrrr|xxpppppp|
///   +--------+--------+--------+--------+
///   p = prime number of rank (deuce=2,trey=3,four=5,five=7,...,ace=41)
///   r = rank of card (deuce=0,trey=1,four=2,five=3,...,ace=12)
///   cdhs = suit of card
///   b = bit turned on depending on rank of card
/// ```
///
/// [kevlink]: http://suffe.cool/poker/evaluator.html
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card(u32);

impl Card {
    /// Create a card given a suit and rank.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        let (rank, suit) = (rank as u32, suit as u32);
        Self(PRIMES[rank as usize] | (rank << 8) | (suit << 12) | (1 << (rank + 16)))
    }

    /// Create a card from a value index (deuce=0,...,ace=12) and a suit index
    /// (spades=0, hearts=1, diamonds=2, clubs=3).
    ///
    /// Out of range indices wrap around, `from_indices(13, 5)` is the deuce of
    /// hearts.
    pub fn from_indices(value: u32, suit: u32) -> Card {
        Self::new(Rank::from_index(value), Suit::from_index(suit))
    }

    /// This card unique id.
    pub fn id(&self) -> u32 {
        self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.suit_bits() {
            0x8 => Suit::Clubs,
            0x4 => Suit::Diamonds,
            0x2 => Suit::Hearts,
            0x1 => Suit::Spades,
            _ => unreachable!("invalid suit value 0x{:x}", self.0),
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        Rank::from_index(self.value())
    }

    /// Returns the value index, deuce is 0 and ace is 12.
    #[inline]
    pub fn value(&self) -> u32 {
        (self.0 >> 8) & 0xf
    }

    /// Returns the suit index, spades is 0 and clubs is 3.
    #[inline]
    pub fn suit_index(&self) -> u32 {
        self.suit_bits().trailing_zeros()
    }

    /// Returns the prime number associated with this card value.
    #[inline]
    pub fn prime(&self) -> u32 {
        self.0 & 0xff
    }

    /// Returns the one-hot value mask.
    #[inline]
    pub fn value_mask(&self) -> u32 {
        self.0 >> 16
    }

    /// Returns the one-hot suit mask.
    #[inline]
    pub fn suit_bits(&self) -> u32 {
        (self.0 >> 12) & 0xf
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    const ALL: [Rank; 13] = [
        Rank::Deuce,
        Rank::Trey,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::ALL.into_iter()
    }

    /// Returns the rank for a value index modulo 13.
    pub fn from_index(value: u32) -> Rank {
        Self::ALL[(value % 13) as usize]
    }

    /// Parses a rank letter as used in the rank tables (`2`..`9`, `T`, `J`, `Q`,
    /// `K`, `A`).
    pub fn from_char(c: char) -> Option<Rank> {
        let rank = match c {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };

        Some(rank)
    }

    /// The prime assigned to this rank.
    pub fn prime(&self) -> u32 {
        PRIMES[*self as usize]
    }

    /// The one-hot mask for this rank.
    pub fn mask(&self) -> u32 {
        1 << (*self as u32)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 8,
    /// Diamonds suit.
    Diamonds = 4,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 1,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// Returns all suits in index order.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs].into_iter()
    }

    /// Returns the suit for a suit index modulo 4.
    pub fn from_index(suit: u32) -> Suit {
        match suit % 4 {
            0 => Suit::Spades,
            1 => Suit::Hearts,
            2 => Suit::Diamonds,
            _ => Suit::Clubs,
        }
    }
}

/// A cards deck.
///
/// The deck keeps all 52 cards in a fixed order with a cursor, cards before the
/// cursor have been dealt and cards after the cursor are still in the deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    dealt: usize,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Deals the top card from the deck.
    pub fn deal(&mut self) -> Result<Card, DeckError> {
        let card = self.cards.get(self.dealt).copied().ok_or(DeckError::EmptyDeck {
            requested: 1,
            remaining: 0,
        })?;
        self.dealt += 1;
        Ok(card)
    }

    /// Deals `n` cards, no card is dealt if there are fewer than `n` cards left.
    pub fn deal_many(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.len() {
            return Err(DeckError::EmptyDeck {
                requested: n,
                remaining: self.len(),
            });
        }

        let cards = self.cards[self.dealt..self.dealt + n].to_vec();
        self.dealt += n;
        Ok(cards)
    }

    /// Shuffles the cards that are still in the deck, dealt cards keep their
    /// position.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards[self.dealt..].shuffle(rng);
    }

    /// Puts all dealt cards back in the deck without changing the cards order.
    pub fn collect(&mut self) {
        self.dealt = 0;
    }

    /// The cards that have been dealt.
    pub fn departed(&self) -> &[Card] {
        &self.cards[..self.dealt]
    }

    /// The cards that are still in the deck.
    pub fn remaining(&self) -> &[Card] {
        &self.cards[self.dealt..]
    }

    /// Number of cards in the deck.
    pub fn len(&self) -> usize {
        Self::SIZE - self.dealt
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Rank::ranks()
            .flat_map(|r| Suit::suits().map(move |s| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards, dealt: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashSet;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn card_encoding() {
        let mut cards = AHashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while !deck.is_empty() {
            let card = deck.deal().unwrap();
            assert_eq!(card.id() & 0xFF, PRIMES[card.rank() as usize]);
            assert_eq!((card.id() >> 8) & 0xF, card.rank() as u32);
            assert_eq!((card.id() >> 12) & 0xF, card.suit() as u32);
            assert_eq!(card.id() >> 16, 1 << (card.rank() as usize));
            cards.insert(card.id());
        }

        // Check uniquness.
        assert_eq!(cards.len(), Deck::SIZE);

        // From the Cactus Kev's website.
        let kd = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(kd.id(), 0x08004b25);

        let fs = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(fs.id(), 0x00081307);

        let jc = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(jc.id(), 0x0200891d);
    }

    #[test]
    fn card_indices() {
        for value in 0..13 {
            for suit in 0..4 {
                let card = Card::from_indices(value, suit);
                assert_eq!(card.value(), value);
                assert_eq!(card.suit_index(), suit);
                assert_eq!(card.suit_bits(), 1 << suit);
                assert_eq!(card.value_mask(), 1 << value);
            }
        }

        // Out of range indices wrap.
        assert_eq!(Card::from_indices(13, 5), Card::from_indices(0, 1));
        assert_eq!(
            Card::from_indices(12, 0),
            Card::new(Rank::Ace, Suit::Spades)
        );
        assert_eq!(Card::from_indices(3, 3), Card::new(Rank::Five, Suit::Clubs));
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");
    }

    #[test]
    fn deck_deal() {
        let mut deck = Deck::default();
        assert_eq!(deck.len(), Deck::SIZE);

        let hand = deck.deal_many(5).unwrap();
        assert_eq!(hand.len(), 5);
        assert_eq!(deck.len(), 47);
        assert_eq!(deck.departed(), &hand[..]);

        // A failed deal leaves the deck untouched.
        assert_eq!(
            deck.deal_many(48),
            Err(DeckError::EmptyDeck {
                requested: 48,
                remaining: 47
            })
        );
        assert_eq!(deck.len(), 47);

        while deck.deal().is_ok() {}
        assert!(deck.is_empty());
        assert!(deck.deal().is_err());
    }

    #[test]
    fn deck_shuffle_remaining() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut deck = Deck::default();
        deck.deal_many(10).unwrap();

        let departed = deck.departed().to_vec();
        let remaining = deck.remaining().iter().copied().collect::<AHashSet<_>>();

        deck.shuffle(&mut rng);

        assert_eq!(deck.departed(), &departed[..]);
        let shuffled = deck.remaining().iter().copied().collect::<AHashSet<_>>();
        assert_eq!(remaining, shuffled);
        assert_eq!(deck.len(), 42);
    }

    #[test]
    fn deck_collect() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut deck = Deck::new_and_shuffled(&mut rng);
        let order = deck.remaining().to_vec();

        deck.deal_many(20).unwrap();
        deck.collect();

        assert_eq!(deck.len(), Deck::SIZE);
        assert!(deck.departed().is_empty());
        assert_eq!(deck.remaining(), &order[..]);

        let all = deck.remaining().iter().copied().collect::<AHashSet<_>>();
        assert_eq!(all.len(), Deck::SIZE);
    }
}
