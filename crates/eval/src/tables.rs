// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand rank lookup tables.
//!
//! The tables are built from three text files, one line per rank class:
//!
//! ```text
//! RF  AKQJT  1
//! SF  KQJT9  2
//! ```
//!
//! the first two characters are the category code, the five value letters are at
//! offsets 4..9 and the rank starts at column 11.
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};
use std::{
    fmt, fs,
    path::Path,
    sync::{Arc, LazyLock},
};

use drawpoker_cards::Rank;

use crate::EvalError;

const FLUSHES: &str = include_str!("../data/flushes.txt");
const UNIQUE_FIVE: &str = include_str!("../data/uniquefive.txt");
const DUPES: &str = include_str!("../data/dupes.txt");

static EMBEDDED: LazyLock<Arc<HandRankTables>> = LazyLock::new(|| {
    let tables = HandRankTables::from_sources(FLUSHES, UNIQUE_FIVE, DUPES)
        .expect("embedded rank tables are valid");
    Arc::new(tables)
});

/// The number of distinct rank classes for 5 cards hands.
pub const RANK_CLASSES: usize = 7462;

/// A hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// High card.
    HighCard,
    /// One pair.
    Pair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
    /// Royal flush.
    RoyalFlush,
}

impl HandCategory {
    /// Parses the two letters category code used in the rank files.
    pub fn from_code(code: &str) -> Option<HandCategory> {
        let category = match code {
            "HC" => HandCategory::HighCard,
            "1P" => HandCategory::Pair,
            "2P" => HandCategory::TwoPair,
            "3K" => HandCategory::ThreeOfAKind,
            "SS" => HandCategory::Straight,
            "FF" => HandCategory::Flush,
            "FH" => HandCategory::FullHouse,
            "4K" => HandCategory::FourOfAKind,
            "SF" => HandCategory::StraightFlush,
            "RF" => HandCategory::RoyalFlush,
            _ => return None,
        };

        Some(category)
    }

    /// The human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "high card",
            HandCategory::Pair => "pair",
            HandCategory::TwoPair => "two pair",
            HandCategory::ThreeOfAKind => "three of a kind",
            HandCategory::Straight => "straight",
            HandCategory::Flush => "flush",
            HandCategory::FullHouse => "full house",
            HandCategory::FourOfAKind => "four of a kind",
            HandCategory::StraightFlush => "straight flush",
            HandCategory::RoyalFlush => "royal flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The value of a 5 cards hand.
///
/// Lower ranks are stronger, 1 is a royal flush and 7462 is the worst high card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandValue {
    rank: u16,
    category: HandCategory,
}

impl HandValue {
    /// Creates a hand value.
    pub fn new(rank: u16, category: HandCategory) -> Self {
        Self { rank, category }
    }

    /// The numeric rank.
    pub fn rank(&self) -> u16 {
        self.rank
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// Checks if this hand beats another hand.
    pub fn beats(&self, other: &HandValue) -> bool {
        self.rank < other.rank
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.category, self.rank)
    }
}

/// Identifies one of the three rank tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// Flush hands, keyed by value bits.
    Flush,
    /// Non flush hands with five distinct values, keyed by value bits.
    UniqueFive,
    /// Hands with duplicate values, keyed by primes product.
    Dupes,
}

impl TableKind {
    /// The file name for this table.
    pub fn file_name(&self) -> &'static str {
        match self {
            TableKind::Flush => "flushes.txt",
            TableKind::UniqueFive => "uniquefive.txt",
            TableKind::Dupes => "dupes.txt",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

type Table = AHashMap<u32, HandValue>;

/// The three perfect hash tables used to rank 5 cards hands.
#[derive(Debug)]
pub struct HandRankTables {
    flush: Table,
    unique5: Table,
    dupes: Table,
}

impl HandRankTables {
    /// Loads the tables from the `flushes.txt`, `uniquefive.txt`, and `dupes.txt`
    /// files in a directory.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self, EvalError> {
        let read = |kind: TableKind| {
            let path = dir.as_ref().join(kind.file_name());
            fs::read_to_string(&path).map_err(|source| EvalError::Io { path, source })
        };

        let flush = read(TableKind::Flush)?;
        let unique5 = read(TableKind::UniqueFive)?;
        let dupes = read(TableKind::Dupes)?;

        Self::from_sources(&flush, &unique5, &dupes)
    }

    /// Builds the tables from the files contents.
    pub fn from_sources(flush: &str, unique5: &str, dupes: &str) -> Result<Self, EvalError> {
        let tables = Self {
            flush: parse_table(TableKind::Flush, flush)?,
            unique5: parse_table(TableKind::UniqueFive, unique5)?,
            dupes: parse_table(TableKind::Dupes, dupes)?,
        };

        tables.validate()?;
        Ok(tables)
    }

    /// Returns the tables built from the data files embedded in this crate.
    pub fn embedded() -> Arc<HandRankTables> {
        EMBEDDED.clone()
    }

    /// Gets a value from one of the tables.
    pub fn get(&self, kind: TableKind, key: u32) -> Option<HandValue> {
        self.table(kind).get(&key).copied()
    }

    /// Checks if a table contains a key.
    pub fn contains(&self, kind: TableKind, key: u32) -> bool {
        self.table(kind).contains_key(&key)
    }

    /// Number of entries in a table.
    pub fn len(&self, kind: TableKind) -> usize {
        self.table(kind).len()
    }

    fn table(&self, kind: TableKind) -> &Table {
        match kind {
            TableKind::Flush => &self.flush,
            TableKind::UniqueFive => &self.unique5,
            TableKind::Dupes => &self.dupes,
        }
    }

    /// Checks that every rank class appears exactly once across the tables.
    fn validate(&self) -> Result<(), EvalError> {
        let mut ranks = AHashSet::with_capacity(RANK_CLASSES);
        let values = self
            .flush
            .values()
            .chain(self.unique5.values())
            .chain(self.dupes.values());

        for value in values {
            if !ranks.insert(value.rank) {
                return Err(EvalError::DuplicateRank(value.rank));
            }
        }

        for rank in 1..=RANK_CLASSES as u16 {
            if !ranks.contains(&rank) {
                return Err(EvalError::MissingRankClass(rank));
            }
        }

        Ok(())
    }
}

fn parse_table(kind: TableKind, src: &str) -> Result<Table, EvalError> {
    let mut table = Table::default();

    for (idx, line) in src.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let parse_err = |reason: &'static str| EvalError::Parse {
            table: kind,
            line: idx + 1,
            reason,
        };

        let category = line
            .get(..2)
            .and_then(HandCategory::from_code)
            .ok_or_else(|| parse_err("unknown category"))?;

        let ranks = line
            .get(4..9)
            .ok_or_else(|| parse_err("line too short"))?
            .chars()
            .map(Rank::from_char)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| parse_err("invalid value letter"))?;

        let rank = line
            .get(11..)
            .ok_or_else(|| parse_err("missing rank"))?
            .trim()
            .parse::<u16>()
            .map_err(|_| parse_err("invalid rank"))?;

        if rank == 0 || rank as usize > RANK_CLASSES {
            return Err(parse_err("rank out of range"));
        }

        let key = match kind {
            TableKind::Flush | TableKind::UniqueFive => {
                let key = ranks.iter().fold(0, |acc, r| acc | r.mask());
                if key.count_ones() != 5 {
                    return Err(parse_err("expected five distinct values"));
                }
                key
            }
            TableKind::Dupes => ranks.iter().map(Rank::prime).product(),
        };

        if table.insert(key, HandValue::new(rank, category)).is_some() {
            return Err(EvalError::DuplicateKey { table: kind, key });
        }
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_tables_size() {
        let tables = HandRankTables::embedded();
        assert_eq!(tables.len(TableKind::Flush), 1287);
        assert_eq!(tables.len(TableKind::UniqueFive), 1287);
        assert_eq!(tables.len(TableKind::Dupes), 4888);
    }

    #[test]
    fn value_bits_keys_disjoint_from_primes() {
        // The flush and unique five tables share the same keys, the dupes table
        // uses a different key space.
        let tables = HandRankTables::embedded();
        for key in tables.flush.keys() {
            assert!(tables.contains(TableKind::UniqueFive, *key));
        }

        let flush_ranks = tables.flush.values().map(|v| v.rank).collect::<AHashSet<_>>();
        let unique_ranks = tables.unique5.values().map(|v| v.rank).collect::<AHashSet<_>>();
        let dupes_ranks = tables.dupes.values().map(|v| v.rank).collect::<AHashSet<_>>();
        assert!(flush_ranks.is_disjoint(&unique_ranks));
        assert!(flush_ranks.is_disjoint(&dupes_ranks));
        assert!(unique_ranks.is_disjoint(&dupes_ranks));
        assert_eq!(
            flush_ranks.len() + unique_ranks.len() + dupes_ranks.len(),
            RANK_CLASSES
        );
    }

    #[test]
    fn load_from_dir() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let tables = HandRankTables::load(dir).unwrap();
        let key = [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten]
            .iter()
            .fold(0, |acc, r| acc | r.mask());
        let value = tables.get(TableKind::Flush, key).unwrap();
        assert_eq!(value.rank(), 1);
        assert_eq!(value.category(), HandCategory::RoyalFlush);

        let res = HandRankTables::load("no/such/dir");
        assert!(matches!(res, Err(EvalError::Io { .. })));
    }

    #[test]
    fn parse_errors() {
        let res = parse_table(TableKind::Flush, "XX  AKQJT  1\n");
        assert!(matches!(res, Err(EvalError::Parse { line: 1, .. })));

        let res = parse_table(TableKind::Flush, "RF  AKQJT  1\nSF  AKQJX  2\n");
        assert!(matches!(res, Err(EvalError::Parse { line: 2, .. })));

        let res = parse_table(TableKind::Flush, "FF  AAQJT  1\n");
        assert!(matches!(res, Err(EvalError::Parse { .. })));

        let res = parse_table(TableKind::Dupes, "1P  AA432  9000\n");
        assert!(matches!(res, Err(EvalError::Parse { .. })));

        let res = parse_table(TableKind::Dupes, "1P  AA432  5000\n1P  A4A32  5001\n");
        assert!(matches!(res, Err(EvalError::DuplicateKey { .. })));

        let table = parse_table(TableKind::Dupes, "1P  AA432  5000\n\n").unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn incomplete_tables() {
        let res = HandRankTables::from_sources(FLUSHES, UNIQUE_FIVE, "");
        assert!(matches!(res, Err(EvalError::MissingRankClass(_))));
    }
}
