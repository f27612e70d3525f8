// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Draw poker table bookkeeping.
//!
//! This crate tracks the state of a five card draw table: who sits where and
//! who has the button ([SeatTracker]), players stacks and pot contributions
//! ([ChipLedger]) and the action flags of a betting round ([ActionTracker]).
//!
//! ```
//! # use drawpoker_core::*;
//! let mut ledger = ChipLedger::default();
//! let (p1, p2) = (PlayerId::new_id(), PlayerId::new_id());
//! for p in [p1, p2] {
//!     ledger.track(p).unwrap();
//!     ledger.reward(p, Chips::new(100)).unwrap();
//!     ledger.bet(p, Chips::new(40)).unwrap();
//! }
//!
//! let settlement = ledger.settle(&[(p1, 10), (p2, 20)]).unwrap();
//! assert_eq!(settlement.reward(p1), Chips::new(80));
//! assert_eq!(ledger.stack(p1).unwrap(), Chips::new(140));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod action;
pub use action::{ActionStatus, ActionTracker};

mod chips;
pub use chips::{Chips, PlayerId};

mod error;
pub use error::{Error, Result};

pub mod ledger;
pub use ledger::{AntePayment, BetDetails, ChipLedger, ChipRecord, Settlement};

pub mod seats;
pub use seats::SeatTracker;

mod strategy;
pub use strategy::{Strategy, TableView};

pub use drawpoker_cards as cards;
pub use drawpoker_eval as eval;
