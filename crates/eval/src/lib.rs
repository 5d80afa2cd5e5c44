// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Texas Hold'em evaluator and equity simulator.
//!
//! The [HandValue] evaluator ranks 5, 6 and 7 cards hands, a greater value is
//! a stronger hand and equal values split the pot:
//!
//! ```
//! # use showdown_eval::*;
//! let parse = |s: &str| {
//!     s.split_whitespace()
//!         .map(|c| c.parse::<Card>().unwrap())
//!         .collect::<Vec<_>>()
//! };
//!
//! let flush = HandValue::eval(&parse("2♥ 7♥ 9♥ J♥ K♥ A♠ A♦"));
//! let trips = HandValue::eval(&parse("A♣ 7♥ 9♥ J♥ 4♠ A♠ A♦"));
//! assert!(flush > trips);
//! assert_eq!(flush.rank(), HandRank::Flush);
//! ```
//!
//! The [Simulator] estimates each player probability of winning the pot by
//! dealing the unknown cards at random, see the [equity] module, and the
//! [Table] keeps the known cards of a hand as the players see them.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod equity;
pub mod error;
pub mod eval;
pub mod table;

pub use equity::{
    CancelToken, Config, Contestant, Equity, SHARE_UNIT, Scenario, SeatId, Simulator,
    TrialOutcome,
};
pub use error::{Error, Result};
pub use eval::{HandRank, HandValue};
pub use table::{Positions, SeatOdds, SlotId, Street, Table, TableOdds};

// Reexport cards types.
pub use showdown_cards::{Card, CardSet, Deck, ParseCardError, Rank, Suit};
