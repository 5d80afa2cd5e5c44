// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator scores 5, 6, and 7 cards hands by tallying ranks and suits
//! and checking each hand category from the strongest to the weakest, so that
//! the best five cards are picked without enumerating all the 5-cards subsets.
//!
//! It provides a [HandValue::eval] method that computes a hand value without
//! extracting the best hand out of a 7 cards hand, useful for computing odds
//! and other stats, and a slower [HandValue::eval_with_best_hand] that
//! computes the hand value and returns the five best cards, useful for UIs to
//! shows a winning hand.
//!
//! A [HandValue] is an exact integer, the category sits above five 4-bits
//! rank digits (primary ranks first, then kickers), so that comparing two
//! values compares the hands:
//!
//! ```text
//!   +--------+--------+--------+
//!   |cccc1111|22223333|44445555|
//!   +--------+--------+--------+
//!   c = hand category (high card=0, ..., straight flush=8)
//!   1..5 = rank values (deuce=2, ..., ace=14), 0 when unused
//! ```
pub mod value;
pub use value::{HandRank, HandValue};
