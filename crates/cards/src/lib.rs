// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert_ne!(ah, kd);
//! ```
//!
//! or to parse them from the symbols used on the table:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let th: Card = "10♥".parse().unwrap();
//! assert_eq!(th, Card::new(Rank::Ten, Suit::Hearts));
//! assert_eq!(th, "Th".parse().unwrap());
//! ```
//!
//! a [CardSet] to track cards that are already on the table, and a [Deck]
//! type for shuffling and dealing the cards that are left:
//!
//! ```
//! # use showdown_cards::{Card, CardSet, Deck};
//! let dead = ["A♠", "A♥"]
//!     .iter()
//!     .map(|s| s.parse::<Card>().unwrap())
//!     .collect::<CardSet>();
//!
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! deck.refill(dead);
//! assert_eq!(deck.count(), 50);
//!
//! deck.shuffle(&mut rand::rng());
//! let card = deck.deal().unwrap();
//! assert!(!dead.contains(card));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, CardSet, Deck, ParseCardError, Rank, Suit};
