// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Simulation input types.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

use showdown_cards::{Card, CardSet, Deck, Rank, Suit};

use super::SHARE_UNIT;
use crate::{
    HandValue,
    error::{Error, Result},
};

/// A seat identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SeatId(u8);

impl SeatId {
    /// Creates a seat id.
    pub const fn new(seat: u8) -> Self {
        Self(seat)
    }

    /// The seat number.
    pub fn number(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// A player contesting the pot with its known hole cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contestant {
    /// The player seat.
    pub id: SeatId,
    /// The hole cards, `None` for a card that is not known.
    pub hole: [Option<Card>; 2],
}

impl Contestant {
    /// Creates a contestant.
    pub fn new(id: SeatId, c1: Option<Card>, c2: Option<Card>) -> Self {
        Self { id, hole: [c1, c2] }
    }
}

/// A snapshot of the known cards and of the players contesting the pot.
#[derive(Debug, Clone)]
pub struct Scenario {
    dead: CardSet,
    board: [Option<Card>; Scenario::BOARD_SIZE],
    contestants: Vec<Contestant>,
}

impl Scenario {
    /// The number of board cards.
    pub const BOARD_SIZE: usize = 5;

    /// The maximum number of contestants, all of them with unknown hole cards
    /// must be dealt from the deck with the board.
    pub const MAX_CONTESTANTS: usize = (Deck::SIZE - Self::BOARD_SIZE) / 2;

    /// Creates a new scenario.
    ///
    /// The `dead` set should include the cards of folded players, the known
    /// board and hole cards are added to it. Board slots are filled in order,
    /// a `None` slot is dealt at random.
    pub fn new(
        dead: CardSet,
        board: &[Option<Card>],
        contestants: Vec<Contestant>,
    ) -> Result<Self> {
        if board.len() > Self::BOARD_SIZE {
            return Err(Error::BoardOverflow(board.len()));
        }

        if contestants.len() < 2 {
            return Err(Error::InsufficientPlayers);
        }

        if contestants.len() > Self::MAX_CONTESTANTS {
            return Err(Error::TooManyContestants(contestants.len()));
        }

        let mut slots = [None; Self::BOARD_SIZE];
        slots[..board.len()].copy_from_slice(board);

        let mut dead = dead;
        dead.extend(slots.iter().flatten().copied());
        dead.extend(contestants.iter().flat_map(|c| c.hole.iter().flatten().copied()));

        Ok(Self {
            dead,
            board: slots,
            contestants,
        })
    }

    /// The cards that cannot be dealt.
    pub fn dead(&self) -> CardSet {
        self.dead
    }

    /// The board slots.
    pub fn board(&self) -> &[Option<Card>; Scenario::BOARD_SIZE] {
        &self.board
    }

    /// The players contesting the pot.
    pub fn contestants(&self) -> &[Contestant] {
        &self.contestants
    }

    /// The number of cards dealt at each trial.
    pub fn unknown_cards(&self) -> usize {
        let board = self.board.iter().filter(|c| c.is_none()).count();
        let holes = self
            .contestants
            .iter()
            .flat_map(|c| c.hole.iter())
            .filter(|c| c.is_none())
            .count();
        board + holes
    }

    /// Runs one trial.
    ///
    /// The deck is refilled with all cards but the dead ones and shuffled, the
    /// unknown board slots are dealt first in slot order and then the
    /// unknown hole cards in contestants order.
    pub fn trial<R: Rng>(&self, deck: &mut Deck, rng: &mut R) -> Result<TrialOutcome> {
        deck.refill(self.dead);
        deck.shuffle(rng);

        let mut outcome = TrialOutcome::default();
        for (slot, card) in outcome.board.iter_mut().zip(self.board) {
            *slot = match card {
                Some(card) => card,
                None => deck.deal().ok_or(Error::DeckExhausted)?,
            };
        }

        let mut hand = [outcome.board[0]; 7];
        hand[2..].copy_from_slice(&outcome.board);

        for (idx, contestant) in self.contestants.iter().enumerate() {
            for (pos, card) in contestant.hole.iter().enumerate() {
                hand[pos] = match card {
                    Some(card) => *card,
                    None => deck.deal().ok_or(Error::DeckExhausted)?,
                };
            }

            outcome.holes[idx] = [hand[0], hand[1]];
            outcome.values[idx] = HandValue::eval(&hand);
        }

        outcome.len = self.contestants.len();
        outcome.best = outcome.values().iter().copied().max().unwrap_or(HandValue::NONE);
        outcome.winners = outcome
            .values()
            .iter()
            .filter(|&&value| value == outcome.best)
            .count();

        Ok(outcome)
    }
}

/// The result of a single trial.
#[derive(Debug, Clone)]
pub struct TrialOutcome {
    board: [Card; Scenario::BOARD_SIZE],
    holes: [[Card; 2]; Scenario::MAX_CONTESTANTS],
    values: [HandValue; Scenario::MAX_CONTESTANTS],
    len: usize,
    best: HandValue,
    winners: usize,
}

impl Default for TrialOutcome {
    fn default() -> Self {
        let card = Card::new(Rank::Ace, Suit::Spades);
        Self {
            board: [card; Scenario::BOARD_SIZE],
            holes: [[card; 2]; Scenario::MAX_CONTESTANTS],
            values: [HandValue::NONE; Scenario::MAX_CONTESTANTS],
            len: 0,
            best: HandValue::NONE,
            winners: 0,
        }
    }
}

impl TrialOutcome {
    /// The completed board.
    pub fn board(&self) -> &[Card; Scenario::BOARD_SIZE] {
        &self.board
    }

    /// The completed hole cards of the contestant at `idx`.
    pub fn hole(&self, idx: usize) -> [Card; 2] {
        self.holes[..self.len][idx]
    }

    /// The hand values in contestants order.
    pub fn values(&self) -> &[HandValue] {
        &self.values[..self.len]
    }

    /// The number of contestants with the best hand.
    pub fn winners(&self) -> usize {
        self.winners
    }

    /// Checks if the contestant at `idx` has the best hand.
    pub fn is_winner(&self, idx: usize) -> bool {
        self.values()[idx] == self.best
    }

    /// The share of the pot won by the contestant at `idx` in [SHARE_UNIT]s.
    pub fn share(&self, idx: usize) -> u64 {
        if self.is_winner(idx) {
            SHARE_UNIT / self.winners as u64
        } else {
            0
        }
    }
}
