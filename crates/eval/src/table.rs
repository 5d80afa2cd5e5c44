// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table snapshot.
//!
//! A [Table] keeps the cards assigned to the board and hole card slots, and
//! the seats that are in the hand. A slot is identified by a string like
//! `b0`..`b4` for the board or `p3c1`, `p3c2` for the hole cards of seat 3:
//!
//! ```
//! # use showdown_eval::*;
//! # fn main() -> Result<()> {
//! let table = Table::from_slots([
//!     ("p1c1", "A♠"),
//!     ("p1c2", "A♥"),
//!     ("p2c1", "K♦"),
//!     ("p2c2", "K♣"),
//!     ("b0", "2♣"),
//!     ("b1", "7♦"),
//!     ("b2", "9♠"),
//!     ("b3", "J♥"),
//!     ("b4", "4♦"),
//! ])?;
//!
//! let mut sim = Simulator::new(Config { trials: 100, ..Config::default() });
//! let odds = table.odds(&mut sim)?;
//! assert!(odds.board_complete());
//! assert_eq!(odds.leaders(), vec![SeatId::new(1)]);
//! # Ok(())
//! # }
//! ```
use ahash::{AHashMap, AHashSet};
use log::debug;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use showdown_cards::{Card, CardSet, Deck};

use crate::{
    equity::{Contestant, Scenario, SeatId, Simulator},
    error::{Error, Result},
};

/// A table card slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SlotId {
    /// A board slot, 0 to 4 left to right.
    Board(usize),
    /// A hole card slot, 0 or 1 for the first and second card.
    Hole(SeatId, usize),
}

impl SlotId {
    fn check(&self) -> Result<()> {
        match *self {
            SlotId::Board(idx) if idx < Scenario::BOARD_SIZE => Ok(()),
            SlotId::Board(idx) => Err(Error::BoardOverflow(idx + 1)),
            SlotId::Hole(seat, idx) if idx < 2 => Table::check_seat(seat),
            SlotId::Hole(..) => Err(Error::MalformedSlot(self.to_string())),
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotId::Board(idx) => write!(f, "b{idx}"),
            SlotId::Hole(seat, idx) => write!(f, "p{}c{}", seat.number(), idx + 1),
        }
    }
}

/// Parses a plain decimal number, rejecting signs and leading zeros.
fn parse_number(s: &str) -> Option<u8> {
    let digits = !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !digits || (s.len() > 1 && s.starts_with('0')) {
        return None;
    }

    s.parse().ok()
}

impl FromStr for SlotId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let malformed = || Error::MalformedSlot(s.to_string());
        let slot = s.trim().to_ascii_lowercase();

        if let Some(idx) = slot.strip_prefix('b') {
            return parse_number(idx)
                .map(usize::from)
                .filter(|idx| *idx < Scenario::BOARD_SIZE)
                .map(SlotId::Board)
                .ok_or_else(malformed);
        }

        let (seat, card) = slot
            .strip_prefix('p')
            .and_then(|rest| rest.split_once('c'))
            .ok_or_else(malformed)?;

        let seat = parse_number(seat).map(SeatId::new).ok_or_else(malformed)?;
        let idx = match card {
            "1" => 0,
            "2" => 1,
            _ => return Err(malformed()),
        };

        Table::check_seat(seat)?;
        Ok(SlotId::Hole(seat, idx))
    }
}

/// The board street after dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Street {
    /// The first three board cards.
    Flop,
    /// The fourth board card.
    Turn,
    /// The fifth board card.
    River,
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
        };

        write!(f, "{s}")
    }
}

/// The dealer button and the blinds for a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Positions {
    /// The dealer button.
    pub dealer: SeatId,
    /// The small blind, the dealer in a heads-up hand.
    pub small_blind: SeatId,
    /// The big blind.
    pub big_blind: SeatId,
    /// The first seat to act preflop, set with four or more seats in the hand.
    pub under_the_gun: Option<SeatId>,
}

impl Positions {
    /// The position label of a seat, empty if the seat has no position.
    pub fn label(&self, seat: SeatId) -> &'static str {
        if seat == self.dealer && seat == self.small_blind {
            "D/SB"
        } else if seat == self.dealer {
            "D"
        } else if seat == self.small_blind {
            "SB"
        } else if seat == self.big_blind {
            "BB"
        } else if Some(seat) == self.under_the_gun {
            "UTG"
        } else {
            ""
        }
    }
}

/// The known cards and the seats in a hand.
#[derive(Debug, Clone)]
pub struct Table {
    cards: AHashMap<SlotId, Card>,
    active: AHashSet<SeatId>,
    folded: AHashSet<SeatId>,
    dealer: SeatId,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            cards: AHashMap::default(),
            active: AHashSet::default(),
            folded: AHashSet::default(),
            dealer: SeatId::new(1),
        }
    }
}

impl Table {
    /// The number of seats at the table.
    pub const MAX_SEATS: u8 = 9;

    /// Creates an empty table with no seats in the hand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table from `(slot, card)` strings.
    ///
    /// Seats with hole cards are in the hand.
    pub fn from_slots<'a, I>(slots: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut table = Table::new();
        for (slot, card) in slots {
            let slot = slot.parse::<SlotId>()?;
            let card = card
                .trim()
                .parse::<Card>()
                .map_err(|e| Error::malformed_card(card, e))?;
            table.assign(slot, card)?;
        }

        Ok(table)
    }

    /// Assigns a card to a slot, returns the card that was in the slot.
    ///
    /// Assigning a hole card puts the seat in the hand. A card that is
    /// already in another slot is rejected.
    pub fn assign(&mut self, slot: SlotId, card: Card) -> Result<Option<Card>> {
        slot.check()?;

        if self.cards.iter().any(|(s, c)| *c == card && *s != slot) {
            return Err(Error::DuplicateCard(card));
        }

        if let SlotId::Hole(seat, _) = slot {
            self.active.insert(seat);
        }

        Ok(self.cards.insert(slot, card))
    }

    /// Removes the card from a slot.
    pub fn clear(&mut self, slot: SlotId) -> Option<Card> {
        self.cards.remove(&slot)
    }

    /// The card in a slot.
    pub fn card(&self, slot: SlotId) -> Option<Card> {
        self.cards.get(&slot).copied()
    }

    /// Adds a seat to the hand or removes it with its hole cards.
    pub fn set_active(&mut self, seat: SeatId, active: bool) -> Result<()> {
        Self::check_seat(seat)?;

        if active {
            self.active.insert(seat);
        } else {
            self.active.remove(&seat);
            self.folded.remove(&seat);
            self.cards
                .retain(|slot, _| !matches!(slot, SlotId::Hole(s, _) if *s == seat));
        }

        Ok(())
    }

    /// Checks if a seat is in the hand.
    pub fn is_active(&self, seat: SeatId) -> bool {
        self.active.contains(&seat)
    }

    /// Folds or unfolds an active seat, returns true if the seat has folded.
    pub fn toggle_fold(&mut self, seat: SeatId) -> Result<bool> {
        if !self.active.contains(&seat) {
            return Err(Error::InvalidSeat(seat.number()));
        }

        if self.folded.remove(&seat) {
            Ok(false)
        } else {
            self.folded.insert(seat);
            Ok(true)
        }
    }

    /// Checks if a seat has folded.
    pub fn is_folded(&self, seat: SeatId) -> bool {
        self.folded.contains(&seat)
    }

    /// Clears all cards and folds for a new hand and moves the dealer
    /// button, seats stay in the hand.
    pub fn reset(&mut self) {
        self.cards.clear();
        self.folded.clear();
        self.rotate_dealer();
    }

    /// The seat with the dealer button, seat 1 on a new table.
    pub fn dealer(&self) -> SeatId {
        self.dealer
    }

    /// Moves the dealer button to a seat.
    pub fn set_dealer(&mut self, seat: SeatId) -> Result<()> {
        Self::check_seat(seat)?;
        self.dealer = seat;
        Ok(())
    }

    /// Moves the dealer button to the next seat in the hand.
    ///
    /// The button stays where it is if no other seat is in the hand.
    pub fn rotate_dealer(&mut self) -> SeatId {
        self.dealer = self.next_active(self.dealer);
        debug!("Dealer button moved to {}", self.dealer);
        self.dealer
    }

    /// The dealer and the blinds, `None` with less than two seats in the hand.
    ///
    /// If the dealer seat is not in the hand the button goes to the lowest
    /// seat in the hand. Heads-up the dealer posts the small blind.
    pub fn positions(&self) -> Option<Positions> {
        let seats = self.seats();
        if seats.len() < 2 {
            return None;
        }

        let dealer = if self.active.contains(&self.dealer) {
            self.dealer
        } else {
            seats[0]
        };

        let small_blind = if seats.len() == 2 {
            dealer
        } else {
            self.next_active(dealer)
        };

        let big_blind = self.next_active(small_blind);
        let under_the_gun = (seats.len() >= 4).then(|| self.next_active(big_blind));

        Some(Positions {
            dealer,
            small_blind,
            big_blind,
            under_the_gun,
        })
    }

    /// The seats in the hand in seat order.
    pub fn seats(&self) -> Vec<SeatId> {
        let mut seats = self.active.iter().copied().collect::<Vec<_>>();
        seats.sort();
        seats
    }

    /// The board slots.
    pub fn board(&self) -> [Option<Card>; Scenario::BOARD_SIZE] {
        let mut board = [None; Scenario::BOARD_SIZE];
        for (idx, card) in board.iter_mut().enumerate() {
            *card = self.card(SlotId::Board(idx));
        }

        board
    }

    /// The number of known board cards.
    pub fn board_count(&self) -> usize {
        self.board().iter().flatten().count()
    }

    /// All the cards assigned to a slot.
    pub fn dead_cards(&self) -> CardSet {
        self.cards.values().copied().collect()
    }

    /// The seats in the hand that have not folded with their known cards.
    pub fn contestants(&self) -> Vec<Contestant> {
        self.seats()
            .into_iter()
            .filter(|seat| !self.folded.contains(seat))
            .map(|seat| {
                Contestant::new(
                    seat,
                    self.card(SlotId::Hole(seat, 0)),
                    self.card(SlotId::Hole(seat, 1)),
                )
            })
            .collect()
    }

    /// Builds a simulation scenario from the table.
    pub fn scenario(&self) -> Result<Scenario> {
        Scenario::new(self.dead_cards(), &self.board(), self.contestants())
    }

    /// Simulates the hand and returns the odds for each seat in the hand.
    pub fn odds<R: Rng>(&self, sim: &mut Simulator<R>) -> Result<TableOdds> {
        let scenario = self.scenario()?;
        let equity = sim.run(&scenario)?;

        let seats = self
            .seats()
            .into_iter()
            .map(|seat| {
                let odds = if self.folded.contains(&seat) {
                    SeatOdds::Folded
                } else {
                    SeatOdds::Equity(equity.probability(seat).unwrap_or_default())
                };

                (seat, odds)
            })
            .collect();

        Ok(TableOdds {
            seats,
            board_complete: self.board_count() == Scenario::BOARD_SIZE,
            players: scenario.contestants().len(),
            trials: equity.trials(),
            requested: sim.config().trials,
        })
    }

    /// Deals the next street to the empty board slots.
    ///
    /// An empty or partial flop is completed to three cards, then the turn
    /// and river are dealt one card at a time. Dealt cards are never in a
    /// table slot.
    pub fn deal_next_street<R: Rng>(&mut self, rng: &mut R) -> Result<Street> {
        let count = self.board_count();
        let (target, street) = match count {
            0..=2 => (3, Street::Flop),
            3 => (4, Street::Turn),
            4 => (5, Street::River),
            _ => return Err(Error::BoardComplete),
        };

        let mut deck = Deck::without(self.dead_cards());
        deck.shuffle(rng);

        let empty = (0..Scenario::BOARD_SIZE)
            .map(SlotId::Board)
            .filter(|slot| !self.cards.contains_key(slot))
            .take(target - count)
            .collect::<Vec<_>>();

        for slot in empty {
            let card = deck.deal().ok_or(Error::DeckExhausted)?;
            debug!("Dealt {} to {slot}", card.symbol());
            self.cards.insert(slot, card);
        }

        Ok(street)
    }

    /// The next seat in the hand clockwise, wraps from the last seat to the
    /// first. Returns `seat` if no other seat is in the hand.
    fn next_active(&self, seat: SeatId) -> SeatId {
        let max = Self::MAX_SEATS;
        let start = seat.number().saturating_sub(1) % max;

        (1..=max)
            .map(|step| SeatId::new((start + step) % max + 1))
            .find(|s| self.active.contains(s))
            .unwrap_or(seat)
    }

    fn check_seat(seat: SeatId) -> Result<()> {
        if (1..=Self::MAX_SEATS).contains(&seat.number()) {
            Ok(())
        } else {
            Err(Error::InvalidSeat(seat.number()))
        }
    }
}

/// The odds of a seat in the hand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SeatOdds {
    /// The probability of winning the pot.
    Equity(f64),
    /// The seat has folded.
    Folded,
}

impl SeatOdds {
    /// The probability of winning the pot, `None` if folded.
    pub fn equity(&self) -> Option<f64> {
        match self {
            SeatOdds::Equity(p) => Some(*p),
            SeatOdds::Folded => None,
        }
    }
}

impl fmt::Display for SeatOdds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeatOdds::Equity(p) => write!(f, "{:.1}%", p * 100.0),
            SeatOdds::Folded => write!(f, "Fold"),
        }
    }
}

/// The table odds computed by [Table::odds].
#[derive(Debug, Clone)]
pub struct TableOdds {
    seats: Vec<(SeatId, SeatOdds)>,
    board_complete: bool,
    players: usize,
    trials: usize,
    requested: usize,
}

impl TableOdds {
    /// The odds for a seat, `None` if the seat is not in the hand.
    pub fn get(&self, seat: SeatId) -> Option<SeatOdds> {
        self.seats.iter().find(|(s, _)| *s == seat).map(|(_, o)| *o)
    }

    /// Iterates the seats in the hand and their odds in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (SeatId, SeatOdds)> + '_ {
        self.seats.iter().copied()
    }

    /// Checks if all five board cards are known.
    pub fn board_complete(&self) -> bool {
        self.board_complete
    }

    /// Checks if the simulation ran all the requested trials.
    pub fn is_complete(&self) -> bool {
        self.trials == self.requested
    }

    /// The number of trials that have run.
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// The seats with the highest equity.
    pub fn leaders(&self) -> Vec<SeatId> {
        let equities = || {
            self.seats
                .iter()
                .filter_map(|(seat, odds)| odds.equity().map(|p| (*seat, p)))
        };

        let Some(best) = equities().map(|(_, p)| p).max_by(f64::total_cmp) else {
            return Vec::new();
        };

        equities()
            .filter(|(_, p)| *p == best)
            .map(|(seat, _)| seat)
            .collect()
    }

    /// The seats winning the pot, known only when the board is complete.
    pub fn winners(&self) -> Option<Vec<SeatId>> {
        (self.board_complete && self.is_complete()).then(|| self.leaders())
    }

    /// A status line for the simulation.
    pub fn status(&self) -> String {
        if self.is_complete() {
            format!(
                "Simulated {} players over {} trials",
                self.players, self.trials
            )
        } else {
            format!(
                "Simulation of {} players stopped after {} of {} trials",
                self.players, self.trials, self.requested
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;
    use rand::rngs::StdRng;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    fn seat(n: u8) -> SeatId {
        SeatId::new(n)
    }

    fn seeded(trials: usize) -> Simulator {
        Simulator::new(Config {
            trials,
            seed: Some(7),
            ..Config::default()
        })
    }

    #[test]
    fn parse_slots() {
        assert_eq!("b0".parse::<SlotId>().unwrap(), SlotId::Board(0));
        assert_eq!("B4".parse::<SlotId>().unwrap(), SlotId::Board(4));
        assert_eq!("p3c1".parse::<SlotId>().unwrap(), SlotId::Hole(seat(3), 0));
        assert_eq!("p9c2".parse::<SlotId>().unwrap(), SlotId::Hole(seat(9), 1));

        assert_eq!(SlotId::Board(2).to_string(), "b2");
        assert_eq!(SlotId::Hole(seat(7), 1).to_string(), "p7c2");

        let malformed = [
            "", "b5", "b", "x1", "p1", "p1c3", "pxc1", "p1c1c", "b+1", "b01", "b-0", "p+3c1",
            "p03c1", "p3c+1", "p300c1",
        ];

        for s in malformed {
            assert_eq!(
                s.parse::<SlotId>().unwrap_err(),
                Error::MalformedSlot(s.to_string()),
                "{s}"
            );
        }

        assert_eq!("p0c1".parse::<SlotId>().unwrap_err(), Error::InvalidSeat(0));
        assert_eq!("p10c2".parse::<SlotId>().unwrap_err(), Error::InvalidSeat(10));
    }

    #[test]
    fn assign_cards() {
        let mut table = Table::new();
        assert_eq!(table.assign(SlotId::Board(0), card("A♠")).unwrap(), None);
        assert_eq!(
            table.assign(SlotId::Board(0), card("K♠")).unwrap(),
            Some(card("A♠"))
        );

        // Same card to the same slot is fine, to another slot is rejected.
        table.assign(SlotId::Board(0), card("K♠")).unwrap();
        assert_eq!(
            table.assign(SlotId::Hole(seat(1), 0), card("K♠")),
            Err(Error::DuplicateCard(card("K♠")))
        );

        assert_eq!(
            table.assign(SlotId::Board(5), card("2♠")),
            Err(Error::BoardOverflow(6))
        );
        assert_eq!(
            table.assign(SlotId::Hole(seat(12), 0), card("2♠")),
            Err(Error::InvalidSeat(12))
        );

        table.assign(SlotId::Hole(seat(4), 1), card("Q♦")).unwrap();
        assert!(table.is_active(seat(4)));
        assert_eq!(table.board_count(), 1);
        assert_eq!(table.dead_cards().len(), 2);

        assert_eq!(table.clear(SlotId::Board(0)), Some(card("K♠")));
        assert_eq!(table.card(SlotId::Board(0)), None);
        assert_eq!(table.board_count(), 0);
    }

    #[test]
    fn from_slots_errors() {
        let err = Table::from_slots([("p1c1", "A♠"), ("p2c1", "1♠")]).unwrap_err();
        assert!(matches!(err, Error::MalformedCard { ref card, .. } if card == "1♠"));

        let err = Table::from_slots([("p1c1", "A♠"), ("q2c1", "K♠")]).unwrap_err();
        assert_eq!(err, Error::MalformedSlot("q2c1".to_string()));

        let err = Table::from_slots([("p1c1", "A♠"), ("b2", "As")]).unwrap_err();
        assert_eq!(err, Error::DuplicateCard(card("A♠")));
    }

    #[test]
    fn active_and_folded_seats() {
        let mut table = Table::from_slots([("p1c1", "A♠"), ("p2c1", "K♠")]).unwrap();
        table.set_active(seat(5), true).unwrap();
        assert_eq!(table.seats(), vec![seat(1), seat(2), seat(5)]);

        assert_eq!(table.toggle_fold(seat(3)), Err(Error::InvalidSeat(3)));
        assert!(table.toggle_fold(seat(2)).unwrap());
        assert!(table.is_folded(seat(2)));

        // Folded cards are dead but the seat doesn't contest the pot.
        let scenario = table.scenario().unwrap();
        assert!(scenario.dead().contains(card("K♠")));
        let ids = scenario.contestants().iter().map(|c| c.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![seat(1), seat(5)]);

        assert!(!table.toggle_fold(seat(2)).unwrap());
        assert_eq!(table.contestants().len(), 3);

        // Leaving the hand clears the hole cards and the fold.
        table.toggle_fold(seat(1)).unwrap();
        table.set_active(seat(1), false).unwrap();
        assert!(!table.is_folded(seat(1)));
        assert_eq!(table.card(SlotId::Hole(seat(1), 0)), None);
        assert_eq!(table.set_active(seat(0), true), Err(Error::InvalidSeat(0)));

        table.toggle_fold(seat(2)).unwrap();
        table.reset();
        assert!(table.dead_cards().is_empty());
        assert!(!table.is_folded(seat(2)));
        assert_eq!(table.seats(), vec![seat(2), seat(5)]);
    }

    #[test]
    fn dealer_rotation() {
        let mut table = Table::new();
        for n in [2, 5, 9] {
            table.set_active(seat(n), true).unwrap();
        }

        // The button skips seats that are not in the hand and wraps around.
        assert_eq!(table.dealer(), seat(1));
        assert_eq!(table.rotate_dealer(), seat(2));
        assert_eq!(table.rotate_dealer(), seat(5));
        assert_eq!(table.rotate_dealer(), seat(9));
        assert_eq!(table.rotate_dealer(), seat(2));

        // A new hand moves the button.
        table.assign(SlotId::Board(0), card("A♠")).unwrap();
        table.reset();
        assert_eq!(table.dealer(), seat(5));
        assert!(table.dead_cards().is_empty());

        // With a single seat in the hand the button goes there and stays.
        let mut table = Table::new();
        table.set_active(seat(4), true).unwrap();
        assert_eq!(table.rotate_dealer(), seat(4));
        assert_eq!(table.rotate_dealer(), seat(4));

        // With no seats in the hand the button doesn't move.
        let mut table = Table::new();
        assert_eq!(table.rotate_dealer(), seat(1));
        assert_eq!(table.set_dealer(seat(10)), Err(Error::InvalidSeat(10)));
    }

    #[test]
    fn blind_positions() {
        let mut table = Table::new();
        assert_eq!(table.positions(), None);

        table.set_active(seat(6), true).unwrap();
        assert_eq!(table.positions(), None);

        // Heads-up the dealer is the small blind.
        table.set_active(seat(3), true).unwrap();
        table.set_dealer(seat(6)).unwrap();
        let positions = table.positions().unwrap();
        assert_eq!(positions.dealer, seat(6));
        assert_eq!(positions.small_blind, seat(6));
        assert_eq!(positions.big_blind, seat(3));
        assert_eq!(positions.under_the_gun, None);
        assert_eq!(positions.label(seat(6)), "D/SB");
        assert_eq!(positions.label(seat(3)), "BB");

        // An inactive dealer seat falls back to the lowest seat in the hand.
        table.set_active(seat(9), true).unwrap();
        table.set_dealer(seat(1)).unwrap();
        assert_eq!(
            table.positions(),
            Some(Positions {
                dealer: seat(3),
                small_blind: seat(6),
                big_blind: seat(9),
                under_the_gun: None,
            })
        );

        // The blinds wrap past the last seat, four seats have an UTG.
        table.set_active(seat(1), true).unwrap();
        table.set_dealer(seat(6)).unwrap();
        let positions = table.positions().unwrap();
        assert_eq!(positions.small_blind, seat(9));
        assert_eq!(positions.big_blind, seat(1));
        assert_eq!(positions.under_the_gun, Some(seat(3)));
        assert_eq!(positions.label(seat(3)), "UTG");
        assert_eq!(positions.label(seat(6)), "D");
        assert_eq!(positions.label(seat(2)), "");
    }

    #[test]
    fn table_odds() {
        let mut table = Table::from_slots([
            ("p1c1", "A♠"),
            ("p1c2", "A♥"),
            ("p2c1", "K♦"),
            ("p2c2", "K♣"),
            ("p3c1", "Q♦"),
            ("p3c2", "Q♣"),
            ("b0", "2♣"),
            ("b1", "7♦"),
            ("b2", "9♠"),
            ("b3", "J♥"),
            ("b4", "4♦"),
        ])
        .unwrap();
        table.toggle_fold(seat(3)).unwrap();

        let odds = table.odds(&mut seeded(200)).unwrap();
        assert!(odds.board_complete());
        assert!(odds.is_complete());
        assert_eq!(odds.trials(), 200);
        assert_eq!(odds.get(seat(1)), Some(SeatOdds::Equity(1.0)));
        assert_eq!(odds.get(seat(2)), Some(SeatOdds::Equity(0.0)));
        assert_eq!(odds.get(seat(3)), Some(SeatOdds::Folded));
        assert_eq!(odds.get(seat(4)), None);
        assert_eq!(odds.leaders(), vec![seat(1)]);
        assert_eq!(odds.winners(), Some(vec![seat(1)]));
        assert_eq!(odds.status(), "Simulated 2 players over 200 trials");

        let seats = odds.iter().map(|(_, o)| o.to_string()).collect::<Vec<_>>();
        assert_eq!(seats, vec!["100.0%", "0.0%", "Fold"]);

        // With an unknown river there are no winners yet.
        table.clear(SlotId::Board(4));
        let odds = table.odds(&mut seeded(200)).unwrap();
        assert!(!odds.board_complete());
        assert_eq!(odds.winners(), None);
    }

    #[test]
    fn split_pot_leaders() {
        let table = Table::from_slots([
            ("p1c1", "2♠"),
            ("p1c2", "3♠"),
            ("p2c1", "2♥"),
            ("p2c2", "3♥"),
            ("b0", "A♣"),
            ("b1", "K♦"),
            ("b2", "Q♠"),
            ("b3", "J♥"),
            ("b4", "10♦"),
        ])
        .unwrap();

        let odds = table.odds(&mut seeded(100)).unwrap();
        assert_eq!(odds.get(seat(1)), Some(SeatOdds::Equity(0.5)));
        assert_eq!(odds.leaders(), vec![seat(1), seat(2)]);
    }

    #[test]
    fn insufficient_players() {
        let mut table = Table::from_slots([("p1c1", "A♠"), ("p2c1", "K♠")]).unwrap();
        table.toggle_fold(seat(2)).unwrap();

        let err = table.odds(&mut seeded(10)).unwrap_err();
        assert_eq!(err, Error::InsufficientPlayers);
        assert_eq!(
            err.to_string(),
            "At least two active players are needed to compute the odds"
        );
    }

    #[test]
    fn deal_streets() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut table = Table::from_slots([("p1c1", "A♠"), ("p1c2", "A♥")]).unwrap();
        table.set_active(seat(2), true).unwrap();

        assert_eq!(table.deal_next_street(&mut rng).unwrap(), Street::Flop);
        assert_eq!(table.board_count(), 3);
        assert_eq!(table.deal_next_street(&mut rng).unwrap(), Street::Turn);
        assert_eq!(table.deal_next_street(&mut rng).unwrap(), Street::River);
        assert_eq!(table.board_count(), 5);
        assert_eq!(table.deal_next_street(&mut rng), Err(Error::BoardComplete));

        // Dealt cards are unique and never the hole cards.
        assert_eq!(table.dead_cards().len(), 7);

        // A partial flop is completed.
        table.reset();
        table.assign(SlotId::Board(1), card("7♦")).unwrap();
        assert_eq!(table.deal_next_street(&mut rng).unwrap(), Street::Flop);
        assert_eq!(table.card(SlotId::Board(1)), Some(card("7♦")));
        assert!(table.board()[..3].iter().all(Option::is_some));
        assert!(table.board()[3..].iter().all(Option::is_none));
    }
}
