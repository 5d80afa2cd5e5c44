// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand value and category types.
use serde::{Deserialize, Serialize};
use std::fmt;

use showdown_cards::Card;

/// The hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
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
}

impl HandRank {
    /// All categories from the weakest to the strongest.
    pub const ALL: [HandRank; 9] = [
        HandRank::HighCard,
        HandRank::OnePair,
        HandRank::TwoPair,
        HandRank::ThreeOfAKind,
        HandRank::Straight,
        HandRank::Flush,
        HandRank::FullHouse,
        HandRank::FourOfAKind,
        HandRank::StraightFlush,
    ];
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        f.write_str(name)
    }
}

/// The value of a hand, a greater value is a stronger hand.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct HandValue(u32);

impl HandValue {
    /// The value for hands with less than 5 cards, lower than any other value.
    pub const NONE: HandValue = HandValue(0);

    /// Bit position of the hand category.
    const CATEGORY_SHIFT: u32 = 20;

    /// Evaluates a 5, 6, or 7 cards hand.
    ///
    /// Returns [HandValue::NONE] if the hand has less than 5 cards.
    pub fn eval(cards: &[Card]) -> HandValue {
        Self::try_eval(cards).unwrap_or(Self::NONE)
    }

    /// Evaluates a 5, 6, or 7 cards hand, returns `None` for less than 5 cards.
    pub fn try_eval(cards: &[Card]) -> Option<HandValue> {
        (cards.len() >= 5).then(|| Tally::new(cards).value())
    }

    /// Evaluates a hand and returns the five cards that make the best hand.
    ///
    /// This goes through all the 5-cards subsets, use [HandValue::eval] when
    /// the cards are not needed.
    pub fn eval_with_best_hand(cards: &[Card]) -> Option<(HandValue, [Card; 5])> {
        let n = cards.len();
        let mut best: Option<(HandValue, [Card; 5])> = None;

        for c1 in 0..n {
            for c2 in (c1 + 1)..n {
                for c3 in (c2 + 1)..n {
                    for c4 in (c3 + 1)..n {
                        for c5 in (c4 + 1)..n {
                            let hand = [cards[c1], cards[c2], cards[c3], cards[c4], cards[c5]];
                            let value = Tally::new(&hand).value();
                            if best.is_none_or(|(v, _)| value > v) {
                                best = Some((value, hand));
                            }
                        }
                    }
                }
            }
        }

        best.map(|(value, mut hand)| {
            hand.sort_by(|a, b| b.rank().cmp(&a.rank()));
            (value, hand)
        })
    }

    /// The hand category, [HandValue::NONE] is reported as a high card.
    pub fn rank(&self) -> HandRank {
        HandRank::ALL
            .get((self.0 >> Self::CATEGORY_SHIFT) as usize)
            .copied()
            .unwrap_or(HandRank::HighCard)
    }

    /// Checks if this is the value of an hand with less than 5 cards.
    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// The encoded value.
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Encodes a category and up to five rank values in decreasing order of
    /// significance.
    fn new(rank: HandRank, digits: impl IntoIterator<Item = u8>) -> HandValue {
        let value = digits
            .into_iter()
            .zip([16, 12, 8, 4, 0])
            .fold((rank as u32) << Self::CATEGORY_SHIFT, |acc, (digit, shift)| {
                acc | ((digit as u32) << shift)
            });
        HandValue(value)
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            f.write_str("No Hand")
        } else {
            write!(f, "{}", self.rank())
        }
    }
}

/// Bit mask of the ranks in a 5 cards straight.
const STRAIGHT_MASK: u16 = 0x1f;

/// Ranks and suits counters for a hand.
///
/// Ranks are indexed by value (deuce=2, ..., ace=14) and rank masks have bit
/// `value` set for each rank present.
struct Tally {
    counts: [u8; 15],
    ranks: u16,
    suit_counts: [u8; 4],
    suit_ranks: [u16; 4],
}

impl Tally {
    fn new(cards: &[Card]) -> Self {
        let mut tally = Tally {
            counts: [0; 15],
            ranks: 0,
            suit_counts: [0; 4],
            suit_ranks: [0; 4],
        };

        for card in cards {
            let value = card.rank().value();
            let suit = card.suit() as usize;
            tally.counts[value as usize] += 1;
            tally.ranks |= 1 << value;
            tally.suit_counts[suit] += 1;
            tally.suit_ranks[suit] |= 1 << value;
        }

        tally
    }

    fn value(&self) -> HandValue {
        let flush = (0..4)
            .find(|&suit| self.suit_counts[suit] >= 5)
            .map(|suit| self.suit_ranks[suit]);

        // Only the flush suited cards can make a straight flush.
        if let Some(high) = flush.and_then(straight_high) {
            return HandValue::new(HandRank::StraightFlush, [high]);
        }

        if let Some(quads) = self.highest_with_count(4, None) {
            let kicker = descending(self.ranks & !(1 << quads)).take(1);
            return HandValue::new(HandRank::FourOfAKind, [quads].into_iter().chain(kicker));
        }

        let trips = self.highest_with_count(3, None);
        if let Some(trips) = trips {
            // The pair can be another three of a kind, take the highest group.
            if let Some(pair) = self.highest_with_count(2, Some(trips)) {
                return HandValue::new(HandRank::FullHouse, [trips, pair]);
            }
        }

        if let Some(flush) = flush {
            return HandValue::new(HandRank::Flush, descending(flush).take(5));
        }

        if let Some(high) = straight_high(self.ranks) {
            return HandValue::new(HandRank::Straight, [high]);
        }

        if let Some(trips) = trips {
            let kickers = descending(self.ranks & !(1 << trips)).take(2);
            return HandValue::new(HandRank::ThreeOfAKind, [trips].into_iter().chain(kickers));
        }

        if let Some(high_pair) = self.highest_with_count(2, None) {
            if let Some(low_pair) = self.highest_with_count(2, Some(high_pair)) {
                let kicker = descending(self.ranks & !(1 << high_pair) & !(1 << low_pair)).take(1);
                return HandValue::new(
                    HandRank::TwoPair,
                    [high_pair, low_pair].into_iter().chain(kicker),
                );
            }

            let kickers = descending(self.ranks & !(1 << high_pair)).take(3);
            return HandValue::new(HandRank::OnePair, [high_pair].into_iter().chain(kickers));
        }

        HandValue::new(HandRank::HighCard, descending(self.ranks).take(5))
    }

    /// The highest rank with at least `count` cards, skipping `exclude`.
    fn highest_with_count(&self, count: u8, exclude: Option<u8>) -> Option<u8> {
        (2..=14u8)
            .rev()
            .filter(|&value| Some(value) != exclude)
            .find(|&value| self.counts[value as usize] >= count)
    }
}

/// Iterates the rank values in the mask from the highest.
fn descending(ranks: u16) -> impl Iterator<Item = u8> {
    (2..=14u8).rev().filter(move |&value| ranks & (1 << value) != 0)
}

/// Returns the high rank of the best straight in the mask, if any.
fn straight_high(ranks: u16) -> Option<u8> {
    // An ace plays low in the wheel.
    let ranks = if ranks & (1 << 14) != 0 {
        ranks | (1 << 1)
    } else {
        ranks
    };

    (5..=14u8)
        .rev()
        .find(|&high| (ranks >> (high - 4)) & STRAIGHT_MASK == STRAIGHT_MASK)
}
