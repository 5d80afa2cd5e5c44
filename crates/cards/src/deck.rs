// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// All ranks in ascending order.
const RANKS: [Rank; 13] = [
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

/// A Poker card.
///
/// A card is stored as a single byte index into the 52 cards universe:
///
/// ```text
///   id = suit * 13 + rank
///   rank = deuce=0, trey=1, ..., ace=12
///   suit = spades=0, hearts=1, diamonds=2, clubs=3
/// ```
///
/// the id is used as the bit position of the card in a [CardSet].
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card(u8);

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self(suit as u8 * 13 + rank as u8)
    }

    /// Create a card from its id, returns `None` if the id is not 0 <= id < 52.
    pub fn from_id(id: u8) -> Option<Card> {
        (id < Deck::SIZE as u8).then_some(Self(id))
    }

    /// This card unique id.
    pub fn id(&self) -> u8 {
        self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.0 / 13 {
            0 => Suit::Spades,
            1 => Suit::Hearts,
            2 => Suit::Diamonds,
            3 => Suit::Clubs,
            _ => panic!("Invalid suit value 0x{:x}", self.0),
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        RANKS[(self.0 % 13) as usize]
    }

    /// Returns the card using the table symbols, like `A♠` or `10♥`.
    pub fn symbol(&self) -> String {
        format!("{}{}", self.rank().symbol(), self.suit().symbol())
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

/// Error returned when a string cannot be parsed into a card.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The string is empty.
    #[error("empty card")]
    Empty,
    /// The rank part is not a valid rank.
    #[error("invalid rank '{0}'")]
    InvalidRank(String),
    /// The suit part is not a valid suit.
    #[error("invalid suit '{0}'")]
    InvalidSuit(String),
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a rank followed by a suit, `10♥`, `A♠`, `Td`, `KC` are all valid.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let suit_start = s
            .char_indices()
            .last()
            .map(|(idx, _)| idx)
            .ok_or(ParseCardError::Empty)?;

        let rank = s[..suit_start].parse::<Rank>()?;
        let suit = s[suit_start..].parse::<Suit>()?;
        Ok(Card::new(rank, suit))
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
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
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        RANKS.into_iter()
    }

    /// The rank value, from 2 for a deuce to 14 for an ace.
    pub fn value(&self) -> u8 {
        *self as u8 + 2
    }

    /// Returns the rank with the given value 2 <= value <= 14.
    pub fn from_value(value: u8) -> Option<Rank> {
        value
            .checked_sub(2)
            .and_then(|idx| RANKS.get(idx as usize).copied())
    }

    /// The rank symbol used on the table, tens are shown as `10`.
    pub fn symbol(&self) -> &'static str {
        match self {
            Rank::Deuce => "2",
            Rank::Trey => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Ten => 'T',
            r => r.symbol().chars().next().unwrap_or('?'),
        };

        write!(f, "{rank}")
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s.to_ascii_uppercase().as_str() {
            "" => return Err(ParseCardError::Empty),
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(ParseCardError::InvalidRank(s.to_string())),
        };

        Ok(rank)
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit.
    Spades = 0,
    /// Hearts suit.
    Hearts = 1,
    /// Diamonds suit.
    Diamonds = 2,
    /// Clubs suit.
    Clubs = 3,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs].into_iter()
    }

    /// The suit symbol used on the table.
    pub fn symbol(&self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }
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

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let suit = match (chars.next(), chars.next()) {
            (None, _) => return Err(ParseCardError::Empty),
            (Some('♠' | 's' | 'S'), None) => Suit::Spades,
            (Some('♥' | 'h' | 'H'), None) => Suit::Hearts,
            (Some('♦' | 'd' | 'D'), None) => Suit::Diamonds,
            (Some('♣' | 'c' | 'C'), None) => Suit::Clubs,
            _ => return Err(ParseCardError::InvalidSuit(s.to_string())),
        };

        Ok(suit)
    }
}

/// A set of cards stored as a 52 bits mask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CardSet(u64);

impl CardSet {
    /// The empty set.
    pub const EMPTY: CardSet = CardSet(0);

    /// Adds a card to the set, returns false if the card was already there.
    pub fn insert(&mut self, card: Card) -> bool {
        let present = self.contains(card);
        self.0 |= 1 << card.id();
        !present
    }

    /// Checks if the card is in the set.
    pub fn contains(&self, card: Card) -> bool {
        self.0 & (1 << card.id()) != 0
    }

    /// Number of cards in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Checks if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut set = CardSet::EMPTY;
        for card in iter {
            set.insert(card);
        }
        set
    }
}

impl Extend<Card> for CardSet {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        for card in iter {
            self.insert(card);
        }
    }
}

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
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

    /// Creates a deck with all cards not in the `dead` set.
    pub fn without(dead: CardSet) -> Self {
        let mut deck = Deck {
            cards: Vec::with_capacity(Self::SIZE),
        };
        deck.refill(dead);
        deck
    }

    /// Refills the deck with all cards not in the `dead` set, in id order.
    ///
    /// The deck storage is reused so refilling doesn't allocate.
    pub fn refill(&mut self, dead: CardSet) {
        self.cards.clear();
        self.cards.extend(
            (0..Self::SIZE as u8)
                .map(Card)
                .filter(|card| !dead.contains(*card)),
        );
    }

    /// Shuffles the cards left in the deck.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals a card from the deck, returns `None` if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::without(CardSet::EMPTY)
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn card_encoding() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while let Some(card) = deck.deal() {
            assert_eq!(Card::new(card.rank(), card.suit()), card);
            assert_eq!(Card::from_id(card.id()), Some(card));
            cards.insert(card.id());
        }

        // Check uniquness.
        assert_eq!(cards.len(), Deck::SIZE);
        assert_eq!(Card::from_id(52), None);

        let kd = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(kd.rank().value(), 13);
        assert_eq!(kd.suit(), Suit::Diamonds);
    }

    #[test]
    fn rank_values() {
        assert_eq!(Rank::Deuce.value(), 2);
        assert_eq!(Rank::Jack.value(), 11);
        assert_eq!(Rank::Ace.value(), 14);

        for rank in Rank::ranks() {
            assert_eq!(Rank::from_value(rank.value()), Some(rank));
        }

        assert_eq!(Rank::from_value(1), None);
        assert_eq!(Rank::from_value(15), None);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");
        assert_eq!(c.symbol(), "K♦");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");
        assert_eq!(c.symbol(), "10♥");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "AH");
    }

    #[test]
    fn parse_cards() {
        let ts = Card::new(Rank::Ten, Suit::Spades);
        assert_eq!("10♠".parse::<Card>(), Ok(ts));
        assert_eq!("Ts".parse::<Card>(), Ok(ts));
        assert_eq!("TS".parse::<Card>(), Ok(ts));
        assert_eq!(" 10s ".parse::<Card>(), Ok(ts));

        assert_eq!(
            "A♥".parse::<Card>(),
            Ok(Card::new(Rank::Ace, Suit::Hearts))
        );
        assert_eq!("2c".parse::<Card>(), Ok(Card::new(Rank::Deuce, Suit::Clubs)));

        // Every card symbol and display string parses back to the card.
        for card in Deck::default() {
            assert_eq!(card.symbol().parse::<Card>(), Ok(card));
            assert_eq!(card.to_string().parse::<Card>(), Ok(card));
        }
    }

    #[test]
    fn parse_malformed_cards() {
        assert_eq!("".parse::<Card>(), Err(ParseCardError::Empty));
        assert_eq!("♠".parse::<Card>(), Err(ParseCardError::Empty));
        assert_eq!(
            "1♠".parse::<Card>(),
            Err(ParseCardError::InvalidRank("1".to_string()))
        );
        assert_eq!(
            "11h".parse::<Card>(),
            Err(ParseCardError::InvalidRank("11".to_string()))
        );
        assert_eq!(
            "Ax".parse::<Card>(),
            Err(ParseCardError::InvalidSuit("x".to_string()))
        );
    }

    #[test]
    fn card_set() {
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        let kd = Card::new(Rank::King, Suit::Diamonds);

        let mut set = CardSet::default();
        assert!(set.is_empty());
        assert!(set.insert(ah));
        assert!(!set.insert(ah));
        assert!(set.insert(kd));
        assert_eq!(set.len(), 2);
        assert!(set.contains(ah));
        assert!(!set.contains(Card::new(Rank::Ace, Suit::Spades)));

        let all = Deck::default().into_iter().collect::<CardSet>();
        assert_eq!(all.len(), Deck::SIZE);
        assert!(all.contains(kd));
    }

    #[test]
    fn deck_without_dead_cards() {
        let dead = [
            Card::new(Rank::Ace, Suit::Diamonds),
            Card::new(Rank::King, Suit::Diamonds),
        ]
        .into_iter()
        .collect::<CardSet>();

        let mut deck = Deck::without(dead);
        assert_eq!(deck.count(), Deck::SIZE - 2);

        deck.shuffle(&mut StdRng::seed_from_u64(7));
        let mut dealt = 0;
        while let Some(card) = deck.deal() {
            assert!(!dead.contains(card));
            dealt += 1;
        }
        assert_eq!(dealt, 50);
        assert!(deck.is_empty());
        assert_eq!(deck.deal(), None);

        // Refill reuses the deck.
        deck.refill(dead);
        assert_eq!(deck.count(), 50);
    }

    #[test]
    fn seeded_shuffle_is_deterministic() {
        let d1 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(42));
        let d2 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(42));
        assert_eq!(
            d1.into_iter().collect::<Vec<_>>(),
            d2.into_iter().collect::<Vec<_>>()
        );
    }
}
