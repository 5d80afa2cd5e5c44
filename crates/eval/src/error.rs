// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equity simulation errors.
use thiserror::Error;

use showdown_cards::{Card, ParseCardError};

use crate::equity::Scenario;

/// Errors returned by the simulator and the table snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Less than two players are contesting the pot.
    #[error("At least two active players are needed to compute the odds")]
    InsufficientPlayers,
    /// More players than the deck can deal to.
    #[error(
        "Too many players ({0}), at most {max} players can be dealt in",
        max = Scenario::MAX_CONTESTANTS
    )]
    TooManyContestants(usize),
    /// The deck ran out of cards while dealing unknown cards.
    #[error("Deck exhausted while dealing unknown cards")]
    DeckExhausted,
    /// A card string that doesn't parse into a rank and a suit.
    #[error("Malformed card '{card}': {source}")]
    MalformedCard {
        /// The card string.
        card: String,
        /// The parsing error.
        source: ParseCardError,
    },
    /// A slot identifier that is not a board or hole card slot.
    #[error("Malformed slot '{0}'")]
    MalformedSlot(String),
    /// A seat that doesn't exist or is not in the hand.
    #[error("Invalid seat {0}")]
    InvalidSeat(u8),
    /// The same card assigned to two slots.
    #[error("Card {} is already on the table", .0.symbol())]
    DuplicateCard(Card),
    /// More than five board cards.
    #[error("The board has {0} cards, at most {max} are allowed", max = Scenario::BOARD_SIZE)]
    BoardOverflow(usize),
    /// All five board cards are already known.
    #[error("All the board cards have been dealt")]
    BoardComplete,
}

impl Error {
    /// Creates a malformed card error.
    pub(crate) fn malformed_card(card: &str, source: ParseCardError) -> Self {
        Error::MalformedCard {
            card: card.to_string(),
            source,
        }
    }
}

/// A result with an equity [Error].
pub type Result<T> = std::result::Result<T, Error>;
