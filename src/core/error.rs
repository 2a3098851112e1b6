//! Error types for data-model operations.
//!
//! The decision chain never returns these: a handler that cannot act simply
//! declines.
//!
//! Operations that take a [`Card`] by value fail with [`Refused`], which hands
//! the card back so it never drops out of the game.

use thiserror::Error;

use super::entity::{CardId, StackId};
use crate::cards::Card;
use super::player::PlayerId;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("deck is empty: no cards in draw or discard pile")]
    EmptyDeck,
    #[error("invalid grouping: {0}")]
    InvalidGrouping(String),
    #[error("unknown stack: {0}")]
    UnknownStack(StackId),
    #[error("unknown player: {0}")]
    UnknownPlayer(PlayerId),
    #[error("{card} is not in the hand of {player}")]
    CardNotInHand { player: PlayerId, card: CardId },
    #[error("illegal move: {0}")]
    IllegalMove(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for GameError {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidConfig(value.to_string())
    }
}

pub type GameResult<T> = Result<T, GameError>;

/// An operation refused the card it was given.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{error} (returned {card})")]
pub struct Refused {
    pub error: GameError,
    pub card: Card,
}

impl Refused {
    #[must_use]
    pub fn new(error: GameError, card: Card) -> Self {
        Self { error, card }
    }

    /// Take the card back, dropping the error.
    #[must_use]
    pub fn into_card(self) -> Card {
        self.card
    }
}

impl From<Refused> for GameError {
    fn from(value: Refused) -> Self {
        value.error
    }
}

/// Result of an operation that consumes a card.
pub type CardResult<T> = Result<T, Refused>;
