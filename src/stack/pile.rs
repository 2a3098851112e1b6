//! A single stack on the board.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::entity::StackId;
use crate::core::player::PlayerId;

/// An ordered pile of cards played against one player.
///
/// The bottom card is held separately from the rest, so a stack can never be
/// empty: the only way to build one is with its first card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack {
    pub id: StackId,

    /// The player under attack or defense.
    pub owner: PlayerId,

    /// Index 0: the card that opened the stack.
    bottom: Card,

    /// Everything played on top of it, oldest first.
    rest: Vector<Card>,
}

impl Stack {
    #[must_use]
    pub fn new(id: StackId, owner: PlayerId, first: Card) -> Self {
        Self {
            id,
            owner,
            bottom: first,
            rest: Vector::new(),
        }
    }

    pub fn push(&mut self, card: Card) {
        self.rest.push_back(card);
    }

    /// Swap the top card for `card`, returning the card that was on top.
    pub fn replace_top(&mut self, card: Card) -> Card {
        match self.rest.pop_back() {
            Some(old) => {
                self.rest.push_back(card);
                old
            }
            None => std::mem::replace(&mut self.bottom, card),
        }
    }

    /// The card whose kind classifies this stack.
    #[must_use]
    pub fn top(&self) -> &Card {
        self.rest.back().unwrap_or(&self.bottom)
    }

    #[must_use]
    pub fn bottom(&self) -> &Card {
        &self.bottom
    }

    /// Topped by a lone `REPEAT(1)`.
    #[must_use]
    pub fn is_unpaired_rx(&self) -> bool {
        self.top().is_unpaired_rx()
    }

    /// Cards bottom to top.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        std::iter::once(&self.bottom).chain(self.rest.iter())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    /// Split into the bottom card and everything above it.
    #[must_use]
    pub fn split_bottom(self) -> (Card, Vec<Card>) {
        (self.bottom, self.rest.into_iter().collect())
    }

    /// All cards, bottom to top.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        let (bottom, rest) = self.split_bottom();
        std::iter::once(bottom).chain(rest).collect()
    }
}
