//! A player's hand.
//!
//! Cards are found and removed by `CardId`; equal-valued duplicates are fine.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardKind};
use crate::core::entity::CardId;
use crate::core::player::PlayerId;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    pub player: PlayerId,
    cards: Vector<Card>,
}

impl Hand {
    #[must_use]
    pub fn new(player: PlayerId) -> Self {
        Self {
            player,
            cards: Vector::new(),
        }
    }

    #[must_use]
    pub fn with_cards(player: PlayerId, cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            player,
            cards: cards.into_iter().collect(),
        }
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Take a card out of the hand by id.
    pub fn remove(&mut self, id: CardId) -> Option<Card> {
        let pos = self.cards.iter().position(|c| c.id == id)?;
        Some(self.cards.remove(pos))
    }

    /// Empty the hand, returning its cards in hand order.
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards).into_iter().collect()
    }

    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.get(id).is_some()
    }

    /// First card of the given kind, in hand order.
    #[must_use]
    pub fn find_kind(&self, kind: CardKind) -> Option<&Card> {
        self.cards.iter().find(|c| c.kind == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
