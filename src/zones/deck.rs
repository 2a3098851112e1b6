//! The shared draw and discard piles.
//!
//! Top of each pile is the back of its `im::Vector`, so cloning a deck
//! shares structure. When the draw pile runs dry the discard pile is shuffled
//! back in before drawing.

use im::Vector;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::config::DeckConfig;
use crate::core::entity::IdAllocator;
use crate::core::error::{GameError, GameResult};
use crate::core::rng::GameRng;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    draw_pile: Vector<Card>,
    discard_pile: Vector<Card>,
}

impl Deck {
    /// Create a deck from explicit piles. Pile order is kept as given.
    #[must_use]
    pub fn from_piles(draw_pile: Vec<Card>, discard_pile: Vec<Card>) -> Self {
        Self {
            draw_pile: draw_pile.into_iter().collect(),
            discard_pile: discard_pile.into_iter().collect(),
        }
    }

    /// Build and shuffle a deck for `player_count` players.
    ///
    /// Every card gets a fresh id from `ids`. Mimic rows produce Trojans,
    /// each wrapping its own copy of the disguise card.
    pub fn build(
        config: &DeckConfig,
        player_count: usize,
        ids: &mut IdAllocator,
        rng: &mut GameRng,
    ) -> Self {
        let mut draw_pile = Vec::with_capacity(config.card_count(player_count));

        for entry in &config.entries {
            for _ in 0..entry.copies(player_count) {
                let card = Card::new(ids.next_card(), entry.kind, entry.value);
                if entry.mimic {
                    draw_pile.push(Card::trojan(ids.next_card(), card));
                } else {
                    draw_pile.push(card);
                }
            }
        }

        rng.shuffle(&mut draw_pile);
        debug!("built deck of {} cards for {} players", draw_pile.len(), player_count);

        Self {
            draw_pile: draw_pile.into_iter().collect(),
            discard_pile: Vector::new(),
        }
    }

    /// Draw the top card, reshuffling the discard pile in if needed.
    ///
    /// Fails with `EmptyDeck` only when both piles are empty, in which case
    /// nothing changes.
    pub fn draw(&mut self, rng: &mut GameRng) -> GameResult<Card> {
        if self.draw_pile.is_empty() {
            if self.discard_pile.is_empty() {
                return Err(GameError::EmptyDeck);
            }
            self.reshuffle(rng);
        }
        self.draw_pile.pop_back().ok_or(GameError::EmptyDeck)
    }

    /// Draw `count` cards, or none at all if the piles cannot supply them.
    pub fn draw_many(&mut self, count: usize, rng: &mut GameRng) -> GameResult<Vec<Card>> {
        if self.total_len() < count {
            return Err(GameError::EmptyDeck);
        }
        (0..count).map(|_| self.draw(rng)).collect()
    }

    /// Put a card on the discard pile.
    pub fn discard(&mut self, card: Card) {
        self.discard_pile.push_back(card);
    }

    /// Move the whole discard pile under the draw pile and shuffle.
    fn reshuffle(&mut self, rng: &mut GameRng) {
        debug!("reshuffling {} discarded cards into draw pile", self.discard_pile.len());
        let mut pile: Vec<Card> = self.draw_pile.iter().cloned().collect();
        pile.extend(std::mem::take(&mut self.discard_pile));
        rng.shuffle(&mut pile);
        self.draw_pile = pile.into_iter().collect();
    }

    #[must_use]
    pub fn draw_len(&self) -> usize {
        self.draw_pile.len()
    }

    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard_pile.len()
    }

    #[must_use]
    pub fn total_len(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len()
    }

    #[must_use]
    pub fn draw_pile(&self) -> &Vector<Card> {
        &self.draw_pile
    }

    #[must_use]
    pub fn discard_pile(&self) -> &Vector<Card> {
        &self.discard_pile
    }

    #[must_use]
    pub fn top_of_discard(&self) -> Option<&Card> {
        self.discard_pile.back()
    }
}
