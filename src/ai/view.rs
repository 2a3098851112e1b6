//! Read-only view of the table for one player's turn.

use im::Vector;

use crate::cards::{Card, CardKind};
use crate::core::{GameError, GameResult, GameState, Player, PlayerId, PlayerMap};
use crate::stack::Stack;
use crate::zones::Hand;

/// Everything a handler may look at when deciding a turn.
///
/// Borrowed from the game state, so nothing can change the table while a
/// decision is being made.
#[derive(Clone, Copy, Debug)]
pub struct TurnView<'a> {
    hand: &'a Hand,
    players: &'a PlayerMap<Player>,
    stacks: &'a Vector<Stack>,
    scores: &'a PlayerMap<i64>,
}

impl<'a> TurnView<'a> {
    /// View of `state` for `player`'s turn.
    pub fn new(state: &'a GameState, player: PlayerId) -> GameResult<Self> {
        Self::from_parts(state.hand(player)?, state.players(), state.stacks(), state.scores())
    }

    /// Build a view from caller-supplied parts. The acting player is the
    /// hand's owner and must be seated.
    pub fn from_parts(
        hand: &'a Hand,
        players: &'a PlayerMap<Player>,
        stacks: &'a Vector<Stack>,
        scores: &'a PlayerMap<i64>,
    ) -> GameResult<Self> {
        if !players.contains(hand.player) || !scores.contains(hand.player) {
            return Err(GameError::UnknownPlayer(hand.player));
        }
        Ok(Self {
            hand,
            players,
            stacks,
            scores,
        })
    }

    #[must_use]
    pub fn hand(&self) -> &'a Hand {
        self.hand
    }

    #[must_use]
    pub fn players(&self) -> &'a PlayerMap<Player> {
        self.players
    }

    #[must_use]
    pub fn stacks(&self) -> &'a Vector<Stack> {
        self.stacks
    }

    /// The acting player's id.
    #[must_use]
    pub fn player_id(&self) -> PlayerId {
        self.hand.player
    }

    /// The acting player.
    #[must_use]
    pub fn me(&self) -> &'a Player {
        &self.players[self.hand.player]
    }

    /// First card of `kind` in the acting player's hand.
    #[must_use]
    pub fn holding(&self, kind: CardKind) -> Option<&'a Card> {
        self.hand.find_kind(kind)
    }

    /// Everyone except the acting player, in seat order.
    pub fn opponents(&self) -> impl Iterator<Item = &'a Player> + 'a {
        let me = self.hand.player;
        self.players.values().filter(move |p| p.id != me)
    }

    #[must_use]
    pub fn score(&self, player: PlayerId) -> i64 {
        self.scores.get(player).copied().unwrap_or(0)
    }
}
