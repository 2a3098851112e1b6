//! Move representation: what a turn decided to do.
//!
//! A `Move` is a play type (the "verb"), the acting player, the target
//! player and, for every play type except `Redraw`, the card being played.
//!
//! ## Example
//!
//! ```
//! use infection_engine::core::{CardId, Move, PlayType, PlayerId};
//!
//! let redraw = Move::redraw(PlayerId::new(1));
//! assert_eq!(redraw.target, PlayerId::new(1));
//! assert!(redraw.card.is_none());
//!
//! let attack = Move::new(PlayType::Attack, CardId::new(5), PlayerId::new(1), PlayerId::new(0));
//! assert_eq!(attack.card, Some(CardId::new(5)));
//! ```

use serde::{Deserialize, Serialize};

use super::entity::CardId;
use super::player::PlayerId;

/// The kind of move a turn commits to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayType {
    /// Put a negative effect on another player.
    Attack,
    /// Play a safety card on yourself.
    Safety,
    /// Play an enhancement card on yourself.
    Enhance,
    /// Throw the hand away and draw a new one.
    Redraw,
}

impl PlayType {
    /// Whether this play type spends a card from the hand.
    #[must_use]
    pub const fn needs_card(self) -> bool {
        !matches!(self, Self::Redraw)
    }
}

impl std::fmt::Display for PlayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Attack => "ATTACK",
            Self::Safety => "SAFETY",
            Self::Enhance => "ENHANCE",
            Self::Redraw => "REDRAW",
        };
        f.write_str(name)
    }
}

/// The decided outcome of a turn.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub play_type: PlayType,

    /// Card from the acting player's hand. `None` for `Redraw`.
    pub card: Option<CardId>,

    /// The acting player.
    pub player: PlayerId,

    /// Who the move is aimed at.
    pub target: PlayerId,
}

impl Move {
    /// A move that plays `card`.
    #[must_use]
    pub fn new(play_type: PlayType, card: CardId, player: PlayerId, target: PlayerId) -> Self {
        Self {
            play_type,
            card: Some(card),
            player,
            target,
        }
    }

    /// Redraw: no card, aimed at the acting player.
    #[must_use]
    pub fn redraw(player: PlayerId) -> Self {
        Self {
            play_type: PlayType::Redraw,
            card: None,
            player,
            target: player,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.card {
            Some(card) => write!(f, "{} {} by {} on {}", self.play_type, card, self.player, self.target),
            None => write!(f, "{} by {}", self.play_type, self.player),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redraw_has_no_card() {
        let mv = Move::redraw(PlayerId::new(2));

        assert_eq!(mv.play_type, PlayType::Redraw);
        assert_eq!(mv.card, None);
        assert_eq!(mv.player, mv.target);
        assert!(!mv.play_type.needs_card());
    }

    #[test]
    fn test_display() {
        let mv = Move::new(PlayType::Enhance, CardId(4), PlayerId::new(0), PlayerId::new(0));
        assert_eq!(format!("{}", mv), "ENHANCE Card(4) by Player 0 on Player 0");
        assert_eq!(format!("{}", Move::redraw(PlayerId::new(1))), "REDRAW by Player 1");
    }

    #[test]
    fn test_move_serialization() {
        let mv = Move::new(PlayType::Attack, CardId(12), PlayerId::new(0), PlayerId::new(1));
        let json = serde_json::to_string(&mv).unwrap();
        let deserialized: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, deserialized);
    }
}
