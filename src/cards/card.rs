//! Card values and Trojans.
//!
//! A `Card` is owned by exactly one container at a time (a hand, a deck pile
//! or a stack). Moving a card between containers moves the value, so a card
//! can never be referenced from two places.
//!
//! ## Trojans
//!
//! A Trojan is a card that looks like another card. It takes the kind and
//! value of the card it wraps, and when triggered it is swapped for a freshly
//! synthesized hostile card:
//!
//! ```
//! use infection_engine::cards::{Card, CardKind};
//! use infection_engine::core::CardId;
//!
//! let disguise = Card::new(CardId::new(0), CardKind::Firewall, 0);
//! let trojan = Card::trojan(CardId::new(1), disguise);
//! assert_eq!(trojan.kind, CardKind::Firewall);
//!
//! let revealed = trojan.replace(CardId::new(2)).unwrap();
//! assert_eq!(revealed.kind, CardKind::Ransom);
//! assert!(revealed.is_extra);
//! ```

use serde::{Deserialize, Serialize};

use super::kind::CardKind;
use crate::core::entity::CardId;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Stable identity. Two cards with equal kind and value are still
    /// different cards.
    pub id: CardId,

    pub kind: CardKind,

    pub value: i32,

    /// True if the card was synthesized by a game rule rather than dealt.
    pub is_extra: bool,

    /// The wrapped card when this card is a Trojan.
    mimic: Option<Box<Card>>,
}

impl Card {
    /// Create a dealt card.
    #[must_use]
    pub fn new(id: CardId, kind: CardKind, value: i32) -> Self {
        Self {
            id,
            kind,
            value,
            is_extra: false,
            mimic: None,
        }
    }

    /// Create a card synthesized by a game rule.
    #[must_use]
    pub fn extra(id: CardId, kind: CardKind, value: i32) -> Self {
        Self {
            is_extra: true,
            ..Self::new(id, kind, value)
        }
    }

    /// Create a Trojan disguised as `card`.
    #[must_use]
    pub fn trojan(id: CardId, card: Card) -> Self {
        Self {
            id,
            kind: card.kind,
            value: card.value,
            is_extra: false,
            mimic: Some(Box::new(card)),
        }
    }

    #[must_use]
    pub fn is_mimic(&self) -> bool {
        self.mimic.is_some()
    }

    /// The card a Trojan is hiding behind.
    #[must_use]
    pub fn mimicked(&self) -> Option<&Card> {
        self.mimic.as_deref()
    }

    /// Synthesize the card a Trojan turns into, stamped with `id`.
    ///
    /// Returns `None` for cards that are not Trojans. The Trojan itself is
    /// left untouched, and every call builds a new card.
    #[must_use]
    pub fn replace(&self, id: CardId) -> Option<Card> {
        let wrapped = self.mimic.as_deref()?;
        Some(Card::extra(id, replacement_kind(wrapped.kind), 0))
    }

    /// A lone single repeat: `REPEAT(1)`.
    #[must_use]
    pub fn is_unpaired_rx(&self) -> bool {
        self.kind == CardKind::Repeat && self.value == 1
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.kind, self.value)
    }
}

/// What a Trojan disguised as `kind` resolves into.
#[must_use]
pub fn replacement_kind(kind: CardKind) -> CardKind {
    if kind.is_safety() || matches!(kind, CardKind::Group | CardKind::Instruction) {
        CardKind::Ransom
    } else if kind.is_attack() || kind == CardKind::Virus {
        CardKind::Spyware
    } else {
        CardKind::Virus
    }
}
