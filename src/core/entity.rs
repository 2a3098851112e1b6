//! Stable identifiers for cards and stacks.
//!
//! Every card and every stack gets an id at creation time. Containers look
//! cards up by id, never by value, so two `Virus(3)` cards in the same hand
//! stay distinguishable.
//!
//! ## Usage
//!
//! ```
//! use infection_engine::core::{CardId, IdAllocator};
//!
//! let mut ids = IdAllocator::new();
//! let a = ids.next_card();
//! let b = ids.next_card();
//! assert_ne!(a, b);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Unique identifier for a stack on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StackId(pub u32);

impl StackId {
    /// Create a stack ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for StackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Stack({})", self.0)
    }
}

/// Monotonic allocator for card and stack IDs.
///
/// Card and stack IDs come from separate counters. IDs are never reused
/// within one game, including after a card leaves play.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdAllocator {
    next_card: u32,
    next_stack: u32,
}

impl IdAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh card ID.
    pub fn next_card(&mut self) -> CardId {
        let id = CardId(self.next_card);
        self.next_card += 1;
        id
    }

    /// Allocate a fresh stack ID.
    pub fn next_stack(&mut self) -> StackId {
        let id = StackId(self.next_stack);
        self.next_stack += 1;
        id
    }

    /// Number of card IDs handed out so far.
    #[must_use]
    pub fn cards_allocated(&self) -> u32 {
        self.next_card
    }
}
