//! Players, player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-255 players.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access.
//!
//! ## Player
//!
//! Seat data plus the status effects that gate which moves are legal.
//! Effects are stored as the card kind that caused them; the derived
//! booleans (`has_power_outage`, `has_generator`) read from those lists.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use crate::cards::CardKind;

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The player seated after this one, wrapping around.
    ///
    /// ```
    /// use infection_engine::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).next(3), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per player.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Check whether `player` has a slot in this map.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.data.len()
    }

    /// Get a player's data, or `None` for a foreign id.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a player's data mutably, or `None` for a foreign id.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the stored values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// Status effect list. Most players carry only a handful at once.
pub type EffectList = SmallVec<[CardKind; 4]>;

/// Who sits at the table, before a game is built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSpec {
    pub name: String,
    pub is_ai: bool,
}

impl PlayerSpec {
    pub fn human(name: impl Into<String>) -> Self {
        Self { name: name.into(), is_ai: false }
    }

    pub fn ai(name: impl Into<String>) -> Self {
        Self { name: name.into(), is_ai: true }
    }
}

/// A seated player and their active status effects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub is_ai: bool,
    positive: EffectList,
    negative: EffectList,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, spec: &PlayerSpec) -> Self {
        Self {
            id,
            name: spec.name.clone(),
            is_ai: spec.is_ai,
            positive: EffectList::new(),
            negative: EffectList::new(),
        }
    }

    pub fn add_positive(&mut self, effect: CardKind) {
        self.positive.push(effect);
    }

    pub fn add_negative(&mut self, effect: CardKind) {
        self.negative.push(effect);
    }

    /// Remove one instance of a negative effect. Returns true if found.
    pub fn clear_negative(&mut self, effect: CardKind) -> bool {
        match self.negative.iter().position(|&e| e == effect) {
            Some(pos) => {
                self.negative.remove(pos);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn positive_effects(&self) -> &[CardKind] {
        &self.positive
    }

    #[must_use]
    pub fn negative_effects(&self) -> &[CardKind] {
        &self.negative
    }

    #[must_use]
    pub fn has_power_outage(&self) -> bool {
        self.negative.contains(&CardKind::PowerOutage)
    }

    #[must_use]
    pub fn has_generator(&self) -> bool {
        self.positive.contains(&CardKind::Generator)
    }
}
