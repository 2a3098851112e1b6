//! Game configuration types.
//!
//! Games configure the engine at startup by providing:
//! - `DeckConfig`: the card distribution table, scaled by player count
//! - `GameConfig`: score limit, hand size and the deck table
//!
//! Configs are plain serde structs so the surrounding application can load
//! them from JSON.

use serde::{Deserialize, Serialize};

use super::error::{GameError, GameResult};
use crate::cards::CardKind;

/// One row of the deck distribution table.
///
/// A game with `n` players gets `base + per_player * n` copies of the card.
/// Rows marked `mimic` produce Trojans disguised as the given kind and value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckEntry {
    pub kind: CardKind,
    pub value: i32,
    pub base: u32,
    #[serde(default)]
    pub per_player: u32,
    #[serde(default)]
    pub mimic: bool,
}

impl DeckEntry {
    pub fn new(kind: CardKind, value: i32, base: u32, per_player: u32) -> Self {
        Self {
            kind,
            value,
            base,
            per_player,
            mimic: false,
        }
    }

    /// Mark this row as Trojans disguised as `kind`/`value`.
    #[must_use]
    pub fn mimic(mut self) -> Self {
        self.mimic = true;
        self
    }

    /// Number of copies for a given player count.
    #[must_use]
    pub fn copies(&self, player_count: usize) -> usize {
        self.base as usize + self.per_player as usize * player_count
    }
}

/// The deck distribution table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckConfig {
    pub entries: Vec<DeckEntry>,
}

impl DeckConfig {
    /// Total number of cards built for a given player count.
    #[must_use]
    pub fn card_count(&self, player_count: usize) -> usize {
        self.entries.iter().map(|e| e.copies(player_count)).sum()
    }
}

impl Default for DeckConfig {
    fn default() -> Self {
        use CardKind::*;

        Self {
            entries: vec![
                DeckEntry::new(Virus, 1, 3, 1),
                DeckEntry::new(Virus, 2, 2, 1),
                DeckEntry::new(Virus, 3, 1, 1),
                DeckEntry::new(Spyware, 1, 2, 1),
                DeckEntry::new(Spyware, 2, 1, 1),
                DeckEntry::new(Ransom, 1, 2, 1),
                DeckEntry::new(Ransom, 2, 1, 1),
                DeckEntry::new(Repeat, 1, 2, 1),
                DeckEntry::new(Repeat, 2, 1, 1),
                DeckEntry::new(Variable, 0, 1, 1),
                DeckEntry::new(Group, 0, 1, 1),
                DeckEntry::new(Instruction, 0, 1, 0),
                DeckEntry::new(PowerOutage, 0, 1, 1),
                DeckEntry::new(Hack, 0, 1, 1),
                DeckEntry::new(Firewall, 0, 1, 1),
                DeckEntry::new(Antivirus, 0, 1, 1),
                DeckEntry::new(Generator, 0, 1, 1),
                DeckEntry::new(BatteryBackup, 0, 1, 1),
                DeckEntry::new(Virus, 1, 1, 0).mimic(),
                DeckEntry::new(Firewall, 0, 0, 1).mimic(),
            ],
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// First score to reach this value wins.
    pub score_limit: i64,

    /// Cards dealt by a fresh hand.
    pub hand_size: usize,

    /// Deck distribution table.
    #[serde(default)]
    pub deck: DeckConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            score_limit: 75,
            hand_size: 5,
            deck: DeckConfig::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a config from JSON.
    pub fn from_json(json: &str) -> GameResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the config is playable.
    pub fn validate(&self) -> GameResult<()> {
        if self.hand_size == 0 {
            return Err(GameError::InvalidConfig("hand_size must be at least 1".into()));
        }
        if self.score_limit <= 0 {
            return Err(GameError::InvalidConfig("score_limit must be positive".into()));
        }
        if self.deck.entries.is_empty() {
            return Err(GameError::InvalidConfig("deck table has no entries".into()));
        }
        Ok(())
    }

    #[must_use]
    pub fn with_score_limit(mut self, limit: i64) -> Self {
        self.score_limit = limit;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    #[must_use]
    pub fn with_deck(mut self, deck: DeckConfig) -> Self {
        self.deck = deck;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();

        assert_eq!(config.score_limit, 75);
        assert_eq!(config.hand_size, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deck_scales_with_player_count() {
        let deck = DeckConfig::default();

        let two = deck.card_count(2);
        let four = deck.card_count(4);
        let per_player: usize = deck.entries.iter().map(|e| e.per_player as usize).sum();

        assert_eq!(four - two, per_player * 2);
        assert!(two >= 5 * 2);
    }

    #[test]
    fn test_json_round_trip() {
        let config = GameConfig::default().with_score_limit(50);
        let json = serde_json::to_string(&config).unwrap();
        let parsed = GameConfig::from_json(&json).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_json_defaults_missing_fields() {
        let json = r#"{
            "score_limit": 30,
            "hand_size": 4,
            "deck": { "entries": [ { "kind": "Virus", "value": 1, "base": 10 } ] }
        }"#;
        let config = GameConfig::from_json(json).unwrap();

        assert_eq!(config.deck.entries[0].per_player, 0);
        assert!(!config.deck.entries[0].mimic);
        assert_eq!(config.deck.card_count(3), 10);
    }

    #[test]
    fn test_rejects_zero_hand_size() {
        let config = GameConfig::default().with_hand_size(0);
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let result = GameConfig::from_json("{ not json");
        assert!(matches!(result, Err(GameError::InvalidConfig(_))));
    }
}
