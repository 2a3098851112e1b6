//! # infection-engine
//!
//! Rules engine and AI decision layer for a turn-based card game in which
//! players infect each other with VIRUS, SPYWARE and RANSOM cards, defend
//! with safety cards and build stacks of repeated effects.
//!
//! ## Design Principles
//!
//! 1. **One owner**: `GameState` owns every card. Cards move between hands,
//!    the deck and stacks by value, so a card is never in two places.
//!
//! 2. **Stable identity**: cards and stacks carry ids assigned at creation;
//!    lookups and removals go by id, never by value.
//!
//! 3. **Read-only decisions**: the AI decides from a borrowed `TurnView` and
//!    returns a `Move`. Only the caller mutates the state.
//!
//! 4. **All or nothing**: a mutation that fails leaves the state as it was.
//!
//! ## Modules
//!
//! - `core`: ids, players, configuration, moves, errors, RNG, game state
//! - `cards`: card kinds, cards and Trojans
//! - `zones`: the deck and player hands
//! - `stack`: board stacks and the grouping rule
//! - `ai`: the decision chain and its handlers

pub mod core;
pub mod cards;
pub mod zones;
pub mod stack;
pub mod ai;

// Re-export commonly used types
pub use crate::core::{
    CardId, StackId, PlayerId, PlayerMap, Player, PlayerSpec,
    GameRng, GameRngState,
    DeckConfig, DeckEntry, GameConfig,
    Move, PlayType,
    CardResult, GameError, GameResult, Refused,
    GameState,
};

pub use crate::cards::{Card, CardKind};

pub use crate::zones::{Deck, Hand};

pub use crate::stack::{combine, Combined, Stack};

pub use crate::ai::{
    ActionHandler, DecisionChain, TurnHandler, TurnView,
    BatteryBackup, InstallGenerator, PowerOutageAttack, Redraw,
};
