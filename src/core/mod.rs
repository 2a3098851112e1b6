//! Core engine types: identifiers, players, state, moves, RNG, configuration
//! and errors.
//!
//! `GameState` is the single owner of the table. Everything else in the
//! crate either describes part of it or reads it.

pub mod action;
pub mod config;
pub mod entity;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Move, PlayType};
pub use config::{DeckConfig, DeckEntry, GameConfig};
pub use entity::{CardId, IdAllocator, StackId};
pub use error::{CardResult, GameError, GameResult, Refused};
pub use player::{EffectList, Player, PlayerId, PlayerMap, PlayerSpec};
pub use rng::{GameRng, GameRngState};
pub use state::GameState;
