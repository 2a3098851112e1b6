//! Card system: kinds, card values and Trojans.
//!
//! ## Key Types
//!
//! - `CardKind`: what a card does, with rule classifications
//!   (`is_safety`, `is_attack`, ...)
//! - `Card`: a single card with a stable `CardId`, optionally a Trojan
//!   wrapping the card it imitates

pub mod card;
pub mod kind;

pub use card::{replacement_kind, Card};
pub use kind::CardKind;
