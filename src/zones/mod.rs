//! Card containers outside the board: the shared deck and player hands.
//!
//! ## Key Types
//!
//! - `Deck`: draw and discard piles with reshuffle-on-empty
//! - `Hand`: a player's cards, keyed by `CardId`

pub mod deck;
pub mod hand;

pub use deck::Deck;
pub use hand::Hand;
