//! Stacks on the board and the grouping rule.
//!
//! A stack is an ordered pile of cards played against one player. Its top
//! card classifies it; a stack topped by a single `REPEAT(1)` is an
//! "unpaired Rx".
//!
//! ## Example Usage
//!
//! ```
//! use infection_engine::cards::{Card, CardKind};
//! use infection_engine::core::{CardId, PlayerId, StackId};
//! use infection_engine::stack::Stack;
//!
//! let mut stack = Stack::new(StackId(0), PlayerId(1), Card::new(CardId(0), CardKind::Virus, 2));
//! stack.push(Card::new(CardId(1), CardKind::Repeat, 1));
//!
//! assert!(stack.is_unpaired_rx());
//! assert_eq!(stack.len(), 2);
//! ```

mod combine;
mod pile;

pub use combine::{combine, Combined};
pub use pile::Stack;
