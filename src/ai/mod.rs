//! AI turn decisions.
//!
//! An AI turn is decided by a [`DecisionChain`]: a priority-ordered list of
//! [`TurnHandler`] rules, each looking at a read-only [`TurnView`]. The first
//! rule to accept commits the turn's [`Move`](crate::core::Move); if none
//! does, the chain's [`ActionHandler`] fallback ([`Redraw`] by default)
//! decides instead.
//!
//! Deciding never mutates anything. The caller validates the move and applies
//! it, for example with [`GameState::apply_move`](crate::core::GameState::apply_move).

mod chain;
mod handlers;
mod view;

pub use chain::{ActionHandler, DecisionChain, TurnHandler};
pub use handlers::{BatteryBackup, InstallGenerator, PowerOutageAttack, Redraw};
pub use view::TurnView;
