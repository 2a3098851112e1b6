//! Merging grouped stacks into one.
//!
//! When a GROUP card is played, the grouped stacks collapse into a single new
//! stack headed by the group card:
//!
//! 1. The new stack belongs to the owner of the first grouped stack.
//! 2. Stacks not topped by an unpaired Rx contribute first, in input order.
//! 3. Stacks topped by an unpaired Rx contribute after them, in input order.
//!
//! Each stack contributes everything above its bottom card. The bottom cards
//! are handed back to the caller as `stripped`.
//!
//! ```
//! use infection_engine::cards::{Card, CardKind};
//! use infection_engine::core::{CardId, PlayerId, StackId};
//! use infection_engine::stack::{combine, Stack};
//!
//! let mut infected = Stack::new(StackId(0), PlayerId(1), Card::new(CardId(0), CardKind::Virus, 3));
//! infected.push(Card::new(CardId(1), CardKind::Repeat, 2));
//! let rx = Stack::new(StackId(1), PlayerId(1), Card::new(CardId(2), CardKind::Repeat, 1));
//!
//! let group = Card::new(CardId(3), CardKind::Group, 0);
//! let combined = combine(StackId(2), vec![rx, infected], group).unwrap();
//!
//! let ids: Vec<_> = combined.stack.cards().map(|c| c.id).collect();
//! assert_eq!(ids, vec![CardId(3), CardId(1)]);
//! assert_eq!(combined.stripped.len(), 2);
//! ```

use log::debug;

use super::pile::Stack;
use crate::cards::Card;
use crate::core::entity::StackId;
use crate::core::error::{CardResult, GameError, Refused};

/// Result of merging grouped stacks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Combined {
    /// The merged stack, group card at the bottom.
    pub stack: Stack,

    /// Bottom cards removed from each input stack, in input order.
    pub stripped: Vec<Card>,
}

/// Merge `grouped` into one new stack with id `id`.
///
/// Fails with `InvalidGrouping` when no stacks are given, handing the group
/// card back.
pub fn combine(id: StackId, grouped: Vec<Stack>, group_card: Card) -> CardResult<Combined> {
    let Some(owner) = grouped.first().map(|s| s.owner) else {
        let error = GameError::InvalidGrouping("no stacks to combine".into());
        return Err(Refused::new(error, group_card));
    };

    debug!(
        "combining {} stacks into {} for {} with {}",
        grouped.len(),
        id,
        owner,
        group_card
    );

    let (unpaired_rx, poolable): (Vec<Stack>, Vec<Stack>) =
        grouped.into_iter().partition(Stack::is_unpaired_rx);

    let mut stack = Stack::new(id, owner, group_card);
    let mut stripped = Vec::with_capacity(poolable.len() + unpaired_rx.len());

    for source in poolable.into_iter().chain(unpaired_rx) {
        let (bottom, rest) = source.split_bottom();
        stripped.push(bottom);
        for card in rest {
            stack.push(card);
        }
    }

    Ok(Combined { stack, stripped })
}
