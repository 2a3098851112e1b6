//! Built-in turn handlers.
//!
//! Each rule looks at the acting player's status and hand and either claims
//! the turn with a move or declines. `Redraw` is the terminal handler used
//! when no rule applies.

use super::chain::{ActionHandler, TurnHandler};
use super::view::TurnView;
use crate::cards::CardKind;
use crate::core::{Move, PlayType};

/// Restore power with a battery backup.
///
/// Applies only while the player has a power outage, has no generator, and
/// holds a battery backup.
#[derive(Clone, Copy, Debug, Default)]
pub struct BatteryBackup;

impl TurnHandler for BatteryBackup {
    fn name(&self) -> &'static str {
        "battery_backup"
    }

    fn evaluate(&self, view: &TurnView<'_>) -> Option<Move> {
        let me = view.me();
        if !me.has_power_outage() || me.has_generator() {
            return None;
        }
        let card = view.holding(CardKind::BatteryBackup)?;
        Some(Move::new(PlayType::Enhance, card.id, me.id, me.id))
    }
}

/// Install a generator when the player has none.
#[derive(Clone, Copy, Debug, Default)]
pub struct InstallGenerator;

impl TurnHandler for InstallGenerator {
    fn name(&self) -> &'static str {
        "install_generator"
    }

    fn evaluate(&self, view: &TurnView<'_>) -> Option<Move> {
        let me = view.me();
        if me.has_generator() {
            return None;
        }
        let card = view.holding(CardKind::Generator)?;
        Some(Move::new(PlayType::Safety, card.id, me.id, me.id))
    }
}

/// Cut the power of the leading opponent.
///
/// Targets the highest-scoring opponent that has neither an outage nor a
/// generator. Ties go to the lowest seat.
#[derive(Clone, Copy, Debug, Default)]
pub struct PowerOutageAttack;

impl TurnHandler for PowerOutageAttack {
    fn name(&self) -> &'static str {
        "power_outage_attack"
    }

    fn evaluate(&self, view: &TurnView<'_>) -> Option<Move> {
        let card = view.holding(CardKind::PowerOutage)?;
        let target = view
            .opponents()
            .filter(|p| !p.has_power_outage() && !p.has_generator())
            .max_by(|a, b| {
                view.score(a.id)
                    .cmp(&view.score(b.id))
                    .then_with(|| b.id.cmp(&a.id))
            })?;
        Some(Move::new(PlayType::Attack, card.id, view.player_id(), target.id))
    }
}

/// Throw the hand away and draw a new one. Always applies.
#[derive(Clone, Copy, Debug, Default)]
pub struct Redraw;

impl ActionHandler for Redraw {
    fn handle(&self, view: &TurnView<'_>) -> Move {
        Move::redraw(view.player_id())
    }
}
