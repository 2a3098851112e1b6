//! The decision chain: ordered rule handlers with a guaranteed fallback.
//!
//! Handlers are evaluated in priority order and the first one to accept
//! decides the turn. When none accepts, the fallback action handler decides.
//!
//! ```
//! use infection_engine::ai::{DecisionChain, TurnView};
//! use infection_engine::core::{GameConfig, GameState, PlayType, PlayerId, PlayerSpec};
//!
//! let roster = [PlayerSpec::ai("a"), PlayerSpec::ai("b")];
//! let state = GameState::new(GameConfig::default(), &roster, 42).unwrap();
//!
//! // Empty hand: no rule applies, so the fallback redraws.
//! let chain = DecisionChain::default();
//! let view = TurnView::new(&state, PlayerId::new(0)).unwrap();
//! assert_eq!(chain.decide(&view).play_type, PlayType::Redraw);
//! ```

use log::{debug, info, warn};

use super::handlers::{BatteryBackup, InstallGenerator, PowerOutageAttack, Redraw};
use super::view::TurnView;
use crate::core::{GameResult, GameState, Move, PlayType, PlayerId};

/// A rule that may claim the turn.
///
/// `evaluate` returns `Some(move)` to accept or `None` to decline. It only
/// reads the view, so declining has no side effects and re-running it on an
/// unchanged table gives the same answer.
pub trait TurnHandler: Send + Sync {
    /// Short name for logging.
    fn name(&self) -> &'static str;

    fn evaluate(&self, view: &TurnView<'_>) -> Option<Move>;
}

/// A terminal handler that always produces a move.
pub trait ActionHandler: Send + Sync {
    fn handle(&self, view: &TurnView<'_>) -> Move;
}

/// Ordered rule handlers plus a fallback.
pub struct DecisionChain {
    handlers: Vec<Box<dyn TurnHandler>>,
    fallback: Box<dyn ActionHandler>,
}

impl Default for DecisionChain {
    /// The standard AI: battery backup, generator, power outage attack,
    /// falling back to a redraw.
    fn default() -> Self {
        Self::new(Box::new(Redraw))
            .with_handler(BatteryBackup)
            .with_handler(InstallGenerator)
            .with_handler(PowerOutageAttack)
    }
}

impl DecisionChain {
    /// An empty chain: every turn goes to `fallback`.
    pub fn new(fallback: Box<dyn ActionHandler>) -> Self {
        Self {
            handlers: Vec::new(),
            fallback,
        }
    }

    /// Append a handler at the lowest priority.
    #[must_use]
    pub fn with_handler(mut self, handler: impl TurnHandler + 'static) -> Self {
        self.push(Box::new(handler));
        self
    }

    /// Append a handler at the lowest priority.
    pub fn push(&mut self, handler: Box<dyn TurnHandler>) {
        self.handlers.push(handler);
    }

    /// Insert a handler at `index` (0 = highest priority).
    ///
    /// Indices past the end append.
    pub fn insert(&mut self, index: usize, handler: Box<dyn TurnHandler>) {
        let index = index.min(self.handlers.len());
        self.handlers.insert(index, handler);
    }

    /// Handler names, highest priority first.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.iter().map(|h| h.name())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Decide the turn: the first accepting handler wins, else the fallback.
    #[must_use]
    pub fn decide(&self, view: &TurnView<'_>) -> Move {
        self.decide_excluding(view, &[])
    }

    /// Decide the turn, skipping any proposal the caller already rejected.
    ///
    /// A handler whose move appears in `rejected` is treated as declining.
    /// The fallback is never skipped.
    #[must_use]
    pub fn decide_excluding(&self, view: &TurnView<'_>, rejected: &[Move]) -> Move {
        let player = view.player_id();

        for handler in &self.handlers {
            match handler.evaluate(view) {
                Some(mv) if rejected.contains(&mv) => {
                    debug!("{}: {} proposal {} was rejected", player, handler.name(), mv);
                }
                Some(mv) => {
                    info!("{}: {} chose {}", player, handler.name(), mv);
                    return mv;
                }
                None => debug!("{}: {} declined", player, handler.name()),
            }
        }

        let mv = self.fallback.handle(view);
        info!("{}: no rule applied, falling back to {}", player, mv);
        mv
    }

    /// Build the view for `player` and decide their turn.
    pub fn decide_for(&self, state: &GameState, player: PlayerId) -> GameResult<Move> {
        let view = TurnView::new(state, player)?;
        Ok(self.decide(&view))
    }

    /// Decide the active player's turn and apply it to `state`.
    ///
    /// The game state never retries on its own; this loop lives with the
    /// caller. A move the state refuses is logged, excluded, and the chain is
    /// asked again. Returns the applied move, or the error from the fallback
    /// if even that cannot be applied.
    pub fn play_turn(&self, state: &mut GameState) -> GameResult<Move> {
        let player = state.active_player;
        let mut rejected: Vec<Move> = Vec::new();
        loop {
            let mv = self.decide_excluding(&TurnView::new(state, player)?, &rejected);
            match state.apply_move(&mv) {
                Ok(()) => return Ok(mv),
                Err(e) if mv.play_type != PlayType::Redraw && !rejected.contains(&mv) => {
                    warn!("{}: {} rejected: {}", player, mv, e);
                    rejected.push(mv);
                }
                Err(e) => return Err(e),
            }
        }
    }
}

impl std::fmt::Debug for DecisionChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecisionChain")
            .field("handlers", &self.names().collect::<Vec<_>>())
            .finish()
    }
}
