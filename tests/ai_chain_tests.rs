//! AI decision chain tests against real game states.
//!
//! Each test deals from a single-kind deck so the hand contents are known,
//! then lets the chain decide and applies the move through the game state.

use infection_engine::ai::{DecisionChain, Redraw, TurnHandler, TurnView};
use infection_engine::cards::CardKind;
use infection_engine::core::{
    CardId, DeckConfig, DeckEntry, GameConfig, GameError, GameState, Move, PlayType, PlayerId,
    PlayerSpec,
};

fn roster(n: usize) -> Vec<PlayerSpec> {
    (0..n).map(|i| PlayerSpec::ai(format!("bot {}", i))).collect()
}

/// A game whose deck holds `copies` cards of one kind, with every hand dealt.
fn dealt_game(players: usize, kind: CardKind, copies: u32, seed: u64) -> GameState {
    let config = GameConfig::default().with_deck(DeckConfig {
        entries: vec![DeckEntry::new(kind, 0, copies, 0)],
    });
    let mut state = GameState::new(config, &roster(players), seed).unwrap();
    for player in PlayerId::all(players) {
        state.give_new_hand(player).unwrap();
    }
    state
}

/// Proposes a fixed move, legal or not.
struct Propose(Move);

impl TurnHandler for Propose {
    fn name(&self) -> &'static str {
        "propose"
    }

    fn evaluate(&self, _view: &TurnView<'_>) -> Option<Move> {
        Some(self.0.clone())
    }
}

// =============================================================================
// Standard chain
// =============================================================================

/// Test that a player with no usable card falls back to a redraw.
#[test]
fn test_fallback_is_redraw() {
    let state = dealt_game(2, CardKind::Virus, 20, 1);
    let chain = DecisionChain::default();

    for player in PlayerId::all(2) {
        let mv = chain.decide_for(&state, player).unwrap();
        assert_eq!(mv, Move::redraw(player));
    }
}

/// Test that deciding is deterministic and leaves the state untouched.
#[test]
fn test_decide_is_pure() {
    let state = dealt_game(3, CardKind::PowerOutage, 30, 7);
    let before = state.clone();
    let chain = DecisionChain::default();

    let first = chain.decide_for(&state, PlayerId::new(0)).unwrap();
    let second = chain.decide_for(&state, PlayerId::new(0)).unwrap();

    assert_eq!(first, second);
    assert_eq!(state.players(), before.players());
    assert_eq!(state.hand(PlayerId::new(0)).unwrap(), before.hand(PlayerId::new(0)).unwrap());
    assert_eq!(state.deck(), before.deck());
}

/// Test that a generator gets installed, after which the chain redraws.
#[test]
fn test_install_generator_turn() {
    let mut state = dealt_game(2, CardKind::Generator, 20, 3);
    let chain = DecisionChain::default();
    let me = PlayerId::new(0);

    let mv = chain.decide_for(&state, me).unwrap();
    assert_eq!(mv.play_type, PlayType::Safety);
    assert_eq!(mv.target, me);

    state.apply_move(&mv).unwrap();
    assert!(state.player(me).unwrap().has_generator());
    assert_eq!(state.hand(me).unwrap().len(), 4);

    let mv = chain.decide_for(&state, me).unwrap();
    assert_eq!(mv, Move::redraw(me));

    state.apply_move(&mv).unwrap();
    assert_eq!(state.hand(me).unwrap().len(), 5);
}

/// Test that a battery backup clears a power outage.
#[test]
fn test_battery_backup_turn() {
    let mut state = dealt_game(2, CardKind::BatteryBackup, 20, 5);
    let chain = DecisionChain::default();
    let me = PlayerId::new(1);
    state.add_card_effect(me, CardKind::PowerOutage, false).unwrap();

    let mv = chain.decide_for(&state, me).unwrap();
    assert_eq!(mv.play_type, PlayType::Enhance);

    state.apply_move(&mv).unwrap();
    assert!(!state.player(me).unwrap().has_power_outage());
    assert_eq!(chain.decide_for(&state, me).unwrap(), Move::redraw(me));
}

/// Test that outages go to the leader first, then to whoever is left.
#[test]
fn test_power_outage_turns() {
    let mut state = dealt_game(3, CardKind::PowerOutage, 30, 11);
    let chain = DecisionChain::default();
    let me = PlayerId::new(0);
    state.add_score(PlayerId::new(2), 20).unwrap();

    let mv = chain.decide_for(&state, me).unwrap();
    assert_eq!(mv.play_type, PlayType::Attack);
    assert_eq!(mv.target, PlayerId::new(2));
    state.apply_move(&mv).unwrap();
    assert!(state.player(PlayerId::new(2)).unwrap().has_power_outage());

    let mv = chain.decide_for(&state, me).unwrap();
    assert_eq!(mv.target, PlayerId::new(1));
    state.apply_move(&mv).unwrap();

    assert_eq!(chain.decide_for(&state, me).unwrap(), Move::redraw(me));
    assert!(!state.player(me).unwrap().has_power_outage());
}

// =============================================================================
// Custom chains
// =============================================================================

/// Test that a move refused by the game can be retried without the
/// offending proposal.
#[test]
fn test_retry_after_rejected_move() {
    let mut state = dealt_game(2, CardKind::Firewall, 20, 9);
    let me = PlayerId::new(0);
    let firewall = state.hand(me).unwrap().iter().next().unwrap().id;

    let attack_self = Move::new(PlayType::Attack, firewall, me, me);
    let made_up = Move::new(PlayType::Safety, CardId(9_999), me, me);
    let chain = DecisionChain::new(Box::new(Redraw))
        .with_handler(Propose(attack_self.clone()))
        .with_handler(Propose(made_up.clone()));

    let mut rejected = Vec::new();
    let applied = loop {
        let view = TurnView::new(&state, me).unwrap();
        let mv = chain.decide_excluding(&view, &rejected);
        match state.apply_move(&mv) {
            Ok(()) => break mv,
            Err(_) => rejected.push(mv),
        }
    };

    assert_eq!(rejected, vec![attack_self, made_up]);
    assert_eq!(applied, Move::redraw(me));
}

/// Test that an illegal move leaves the game untouched.
#[test]
fn test_rejected_move_changes_nothing() {
    let mut state = dealt_game(2, CardKind::Firewall, 20, 13);
    let me = PlayerId::new(0);
    let firewall = state.hand(me).unwrap().iter().next().unwrap().id;
    let before = state.clone();

    let err = state
        .apply_move(&Move::new(PlayType::Attack, firewall, me, PlayerId::new(1)))
        .unwrap_err();

    assert!(matches!(err, GameError::IllegalMove(_)));
    assert_eq!(state.hand(me).unwrap(), before.hand(me).unwrap());
    assert_eq!(state.players(), before.players());
    assert_eq!(state.deck(), before.deck());
}

// =============================================================================
// Whole turns
// =============================================================================

/// Test that a full AI turn skips a refused proposal and applies the next.
#[test]
fn test_play_turn_recovers_from_refusal() {
    let mut state = dealt_game(2, CardKind::Generator, 20, 17);
    let me = state.active_player;
    let generator = state.hand(me).unwrap().iter().next().unwrap().id;

    let mut chain = DecisionChain::default();
    chain.insert(0, Box::new(Propose(Move::new(PlayType::Attack, generator, me, me))));

    let applied = chain.play_turn(&mut state).unwrap();

    assert_eq!(applied.play_type, PlayType::Safety);
    assert!(state.player(me).unwrap().has_generator());
}

/// Test that every seat can take AI turns for several rounds.
#[test]
fn test_ai_rounds() {
    let mut state = GameState::new(GameConfig::default(), &roster(4), 23).unwrap();
    for player in PlayerId::all(4) {
        state.give_new_hand(player).unwrap();
    }
    let chain = DecisionChain::default();

    for _ in 0..40 {
        let player = state.active_player;
        let mv = chain.play_turn(&mut state).unwrap();
        assert_eq!(mv.player, player);
        state.next_player();
    }
    assert_eq!(state.active_player, PlayerId::new(0));
}

/// Test that a failed fallback is reported.
#[test]
fn test_play_turn_empty_deck() {
    let config = GameConfig::default().with_deck(DeckConfig {
        entries: vec![DeckEntry::new(CardKind::Virus, 1, 3, 0)],
    });
    let mut state = GameState::new(config, &roster(2), 0).unwrap();

    let err = DecisionChain::default().play_turn(&mut state).unwrap_err();
    assert_eq!(err, GameError::EmptyDeck);
}
