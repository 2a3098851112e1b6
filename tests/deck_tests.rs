//! Deck and Trojan property tests.
//!
//! These tests check the reshuffle rule and Trojan replacement over many
//! generated inputs.

use infection_engine::cards::{replacement_kind, Card, CardKind};
use infection_engine::core::{CardId, GameError, GameRng};
use infection_engine::zones::Deck;
use proptest::prelude::*;

const ALL_KINDS: [CardKind; 13] = [
    CardKind::Virus,
    CardKind::Spyware,
    CardKind::Ransom,
    CardKind::Repeat,
    CardKind::Variable,
    CardKind::Group,
    CardKind::Instruction,
    CardKind::PowerOutage,
    CardKind::Hack,
    CardKind::Firewall,
    CardKind::Antivirus,
    CardKind::Generator,
    CardKind::BatteryBackup,
];

fn any_kind() -> impl Strategy<Value = CardKind> {
    (0..ALL_KINDS.len()).prop_map(|i| ALL_KINDS[i])
}

fn pile(range: std::ops::Range<u32>) -> Vec<Card> {
    range.map(|i| Card::new(CardId(i), CardKind::Virus, (i % 3) as i32)).collect()
}

// =============================================================================
// Deck
// =============================================================================

proptest! {
    /// Drawing from an empty draw pile reshuffles the whole discard pile.
    #[test]
    fn prop_draw_reshuffles_discard(discarded in 1u32..40, seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let mut deck = Deck::from_piles(Vec::new(), pile(0..discarded));

        let drawn = deck.draw(&mut rng).unwrap();

        prop_assert_eq!(deck.discard_len(), 0);
        prop_assert_eq!(deck.draw_len(), discarded as usize - 1);

        let mut ids: Vec<_> = deck.draw_pile().iter().map(|c| c.id.raw()).collect();
        ids.push(drawn.id.raw());
        ids.sort_unstable();
        prop_assert_eq!(ids, (0..discarded).collect::<Vec<_>>());
    }

    /// Drawing never creates or loses cards.
    #[test]
    fn prop_draws_conserve_cards(
        in_draw in 0u32..20,
        in_discard in 0u32..20,
        draws in 0usize..50,
        seed in any::<u64>(),
    ) {
        let mut rng = GameRng::new(seed);
        let mut deck = Deck::from_piles(pile(0..in_draw), pile(in_draw..in_draw + in_discard));
        let total = (in_draw + in_discard) as usize;
        let mut hand = Vec::new();

        for _ in 0..draws {
            match deck.draw(&mut rng) {
                Ok(card) => hand.push(card),
                Err(e) => {
                    prop_assert_eq!(e, GameError::EmptyDeck);
                    prop_assert_eq!(deck.total_len(), 0);
                }
            }
        }

        prop_assert_eq!(hand.len() + deck.total_len(), total);
        prop_assert_eq!(hand.len(), draws.min(total));
    }
}

/// Both piles empty: the draw fails and nothing changes.
#[test]
fn test_draw_from_empty_deck() {
    let mut rng = GameRng::new(1);
    let mut deck = Deck::default();

    assert_eq!(deck.draw(&mut rng), Err(GameError::EmptyDeck));
    assert_eq!(deck.draw_len(), 0);
    assert_eq!(deck.discard_len(), 0);
}

/// Same seed, same reshuffle.
#[test]
fn test_reshuffle_is_seeded() {
    let order = |seed| {
        let mut rng = GameRng::new(seed);
        let mut deck = Deck::from_piles(Vec::new(), pile(0..30));
        (0..30)
            .map(|_| deck.draw(&mut rng).unwrap().id)
            .collect::<Vec<_>>()
    };

    assert_eq!(order(9), order(9));
    assert_ne!(order(9), order(10));
}

// =============================================================================
// Trojans
// =============================================================================

proptest! {
    /// Every Trojan resolves to a new extra card of an infection kind,
    /// chosen only by the disguise.
    #[test]
    fn prop_trojan_replacement(kind in any_kind(), value in -5i32..10) {
        let trojan = Card::trojan(CardId(1), Card::new(CardId(0), kind, value));

        let first = trojan.replace(CardId(2)).unwrap();
        let second = trojan.replace(CardId(3)).unwrap();

        prop_assert!(first.is_extra);
        prop_assert!(matches!(
            first.kind,
            CardKind::Ransom | CardKind::Spyware | CardKind::Virus
        ));
        prop_assert_eq!(first.kind, replacement_kind(kind));
        prop_assert_eq!(first.kind, second.kind);
        prop_assert_eq!(first.value, 0);
        prop_assert_ne!(first.id, second.id);
        prop_assert_eq!(trojan.mimicked().map(|c| (c.kind, c.value)), Some((kind, value)));
    }

    /// Ordinary cards never resolve.
    #[test]
    fn prop_plain_cards_do_not_replace(kind in any_kind()) {
        let card = Card::new(CardId(0), kind, 1);
        prop_assert!(!card.is_mimic());
        prop_assert!(card.replace(CardId(1)).is_none());
    }
}
