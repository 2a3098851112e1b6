//! Game state and the mutation interface.
//!
//! `GameState` owns everything on the table:
//! - Players and their status effects
//! - Hands
//! - Stacks on the board
//! - The shared deck
//! - Scores and the score limit
//! - The active player pointer
//! - RNG and id allocation
//!
//! Every mutation either succeeds completely or returns an error and leaves
//! the state untouched. Compound operations check their preconditions before
//! touching anything.

use im::Vector;
use log::{debug, info};
use rustc_hash::FxHashSet;

use super::action::{Move, PlayType};
use super::config::GameConfig;
use super::entity::{CardId, IdAllocator, StackId};
use super::error::{CardResult, GameError, GameResult, Refused};
use super::player::{Player, PlayerId, PlayerMap, PlayerSpec};
use super::rng::GameRng;
use crate::cards::{Card, CardKind};
use crate::stack::{combine, Stack};
use crate::zones::{Deck, Hand};

/// Full game state.
///
/// Cheap to clone: hands, the board and the deck piles use `im` persistent
/// vectors.
#[derive(Clone, Debug)]
pub struct GameState {
    config: GameConfig,

    players: PlayerMap<Player>,

    hands: PlayerMap<Hand>,

    /// Stacks in the order they were created.
    stacks: Vector<Stack>,

    deck: Deck,

    scores: PlayerMap<i64>,

    /// Whose turn it is.
    pub active_player: PlayerId,

    ids: IdAllocator,

    rng: GameRng,
}

impl GameState {
    /// Create a game for the given roster.
    ///
    /// The deck is built and shuffled for the roster size; hands start empty
    /// and player 0 starts.
    pub fn new(config: GameConfig, roster: &[PlayerSpec], seed: u64) -> GameResult<Self> {
        config.validate()?;
        Self::fresh(config, roster, GameRng::new(seed))
    }

    fn fresh(config: GameConfig, roster: &[PlayerSpec], mut rng: GameRng) -> GameResult<Self> {
        if roster.is_empty() || roster.len() > 255 {
            return Err(GameError::InvalidConfig(format!(
                "roster must have 1-255 players, got {}",
                roster.len()
            )));
        }

        let player_count = roster.len();
        let mut ids = IdAllocator::new();
        let deck = Deck::build(&config.deck, player_count, &mut ids, &mut rng);

        info!(
            "new game: {} players, {} cards, score limit {}",
            player_count,
            deck.total_len(),
            config.score_limit
        );

        Ok(Self {
            players: PlayerMap::new(player_count, |id| Player::new(id, &roster[id.index()])),
            hands: PlayerMap::new(player_count, Hand::new),
            stacks: Vector::new(),
            deck,
            scores: PlayerMap::with_value(player_count, 0),
            active_player: PlayerId::new(0),
            ids,
            rng,
            config,
        })
    }

    /// Throw the current game away and start over with `roster`.
    ///
    /// Keeps the config and continues the RNG sequence.
    pub fn reset_game(&mut self, roster: &[PlayerSpec]) -> GameResult<()> {
        *self = Self::fresh(self.config.clone(), roster, self.rng.clone())?;
        Ok(())
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> GameResult<&Player> {
        self.players.get(id).ok_or(GameError::UnknownPlayer(id))
    }

    pub fn hand(&self, id: PlayerId) -> GameResult<&Hand> {
        self.hands.get(id).ok_or(GameError::UnknownPlayer(id))
    }

    #[must_use]
    pub fn stacks(&self) -> &Vector<Stack> {
        &self.stacks
    }

    #[must_use]
    pub fn stack(&self, id: StackId) -> Option<&Stack> {
        self.stacks.iter().find(|s| s.id == id)
    }

    /// Stacks played against `player`, oldest first.
    pub fn stacks_against(&self, player: PlayerId) -> impl Iterator<Item = &Stack> {
        self.stacks.iter().filter(move |s| s.owner == player)
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn scores(&self) -> &PlayerMap<i64> {
        &self.scores
    }

    #[must_use]
    pub fn score_limit(&self) -> i64 {
        self.config.score_limit
    }

    /// The lowest-seated player at or above the score limit, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.scores
            .iter()
            .find(|(_, score)| **score >= self.config.score_limit)
            .map(|(id, _)| id)
    }

    /// Cards held in hands, the deck and on the board.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        let in_hands: usize = self.hands.values().map(Hand::len).sum();
        let on_board: usize = self.stacks.iter().map(Stack::len).sum();
        in_hands + on_board + self.deck.total_len()
    }

    // === Hands ===

    /// Discard `player`'s hand and deal a fresh one.
    ///
    /// The old hand is discarded before drawing, so its cards can be
    /// reshuffled into the new one. Fails with `EmptyDeck`, changing nothing,
    /// if a full hand cannot be dealt.
    pub fn give_new_hand(&mut self, player: PlayerId) -> GameResult<()> {
        let hand_size = self.config.hand_size;
        let held = self.hand(player)?.len();
        if self.deck.total_len() + held < hand_size {
            return Err(GameError::EmptyDeck);
        }

        for card in self.hands[player].take_all() {
            self.deck.discard(card);
        }
        let cards = self.deck.draw_many(hand_size, &mut self.rng)?;
        self.hands[player] = Hand::with_cards(player, cards);

        debug!("{} redrew {} cards", player, hand_size);
        Ok(())
    }

    /// Draw one card into `player`'s hand.
    pub fn draw_card(&mut self, player: PlayerId) -> GameResult<CardId> {
        self.hand(player)?;
        let card = self.deck.draw(&mut self.rng)?;
        let id = card.id;
        self.hands[player].add(card);
        debug!("{} drew {}", player, id);
        Ok(id)
    }

    /// Take a card out of `player`'s hand without discarding it.
    pub fn remove_from_hand(&mut self, player: PlayerId, card: CardId) -> GameResult<Card> {
        self.hands
            .get_mut(player)
            .ok_or(GameError::UnknownPlayer(player))?
            .remove(card)
            .ok_or(GameError::CardNotInHand { player, card })
    }

    /// Move a card from `player`'s hand to the discard pile.
    pub fn discard_from_hand(&mut self, player: PlayerId, card: CardId) -> GameResult<()> {
        let card = self.remove_from_hand(player, card)?;
        debug!("{} discarded {}", player, card);
        self.deck.discard(card);
        Ok(())
    }

    // === Stacks ===

    // Operations below that take a `Card` by value return it inside
    // `Refused` when they fail.

    /// Open a new stack against `owner`.
    pub fn new_stack(&mut self, owner: PlayerId, card: Card) -> CardResult<StackId> {
        if !self.players.contains(owner) {
            return Err(Refused::new(GameError::UnknownPlayer(owner), card));
        }
        let id = self.ids.next_stack();
        debug!("new {} against {} with {}", id, owner, card);
        self.stacks.push_back(Stack::new(id, owner, card));
        Ok(id)
    }

    /// Put `card` on top of a stack.
    ///
    /// With `replace`, the current top card is discarded first. Replacing
    /// the only card of a stack leaves `card` as its sole card.
    pub fn add_to_stack(&mut self, stack: StackId, card: Card, replace: bool) -> CardResult<()> {
        let pos = match self.stack_position(stack) {
            Ok(pos) => pos,
            Err(e) => return Err(Refused::new(e, card)),
        };
        debug!("{} onto {} (replace: {})", card, stack, replace);
        if replace {
            let old = self.stacks[pos].replace_top(card);
            self.deck.discard(old);
        } else {
            self.stacks[pos].push(card);
        }
        Ok(())
    }

    /// Discard every card of a stack and remove it from the board.
    pub fn discard_stack(&mut self, stack: StackId) -> GameResult<()> {
        let pos = self.stack_position(stack)?;
        let removed = self.stacks.remove(pos);
        debug!("discarding {} ({} cards)", stack, removed.len());
        for card in removed.into_cards() {
            self.deck.discard(card);
        }
        Ok(())
    }

    /// Check that `stacks` names at least one stack, each exactly once, and
    /// that every stack is on the board.
    pub fn check_grouping(&self, stacks: &[StackId]) -> GameResult<()> {
        if stacks.is_empty() {
            return Err(GameError::InvalidGrouping("no stacks to combine".into()));
        }
        let mut seen = FxHashSet::default();
        for &id in stacks {
            if !seen.insert(id) {
                return Err(GameError::InvalidGrouping(format!("{} grouped twice", id)));
            }
            self.stack_position(id)?;
        }
        Ok(())
    }

    /// Merge grouped stacks into one new stack headed by `group_card`.
    ///
    /// The grouped stacks leave the board and the new stack is appended in
    /// their place. The bottom card of each grouped stack is discarded.
    /// On failure the board is unchanged and `group_card` comes back in
    /// `Refused`.
    pub fn combine_stacks(&mut self, stacks: &[StackId], group_card: Card) -> CardResult<StackId> {
        if let Err(e) = self.check_grouping(stacks) {
            return Err(Refused::new(e, group_card));
        }

        let board = self.stacks.clone();
        let mut grouped = Vec::with_capacity(stacks.len());
        for &id in stacks {
            if let Some(pos) = self.stacks.iter().position(|s| s.id == id) {
                grouped.push(self.stacks.remove(pos));
            }
        }

        let id = self.ids.next_stack();
        let combined = match combine(id, grouped, group_card) {
            Ok(combined) => combined,
            Err(refused) => {
                self.stacks = board;
                return Err(refused);
            }
        };
        for card in combined.stripped {
            self.deck.discard(card);
        }
        self.stacks.push_back(combined.stack);
        Ok(id)
    }

    /// Play a GROUP card from `player`'s hand onto the given stacks.
    pub fn play_group(
        &mut self,
        player: PlayerId,
        card: CardId,
        stacks: &[StackId],
    ) -> GameResult<StackId> {
        let kind = self
            .hand(player)?
            .get(card)
            .map(|c| c.kind)
            .ok_or(GameError::CardNotInHand { player, card })?;
        if kind != CardKind::Group {
            return Err(GameError::IllegalMove(format!("{} is not a GROUP card", card)));
        }
        self.check_grouping(stacks)?;

        let group_card = self.remove_from_hand(player, card)?;
        self.combine_stacks(stacks, group_card).map_err(|refused| {
            self.hands[player].add(refused.card);
            refused.error
        })
    }

    fn stack_position(&self, stack: StackId) -> GameResult<usize> {
        self.stacks
            .iter()
            .position(|s| s.id == stack)
            .ok_or(GameError::UnknownStack(stack))
    }

    // === Trojans ===

    /// Swap a Trojan for the hostile card it was hiding.
    ///
    /// The Trojan goes to the discard pile; the returned card is new and
    /// marked `is_extra`.
    pub fn reveal_trojan(&mut self, trojan: Card) -> CardResult<Card> {
        if !trojan.is_mimic() {
            let error = GameError::IllegalMove(format!("{} is not a Trojan", trojan));
            return Err(Refused::new(error, trojan));
        }
        let id = self.ids.next_card();
        let Some(revealed) = trojan.replace(id) else {
            let error = GameError::IllegalMove(format!("{} is not a Trojan", trojan));
            return Err(Refused::new(error, trojan));
        };
        debug!("Trojan {} revealed as {}", trojan.id, revealed);
        self.deck.discard(trojan);
        Ok(revealed)
    }

    // === Players ===

    /// Add a status effect to a player.
    pub fn add_card_effect(
        &mut self,
        player: PlayerId,
        effect: CardKind,
        positive: bool,
    ) -> GameResult<()> {
        let target = self
            .players
            .get_mut(player)
            .ok_or(GameError::UnknownPlayer(player))?;
        if positive {
            target.add_positive(effect);
        } else {
            target.add_negative(effect);
        }
        Ok(())
    }

    /// Add `delta` to a player's score, returning the new score.
    pub fn add_score(&mut self, player: PlayerId, delta: i64) -> GameResult<i64> {
        let score = self
            .scores
            .get_mut(player)
            .ok_or(GameError::UnknownPlayer(player))?;
        *score += delta;
        Ok(*score)
    }

    /// Pass the turn to the next seat.
    pub fn next_player(&mut self) -> PlayerId {
        self.active_player = self.active_player.next(self.player_count());
        self.active_player
    }

    // === Moves ===

    /// Apply a decided move.
    ///
    /// - `Redraw`: a fresh hand for the acting player
    /// - `Attack`: the target gains the card's kind as a negative effect
    /// - `Safety`: the player gains the card's kind as a positive effect
    /// - `Enhance`: a battery backup clears one power outage
    ///
    /// A Trojan played this way is revealed instead, and the card it hid
    /// opens a new stack against the move's target.
    ///
    /// The move is checked in full before anything changes.
    pub fn apply_move(&mut self, mv: &Move) -> GameResult<()> {
        self.player(mv.player)?;
        self.player(mv.target)?;

        if mv.play_type == PlayType::Redraw {
            return self.give_new_hand(mv.player);
        }

        let card_id = mv
            .card
            .ok_or_else(|| GameError::IllegalMove(format!("{} needs a card", mv.play_type)))?;
        let card = self
            .hand(mv.player)?
            .get(card_id)
            .ok_or(GameError::CardNotInHand { player: mv.player, card: card_id })?;
        Self::check_play(mv, card.kind)?;

        let card = self.remove_from_hand(mv.player, card_id)?;
        debug!("applying {}", mv);

        if card.is_mimic() {
            let revealed = self.reveal_trojan(card).map_err(|refused| {
                self.hands[mv.player].add(refused.card);
                refused.error
            })?;
            self.new_stack(mv.target, revealed)?;
            return Ok(());
        }

        let kind = card.kind;
        let target = &mut self.players[mv.target];
        match mv.play_type {
            PlayType::Attack => target.add_negative(kind),
            PlayType::Safety => target.add_positive(kind),
            PlayType::Enhance => {
                target.clear_negative(CardKind::PowerOutage);
            }
            PlayType::Redraw => {}
        }
        self.deck.discard(card);
        Ok(())
    }

    fn check_play(mv: &Move, kind: CardKind) -> GameResult<()> {
        let self_targeted = mv.player == mv.target;
        let legal = match mv.play_type {
            PlayType::Attack => kind.is_attack() && !self_targeted,
            PlayType::Safety => kind.is_safety() && self_targeted,
            PlayType::Enhance => kind.is_enhancement() && self_targeted,
            PlayType::Redraw => true,
        };
        if legal {
            Ok(())
        } else {
            Err(GameError::IllegalMove(format!("cannot {} with {}", mv.play_type, kind)))
        }
    }
}
