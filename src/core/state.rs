//! Game state: the single aggregate every transition reads and produces.
//!
//! ## GameState
//!
//! Complete table state:
//! - Current player (the only seat allowed to act)
//! - Discard stack (front = top card, never empty)
//! - Deck (front = next card drawn)
//! - One hand per seat
//! - Winner, turn counter, action history
//! - RNG for reshuffles
//!
//! States are values. Transitions take `&GameState` and return a new state,
//! so a rejected move cannot leave a half-applied change behind. The
//! containers are `im` persistent vectors, which makes the clone at the
//! start of every transition O(1).
//!
//! ## PublicView
//!
//! What every player may observe: the top card, pile sizes and hand sizes.

use im::Vector;
use serde::Serialize;

use super::action::{Action, ActionRecord};
use super::config::{check_player_count, ConfigError};
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::Card;

/// Full game state including private hands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub(crate) current_player: PlayerId,

    /// Discard pile, most recently played first.
    pub(crate) stack: Vector<Card>,

    /// Draw pile, next card first.
    pub(crate) deck: Vector<Card>,

    pub(crate) hands: PlayerMap<Vector<Card>>,

    /// First player to empty their hand.
    pub(crate) winner: Option<PlayerId>,

    /// Turn number (starts at 1, bumped on every successful transition).
    pub(crate) turn_number: u32,

    pub(crate) history: Vector<ActionRecord>,

    /// Deterministic RNG for reshuffles.
    pub(crate) rng: GameRng,
}

impl GameState {
    /// Build a state directly from its piles.
    ///
    /// Used for fixed tables and tests. Hands are kept in the given order;
    /// draws re-sort the drawing player's hand.
    ///
    /// Rejects a player count outside the supported range, an empty stack,
    /// and a current player that is not a seat.
    pub fn from_parts(
        current_player: usize,
        stack: Vec<Card>,
        deck: Vec<Card>,
        hands: Vec<Vec<Card>>,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        check_player_count(hands.len())?;

        if stack.is_empty() {
            return Err(ConfigError::EmptyStack);
        }

        let current = PlayerId::checked(current_player, hands.len()).ok_or(
            ConfigError::CurrentPlayerOutOfRange {
                current: current_player,
                players: hands.len(),
            },
        )?;

        Ok(Self::assemble(current, stack, deck, hands, GameRng::new(seed)))
    }

    /// Assemble without validation. Callers guarantee 1..=255 hands, a
    /// non-empty stack and an in-range current player.
    pub(crate) fn assemble(
        current_player: PlayerId,
        stack: Vec<Card>,
        deck: Vec<Card>,
        hands: Vec<Vec<Card>>,
        rng: GameRng,
    ) -> Self {
        Self {
            current_player,
            stack: stack.into_iter().collect(),
            deck: deck.into_iter().collect(),
            hands: PlayerMap::from_vec(hands.into_iter().map(Vector::from).collect()),
            winner: None,
            turn_number: 1,
            history: Vector::new(),
            rng,
        }
    }

    // === Queries ===

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.hands.player_count()
    }

    /// The seat whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Top of the discard stack.
    ///
    /// The stack is never empty: constructors require a card and a reshuffle
    /// always leaves the top card in place.
    #[must_use]
    pub fn top_card(&self) -> Card {
        self.stack[0]
    }

    /// The discard stack, top first.
    #[must_use]
    pub fn stack(&self) -> &Vector<Card> {
        &self.stack
    }

    /// The deck, next draw first.
    #[must_use]
    pub fn deck(&self) -> &Vector<Card> {
        &self.deck
    }

    /// A player's hand, or `None` if the seat does not exist.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> Option<&Vector<Card>> {
        self.hands.get(player)
    }

    /// All hands in seat order.
    #[must_use]
    pub fn hands(&self) -> &PlayerMap<Vector<Card>> {
        &self.hands
    }

    /// Hand sizes (public knowledge).
    #[must_use]
    pub fn hand_sizes(&self) -> PlayerMap<usize> {
        self.hands.map(Vector::len)
    }

    /// The player who went out first, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Has somebody gone out? Under `WinPolicy::PlayOn` moves are still accepted.
    #[must_use]
    pub fn is_round_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Turn number (starts at 1).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Every successful action so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Cards that a reshuffle could turn into a new deck.
    #[must_use]
    pub fn reshuffleable(&self) -> usize {
        self.stack.len().saturating_sub(1)
    }

    /// Can the current player draw, possibly after a reshuffle?
    #[must_use]
    pub fn can_draw(&self) -> bool {
        !self.deck.is_empty() || self.reshuffleable() > 0
    }

    /// Total cards on the table. Constant across every transition.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.stack.len() + self.deck.len() + self.hands.values().map(Vector::len).sum::<usize>()
    }

    /// Every card on the table, sorted. Constant across every transition.
    #[must_use]
    pub fn card_multiset(&self) -> Vec<Card> {
        let mut cards: Vec<Card> = self
            .stack
            .iter()
            .chain(self.deck.iter())
            .chain(self.hands.values().flat_map(|hand| hand.iter()))
            .copied()
            .collect();
        cards.sort();
        cards
    }

    /// Snapshot of the publicly visible table.
    #[must_use]
    pub fn public_view(&self) -> PublicView {
        PublicView {
            current_player: self.current_player,
            top_card: self.top_card(),
            stack_size: self.stack.len(),
            deck_size: self.deck.len(),
            hand_sizes: self.hand_sizes(),
            winner: self.winner,
            turn_number: self.turn_number,
        }
    }

    // === Mutation (transition internals) ===

    /// Pass the turn to the next seat.
    pub(crate) fn advance_turn(&mut self) {
        self.current_player = self.current_player.next(self.player_count());
        self.turn_number += 1;
    }

    /// Append to the action history.
    pub(crate) fn record(&mut self, player: PlayerId, action: Action, card: Card) {
        self.history
            .push_back(ActionRecord::new(player, action, card, self.turn_number));
    }

    /// Turn everything under the top card into a freshly shuffled deck.
    ///
    /// Returns the number of cards moved. Zero means only the top card was
    /// on the stack and nothing changed.
    pub(crate) fn reshuffle_stack(&mut self) -> usize {
        if self.stack.len() <= 1 {
            return 0;
        }

        let under: Vec<Card> = self.stack.split_off(1).into_iter().collect();
        let moved = under.len();
        self.deck.extend(self.rng.shuffled(under));
        moved
    }
}

/// Publicly observable table state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PublicView {
    pub current_player: PlayerId,
    pub top_card: Card,
    pub stack_size: usize,
    pub deck_size: usize,
    pub hand_sizes: PlayerMap<usize>,
    pub winner: Option<PlayerId>,
    pub turn_number: u32,
}
