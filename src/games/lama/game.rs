//! Lama rules and transitions.

use tracing::{debug, info, warn};

use crate::cards::{Card, RankRange};
use crate::core::{Action, GameState, LamaConfig, PlayerId, WinPolicy};
use crate::events::GameEvent;
use crate::rules::{GameError, GameResult, InvalidMove, RulesEngine, Transition};

/// Can `candidate` go on `top` with the three-rank alphabet {1, 2, 3}?
///
/// Same rank or one higher; a 1 may follow a 3.
#[must_use]
pub fn is_valid_play(top: Card, candidate: Card) -> bool {
    RankRange::CLASSIC.is_valid_play(top, candidate)
}

/// The Lama rules for one table.
///
/// Holds configuration only. All table state lives in `GameState` values,
/// which the transition methods read and never modify.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LamaGame {
    config: LamaConfig,
}

impl LamaGame {
    /// Create the rules for a table.
    #[must_use]
    pub fn new(config: LamaConfig) -> Self {
        Self { config }
    }

    /// The rank alphabet the play rule uses.
    #[must_use]
    pub fn ranks(&self) -> &RankRange {
        &self.config.ranks
    }

    /// What happens after a player goes out.
    #[must_use]
    pub fn win_policy(&self) -> WinPolicy {
        self.config.win_policy
    }

    /// Can `candidate` be played on `top` at this table?
    #[must_use]
    pub fn is_valid_play(&self, top: Card, candidate: Card) -> bool {
        self.config.ranks.is_valid_play(top, candidate)
    }

    /// Hand indices `player` could play right now.
    ///
    /// Empty when it is not `player`'s turn or the round is over, so a UI can
    /// enable exactly these cards.
    #[must_use]
    pub fn playable_cards(&self, state: &GameState, player: PlayerId) -> Vec<usize> {
        if self.ensure_open(state).is_err() || player != state.current_player() {
            return vec![];
        }

        let top = state.top_card();
        state
            .hand(player)
            .map(|hand| {
                hand.iter()
                    .enumerate()
                    .filter(|(_, card)| self.is_valid_play(top, **card))
                    .map(|(index, _)| index)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Play the card at `card_index` from `player`'s hand onto the stack.
    ///
    /// On success the card becomes the new top, the turn passes to the next
    /// seat, and `PlayerWon` is emitted if this emptied the hand and nobody
    /// had won yet. On failure `state` is untouched.
    pub fn play_card(
        &self,
        state: &GameState,
        player: PlayerId,
        card_index: usize,
    ) -> Result<Transition, GameError> {
        self.check_open(state, player)?;

        let candidate = match self.check_play(state, player, card_index) {
            Ok(card) => card,
            Err(reason) => {
                warn!(%player, card_index, %reason, "rejected play");
                return Err(reason.into());
            }
        };

        let mut next = state.clone();
        next.hands[player].remove(card_index);
        next.stack.push_front(candidate);
        next.record(player, Action::play(card_index), candidate);

        let mut events = vec![GameEvent::CardPlayed { player, card: candidate }];

        if next.hands[player].is_empty() && next.winner.is_none() {
            next.winner = Some(player);
            info!(%player, turn = next.turn_number, "player went out");
            events.push(GameEvent::PlayerWon(player));
        }

        next.advance_turn();
        debug!(%player, card = %candidate, next = %next.current_player, "card played");

        Ok(Transition { state: next, events })
    }

    /// Draw the top card of the deck for the current player.
    ///
    /// An empty deck is rebuilt first from everything under the top of the
    /// stack. The drawn card joins the hand, which is kept sorted by rank,
    /// and the turn passes on. Fails with `NoCardsAvailable` when there is
    /// nothing to reshuffle.
    pub fn draw_card(&self, state: &GameState) -> Result<Transition, GameError> {
        self.draw_for(state, state.current_player())
    }

    fn draw_for(&self, state: &GameState, player: PlayerId) -> Result<Transition, GameError> {
        self.check_open(state, player)?;

        if let Err(reason) = check_turn(state, player) {
            warn!(%player, %reason, "rejected draw");
            return Err(reason.into());
        }

        let mut next = state.clone();
        let mut events = Vec::with_capacity(2);

        if next.deck.is_empty() {
            let moved = next.reshuffle_stack();
            if moved == 0 {
                warn!(%player, "deck and stack exhausted");
                return Err(GameError::NoCardsAvailable);
            }
            info!(cards = moved, "reshuffled stack into deck");
            events.push(GameEvent::DeckReshuffled { cards: moved });
        }

        let card = next.deck.pop_front().ok_or(GameError::NoCardsAvailable)?;
        let hand = &mut next.hands[player];
        hand.push_back(card);
        hand.sort();

        next.record(player, Action::Draw, card);
        events.push(GameEvent::CardDrawn { player });

        next.advance_turn();
        debug!(%player, deck = next.deck.len(), next = %next.current_player, "card drawn");

        Ok(Transition { state: next, events })
    }

    /// Reject everything once the round has ended, unless play continues.
    fn ensure_open(&self, state: &GameState) -> Result<(), GameError> {
        match (self.config.win_policy, state.winner()) {
            (WinPolicy::EndRound, Some(winner)) => Err(GameError::RoundOver { winner }),
            _ => Ok(()),
        }
    }

    /// `ensure_open` for a transition: a refusal is logged like any other.
    fn check_open(&self, state: &GameState, player: PlayerId) -> Result<(), GameError> {
        self.ensure_open(state).map_err(|err| {
            warn!(%player, %err, "rejected move after the round ended");
            err
        })
    }

    fn check_play(
        &self,
        state: &GameState,
        player: PlayerId,
        card_index: usize,
    ) -> Result<Card, InvalidMove> {
        check_turn(state, player)?;

        let hand = &state.hands[player];
        let candidate = hand.get(card_index).copied().ok_or(InvalidMove::NoSuchCard {
            player,
            index: card_index,
            hand_size: hand.len(),
        })?;

        let top = state.top_card();
        if !self.is_valid_play(top, candidate) {
            return Err(InvalidMove::IllegalCard { top, candidate });
        }

        Ok(candidate)
    }
}

/// The seat must exist and hold the turn.
fn check_turn(state: &GameState, player: PlayerId) -> Result<(), InvalidMove> {
    if player.index() >= state.player_count() {
        return Err(InvalidMove::UnknownPlayer { player });
    }

    let current = state.current_player();
    if player != current {
        return Err(InvalidMove::NotYourTurn { player, current });
    }

    Ok(())
}

impl RulesEngine for LamaGame {
    fn config(&self) -> &LamaConfig {
        &self.config
    }

    fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action> {
        let mut actions: Vec<Action> = self
            .playable_cards(state, player)
            .into_iter()
            .map(Action::play)
            .collect();

        if player == state.current_player() && self.ensure_open(state).is_ok() && state.can_draw() {
            actions.push(Action::Draw);
        }

        actions
    }

    fn apply_action(
        &self,
        state: &GameState,
        player: PlayerId,
        action: &Action,
    ) -> Result<Transition, GameError> {
        match *action {
            Action::Play { card_index } => self.play_card(state, player, card_index),
            Action::Draw => self.draw_for(state, player),
        }
    }

    /// Under `WinPolicy::PlayOn` this still reports the winner, although the
    /// engine keeps accepting moves.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        if let Some(winner) = state.winner() {
            return Some(GameResult::Winner(winner));
        }

        if self.legal_actions(state, state.current_player()).is_empty() {
            Some(GameResult::Stalled)
        } else {
            None
        }
    }
}
