//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - What actions are legal
//! - How an action turns one state into the next
//! - Win conditions

use crate::core::action::Action;
use crate::core::config::LamaConfig;
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::events::GameEvent;

use super::error::GameError;

/// Result of a finished round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// A player emptied their hand.
    Winner(PlayerId),
    /// Nobody has won, but the player to move can neither play nor draw.
    Stalled,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Stalled => false,
        }
    }
}

/// A successful transition: the next state and what happened on the way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// The state after the action.
    pub state: GameState,

    /// Events in the order they happened.
    pub events: Vec<GameEvent>,
}

impl Transition {
    /// The player reported by a `PlayerWon` event, if this transition won the game.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.events.iter().find_map(|event| match event {
            GameEvent::PlayerWon(player) => Some(*player),
            _ => None,
        })
    }

    /// Drop the events and keep the state.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Return empty vec if the player can't act
/// - `apply_action`: Must not touch `state`; return the successor or an error
/// - `is_terminal`: Return None while the round continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &LamaConfig;

    /// Enumerate all legal actions for a player.
    ///
    /// Every action returned here must succeed when passed to `apply_action`.
    fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action>;

    /// Compute the state that follows `action` by `player`.
    fn apply_action(
        &self,
        state: &GameState,
        player: PlayerId,
        action: &Action,
    ) -> Result<Transition, GameError>;

    /// Check if the round is over.
    ///
    /// Returns `Some(result)` if the round has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Check if an action is currently legal for a player.
    fn is_legal(&self, state: &GameState, player: PlayerId, action: &Action) -> bool {
        self.legal_actions(state, player).contains(action)
    }
}
