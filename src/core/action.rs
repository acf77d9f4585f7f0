//! Action representation and history records.
//!
//! A Lama turn is exactly one of two things: play a card from hand onto
//! the stack, or draw a card from the deck. `ActionRecord` logs who did
//! what, with which card, on which turn, for replay and debugging.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::Card;

/// A complete turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Play the card at `card_index` in the acting player's hand.
    Play { card_index: usize },
    /// Draw the next card from the deck.
    Draw,
}

impl Action {
    /// Shorthand for `Action::Play { card_index }`.
    #[must_use]
    pub const fn play(card_index: usize) -> Self {
        Self::Play { card_index }
    }

    /// Check if this is a draw.
    #[must_use]
    pub const fn is_draw(&self) -> bool {
        matches!(self, Self::Draw)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Play { card_index } => write!(f, "play #{}", card_index),
            Self::Draw => write!(f, "draw"),
        }
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// The card that moved: played onto the stack, or drawn into hand.
    pub card: Card,

    /// Turn number when the action was taken.
    pub turn: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, card: Card, turn: u32) -> Self {
        Self {
            player,
            action,
            card,
            turn,
        }
    }
}
