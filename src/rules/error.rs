//! Transition errors.
//!
//! Every failure is returned as a value and leaves the input state as it
//! was. None of them are fatal: the caller re-prompts, or ends the round.

use crate::cards::Card;
use crate::core::PlayerId;

/// Why a play was refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMove {
    #[error("{player} is not seated at this table")]
    UnknownPlayer { player: PlayerId },

    #[error("it is {current}'s turn, not {player}'s")]
    NotYourTurn { player: PlayerId, current: PlayerId },

    #[error("{player} has no card at index {index} (hand holds {hand_size})")]
    NoSuchCard {
        player: PlayerId,
        index: usize,
        hand_size: usize,
    },

    #[error("cannot play {candidate} on {top}")]
    IllegalCard { top: Card, candidate: Card },
}

/// A transition that could not be applied.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The move breaks the play rule, or names the wrong player or card.
    #[error("invalid move: {0}")]
    InvalidMove(#[from] InvalidMove),

    /// The deck is empty and the stack holds nothing but its top card.
    #[error("no cards available to draw")]
    NoCardsAvailable,

    /// The round has ended under `WinPolicy::EndRound`.
    #[error("round is over: {winner} already won")]
    RoundOver { winner: PlayerId },
}

impl GameError {
    /// Check if this is an `InvalidMove`.
    #[must_use]
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, GameError::InvalidMove(_))
    }
}
