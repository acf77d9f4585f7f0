//! Game event types.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerId;

/// Something that happened during a transition.
///
/// ## Ordering
///
/// Events are listed in the order they happened. A draw that needed a
/// reshuffle reports `DeckReshuffled` before `CardDrawn`; a winning play
/// reports `CardPlayed` before `PlayerWon`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// A card moved from a hand to the top of the stack.
    CardPlayed { player: PlayerId, card: Card },

    /// A player took the top card of the deck. The card itself is private.
    CardDrawn { player: PlayerId },

    /// The stack below the top card became the new deck.
    DeckReshuffled { cards: usize },

    /// A player emptied their hand. Reported at most once per game.
    PlayerWon(PlayerId),
}

impl GameEvent {
    /// The player the event concerns, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::CardPlayed { player, .. } | GameEvent::CardDrawn { player } => Some(*player),
            GameEvent::PlayerWon(player) => Some(*player),
            GameEvent::DeckReshuffled { .. } => None,
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::CardPlayed { player, card } => write!(f, "{} played {}", player, card),
            GameEvent::CardDrawn { player } => write!(f, "{} drew a card", player),
            GameEvent::DeckReshuffled { cards } => write!(f, "stack reshuffled into a {}-card deck", cards),
            GameEvent::PlayerWon(player) => write!(f, "{} wins!", player),
        }
    }
}
