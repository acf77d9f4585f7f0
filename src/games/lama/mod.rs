//! Lama: a shedding game played on a single discard stack.
//!
//! - Every player is dealt a hand; one card starts the stack, the rest is the deck
//! - On your turn: play a card of the same rank as the top card or one rank
//!   higher (the highest rank may be followed by the lowest), or draw a card
//! - When the deck runs out, everything under the top card is reshuffled
//!   into a new deck
//! - The first player to empty their hand wins
//!
//! Supports 2-8 players and any contiguous rank alphabet.

mod builder;
mod game;

pub use builder::{new_game, LamaGameBuilder};
pub use game::{is_valid_play, LamaGame};
