//! Cards and the rank alphabet.
//!
//! A Lama card carries nothing but a rank. Ranks are small integers drawn
//! from a contiguous [`RankRange`]; the range also owns the play rule,
//! including the wrap from the highest rank back to the lowest.

pub mod card;
pub mod rank;

pub use card::{Card, CardParseError, Rank};
pub use rank::RankRange;
