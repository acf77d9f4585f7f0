//! Card and rank values.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A card rank.
///
/// Opaque apart from ordering and the "one higher" step the play rule uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rank(pub u8);

impl Rank {
    /// Create a new rank.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Get the raw rank value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The rank directly above this one, if representable.
    #[must_use]
    pub fn succ(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single card.
///
/// Cards with the same rank are interchangeable; ordering is by rank, which
/// gives hands their canonical ascending order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Card {
    rank: Rank,
}

impl Card {
    /// Create a card of the given rank.
    #[must_use]
    pub const fn new(rank: u8) -> Self {
        Self { rank: Rank(rank) }
    }

    /// Get the card's rank.
    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    /// Parse a list of labels such as `["1", "2", "3"]`.
    ///
    /// ```
    /// use lama::cards::Card;
    ///
    /// let hand = Card::parse_all(&["1", "3"]).unwrap();
    /// assert_eq!(hand, vec![Card::new(1), Card::new(3)]);
    /// ```
    pub fn parse_all(labels: &[&str]) -> Result<Vec<Card>, CardParseError> {
        labels.iter().map(|label| label.parse::<Card>()).collect()
    }
}

impl From<Rank> for Card {
    fn from(rank: Rank) -> Self {
        Self { rank }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rank)
    }
}

/// Error parsing a card label.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CardParseError {
    /// The label is not a rank number.
    #[error("invalid card label {0:?}")]
    InvalidLabel(String),
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .map(Card::new)
            .map_err(|_| CardParseError::InvalidLabel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_display_is_bare_label() {
        assert_eq!(Card::new(3).to_string(), "3");
        assert_eq!(format!("{}", Rank::new(1)), "1");
    }

    #[test]
    fn test_card_ordering_follows_rank() {
        let mut hand = vec![Card::new(3), Card::new(1), Card::new(2), Card::new(1)];
        hand.sort();
        assert_eq!(hand, vec![Card::new(1), Card::new(1), Card::new(2), Card::new(3)]);
    }

    #[test]
    fn test_parse() {
        assert_eq!("2".parse::<Card>(), Ok(Card::new(2)));
        assert_eq!(" 3 ".parse::<Card>(), Ok(Card::new(3)));
        assert_eq!(
            "lama".parse::<Card>(),
            Err(CardParseError::InvalidLabel("lama".to_string()))
        );
        assert!(Card::parse_all(&["1", "x"]).is_err());
    }

    #[test]
    fn test_succ() {
        assert_eq!(Rank::new(2).succ(), Some(Rank::new(3)));
        assert_eq!(Rank::new(u8::MAX).succ(), None);
    }

    #[test]
    fn test_card_serializes_as_rank() {
        let json = serde_json::to_string(&vec![Card::new(1), Card::new(3)]).unwrap();
        assert_eq!(json, "[1,3]");

        let cards: Vec<Card> = serde_json::from_str(&json).unwrap();
        assert_eq!(cards, vec![Card::new(1), Card::new(3)]);
    }
}
