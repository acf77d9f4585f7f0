//! The rank alphabet and the play rule.

use serde::{Deserialize, Serialize};

use super::card::{Card, Rank};

/// A contiguous, inclusive range of ranks.
///
/// The play rule depends on the bounds: a card may follow the top card if it
/// has the same rank, the next rank up, or if the top card is `max` and the
/// candidate is `min` (the wrap).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankRange {
    /// Lowest rank (inclusive).
    pub min: Rank,
    /// Highest rank (inclusive).
    pub max: Rank,
}

impl RankRange {
    /// The three-rank table: 1, 2, 3.
    pub const CLASSIC: RankRange = RankRange::new(1, 3);

    /// Create a new range. Use [`RankRange::is_well_formed`] to reject `min > max`.
    #[must_use]
    pub const fn new(min: u8, max: u8) -> Self {
        Self {
            min: Rank(min),
            max: Rank(max),
        }
    }

    /// True when the range holds at least one rank.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.min <= self.max
    }

    /// Number of distinct ranks.
    #[must_use]
    pub fn len(&self) -> usize {
        if self.is_well_formed() {
            (self.max.0 - self.min.0) as usize + 1
        } else {
            0
        }
    }

    /// True if no rank lies in the range.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check whether a rank belongs to this alphabet.
    #[must_use]
    pub fn contains(&self, rank: Rank) -> bool {
        self.min <= rank && rank <= self.max
    }

    /// Iterate the ranks in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Rank> {
        (self.min.0..=self.max.0).map(Rank)
    }

    /// Can `candidate` be played on `top`?
    ///
    /// Cards outside the alphabet are never playable, and nothing may go
    /// onto a card outside it.
    ///
    /// ```
    /// use lama::cards::{Card, RankRange};
    ///
    /// let ranks = RankRange::CLASSIC;
    /// assert!(ranks.is_valid_play(Card::new(1), Card::new(2)));
    /// assert!(ranks.is_valid_play(Card::new(3), Card::new(1)));
    /// assert!(!ranks.is_valid_play(Card::new(3), Card::new(2)));
    /// ```
    #[must_use]
    pub fn is_valid_play(&self, top: Card, candidate: Card) -> bool {
        let (top, candidate) = (top.rank(), candidate.rank());
        if !self.contains(top) || !self.contains(candidate) {
            return false;
        }

        candidate == top
            || top.succ() == Some(candidate)
            || (top == self.max && candidate == self.min)
    }
}

impl Default for RankRange {
    fn default() -> Self {
        Self::CLASSIC
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_on(ranks: &RankRange, top: u8) -> Vec<u8> {
        ranks
            .iter()
            .filter(|r| ranks.is_valid_play(Card::new(top), Card::from(*r)))
            .map(Rank::value)
            .collect()
    }

    #[test]
    fn test_classic_rule_is_exhaustive() {
        let ranks = RankRange::CLASSIC;
        assert_eq!(valid_on(&ranks, 1), vec![1, 2]);
        assert_eq!(valid_on(&ranks, 2), vec![2, 3]);
        assert_eq!(valid_on(&ranks, 3), vec![1, 3]);
    }

    #[test]
    fn test_lower_by_one_is_illegal() {
        let ranks = RankRange::CLASSIC;
        assert!(!ranks.is_valid_play(Card::new(2), Card::new(1)));
        assert!(!ranks.is_valid_play(Card::new(3), Card::new(2)));
    }

    #[test]
    fn test_wrap_follows_bounds() {
        let ranks = RankRange::new(1, 7);
        assert!(ranks.is_valid_play(Card::new(7), Card::new(1)));
        assert!(!ranks.is_valid_play(Card::new(3), Card::new(1)));
        assert_eq!(valid_on(&ranks, 4), vec![4, 5]);
    }

    #[test]
    fn test_out_of_range_cards_never_play() {
        let ranks = RankRange::CLASSIC;
        assert!(!ranks.is_valid_play(Card::new(3), Card::new(4)));
        assert!(!ranks.is_valid_play(Card::new(0), Card::new(1)));
    }

    #[test]
    fn test_len_and_shape() {
        assert_eq!(RankRange::CLASSIC.len(), 3);
        assert!(!RankRange::CLASSIC.is_empty());
        assert!(RankRange::new(4, 2).is_empty());
        assert!(!RankRange::new(4, 2).is_well_formed());
    }
}
