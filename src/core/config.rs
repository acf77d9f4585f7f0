//! Table configuration.
//!
//! A `LamaConfig` describes everything needed to deal a fresh game:
//! - how many players sit at the table and how many cards each is dealt
//! - the rank alphabet and how many copies of each rank the deck holds
//! - what happens once a player has emptied their hand (`WinPolicy`)
//!
//! Configs are plain serde values with builder-style setters. Call
//! [`LamaConfig::validate`] before dealing.

use serde::{Deserialize, Serialize};

use crate::cards::RankRange;

/// Fewest players a table supports.
pub const MIN_PLAYERS: usize = 2;

/// Most players a table supports.
pub const MAX_PLAYERS: usize = 8;

/// Largest deck a table may generate.
pub const MAX_DECK_SIZE: usize = 1 << 16;

/// What the engine does after a player empties their hand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinPolicy {
    /// The round ends: every further play or draw is rejected.
    #[default]
    EndRound,
    /// Turns keep rotating among all seats, including the winner's.
    /// The win is still reported exactly once.
    PlayOn,
}

/// Configuration for one table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LamaConfig {
    /// Number of seats (fixed for the whole game).
    pub player_count: usize,

    /// Cards dealt to each player at the start.
    pub hand_size: usize,

    /// Rank alphabet; also parameterises the wrap rule.
    pub ranks: RankRange,

    /// Copies of every rank in a freshly generated deck.
    pub copies_per_rank: usize,

    /// Behaviour after the first player goes out.
    #[serde(default)]
    pub win_policy: WinPolicy,
}

impl Default for LamaConfig {
    fn default() -> Self {
        Self {
            player_count: 3,
            hand_size: 3,
            ranks: RankRange::CLASSIC,
            copies_per_rank: 4,
            win_policy: WinPolicy::EndRound,
        }
    }
}

impl LamaConfig {
    /// Set the number of players.
    #[must_use]
    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    /// Set the starting hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set the rank alphabet.
    #[must_use]
    pub fn with_ranks(mut self, ranks: RankRange) -> Self {
        self.ranks = ranks;
        self
    }

    /// Set how many copies of each rank the deck holds.
    #[must_use]
    pub fn with_copies_per_rank(mut self, copies: usize) -> Self {
        self.copies_per_rank = copies;
        self
    }

    /// Set the win policy.
    #[must_use]
    pub fn with_win_policy(mut self, policy: WinPolicy) -> Self {
        self.win_policy = policy;
        self
    }

    /// Total cards in a freshly generated deck, or `None` on overflow.
    #[must_use]
    pub fn deck_size(&self) -> Option<usize> {
        self.ranks.len().checked_mul(self.copies_per_rank)
    }

    /// Cards needed to deal every hand and flip one starter card, or `None`
    /// on overflow.
    #[must_use]
    pub fn cards_needed(&self) -> Option<usize> {
        self.player_count.checked_mul(self.hand_size)?.checked_add(1)
    }

    /// Check the config can produce a legal opening table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_player_count(self.player_count)?;

        if self.hand_size == 0 {
            return Err(ConfigError::EmptyHand);
        }

        if !self.ranks.is_well_formed() {
            return Err(ConfigError::EmptyRankRange {
                min: self.ranks.min.value(),
                max: self.ranks.max.value(),
            });
        }

        let deck = self
            .deck_size()
            .filter(|&deck| deck <= MAX_DECK_SIZE)
            .ok_or(ConfigError::TableTooLarge)?;
        let needed = self.cards_needed().ok_or(ConfigError::TableTooLarge)?;

        if deck < needed {
            return Err(ConfigError::DeckTooSmall { deck, needed });
        }

        Ok(())
    }
}

pub(crate) fn check_player_count(count: usize) -> Result<(), ConfigError> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
        Ok(())
    } else {
        Err(ConfigError::PlayerCount(count))
    }
}

/// A table that cannot be set up.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("player count {0} outside supported range {}..={}", MIN_PLAYERS, MAX_PLAYERS)]
    PlayerCount(usize),

    #[error("hand size must be at least 1")]
    EmptyHand,

    #[error("rank range {min}..={max} holds no ranks")]
    EmptyRankRange { min: u8, max: u8 },

    #[error("deck of {deck} cards cannot cover the {needed} needed for hands plus a starter")]
    DeckTooSmall { deck: usize, needed: usize },

    #[error("table needs more than {} cards", MAX_DECK_SIZE)]
    TableTooLarge,

    #[error("the discard stack needs at least one card")]
    EmptyStack,

    #[error("current player {current} is not a seat at a {players}-player table")]
    CurrentPlayerOutOfRange { current: usize, players: usize },
}
