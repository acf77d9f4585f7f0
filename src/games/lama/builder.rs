//! Table setup: dealing fresh games and the fixed reference table.

use tracing::info;

use super::game::LamaGame;
use crate::cards::{Card, RankRange};
use crate::core::config::check_player_count;
use crate::core::{ConfigError, GameRng, GameState, LamaConfig, PlayerId, WinPolicy};

/// Builder for creating a `LamaGame` and its opening state.
///
/// ```
/// use lama::games::lama::LamaGameBuilder;
/// use lama::core::PlayerId;
///
/// let (_game, state) = LamaGameBuilder::new()
///     .player_count(4)
///     .hand_size(5)
///     .copies_per_rank(8)
///     .build(42)
///     .unwrap();
///
/// assert_eq!(state.hand(PlayerId::new(3)).unwrap().len(), 5);
/// assert_eq!(state.card_count(), 24);
/// ```
#[derive(Clone, Debug, Default)]
pub struct LamaGameBuilder {
    config: LamaConfig,
}

impl LamaGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing config.
    pub fn from_config(config: LamaConfig) -> Self {
        Self { config }
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self
    }

    pub fn hand_size(mut self, size: usize) -> Self {
        self.config.hand_size = size;
        self
    }

    pub fn ranks(mut self, ranks: RankRange) -> Self {
        self.config.ranks = ranks;
        self
    }

    pub fn copies_per_rank(mut self, copies: usize) -> Self {
        self.config.copies_per_rank = copies;
        self
    }

    pub fn win_policy(mut self, policy: WinPolicy) -> Self {
        self.config.win_policy = policy;
        self
    }

    /// Deal a fresh table.
    ///
    /// Generates `copies_per_rank` of every rank, shuffles them with the
    /// seeded RNG, deals hands one card at a time around the table, flips
    /// the next card onto the stack and leaves the rest as the deck. Hands
    /// start sorted and player 0 moves first.
    pub fn build(self, seed: u64) -> Result<(LamaGame, GameState), ConfigError> {
        self.config.validate()?;

        let LamaConfig {
            player_count,
            hand_size,
            ranks,
            copies_per_rank,
            ..
        } = self.config;

        let mut rng = GameRng::new(seed);
        let cards: Vec<Card> = ranks
            .iter()
            .flat_map(|rank| std::iter::repeat(Card::from(rank)).take(copies_per_rank))
            .collect();
        let deck_size = cards.len();
        let mut pile = rng.shuffled(cards).into_iter();

        let mut hands = vec![Vec::with_capacity(hand_size); player_count];
        for _ in 0..hand_size {
            for hand in hands.iter_mut() {
                hand.extend(pile.next());
            }
        }
        for hand in hands.iter_mut() {
            hand.sort();
        }

        let starter = pile.next().ok_or(ConfigError::DeckTooSmall {
            deck: deck_size,
            needed: player_count * hand_size + 1,
        })?;
        let deck: Vec<Card> = pile.collect();

        info!(player_count, hand_size, deck = deck.len(), seed, "dealt new table");

        let state = GameState::assemble(PlayerId::new(0), vec![starter], deck, hands, rng);
        Ok((LamaGame::new(self.config), state))
    }

    /// The fixed three-player opening table.
    ///
    /// Stack `3`; deck `1 2 3 1 2 2 1 3`; hands `1 2 3`, `3 1` and `3`;
    /// player 0 to move. The builder's win policy applies; the player count
    /// and rank alphabet are forced to match the table. `seed` only drives
    /// later reshuffles.
    pub fn reference_table(self, seed: u64) -> (LamaGame, GameState) {
        let config = LamaConfig {
            player_count: 3,
            ranks: RankRange::CLASSIC,
            ..self.config
        };

        let state = GameState::assemble(
            PlayerId::new(0),
            cards_of(&[3]),
            cards_of(&[1, 2, 3, 1, 2, 2, 1, 3]),
            vec![cards_of(&[1, 2, 3]), cards_of(&[3, 1]), cards_of(&[3])],
            GameRng::new(seed),
        );

        (LamaGame::new(config), state)
    }
}

fn cards_of(values: &[u8]) -> Vec<Card> {
    values.iter().copied().map(Card::new).collect()
}

/// Deal a classic table for `player_count` players with `hand_size` cards each.
///
/// The deck is sized so that, after the deal, at least as many cards remain
/// to draw as were dealt.
pub fn new_game(
    player_count: usize,
    hand_size: usize,
    seed: u64,
) -> Result<(LamaGame, GameState), ConfigError> {
    check_player_count(player_count)?;

    let config = LamaConfig::default()
        .with_player_count(player_count)
        .with_hand_size(hand_size);
    let copies = config
        .cards_needed()
        .and_then(|needed| needed.checked_mul(2))
        .ok_or(ConfigError::TableTooLarge)?
        .div_ceil(config.ranks.len().max(1))
        .max(config.copies_per_rank);

    LamaGameBuilder::from_config(config.with_copies_per_rank(copies)).build(seed)
}
