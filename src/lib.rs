//! # lama
//!
//! A turn-based shedding card game engine for Lama.
//!
//! ## Design Principles
//!
//! 1. **Value Semantics**: Every transition takes `&GameState` and returns
//!    a new state or an error. A rejected move cannot leave a partial
//!    change behind, and a state can be kept, compared or replayed freely.
//!
//! 2. **Conservation**: Cards only move between the stack, the deck and the
//!    hands. `GameState::card_count` is constant across every transition.
//!
//! 3. **Single Writer**: Exactly one player may act at a time. Drivers that
//!    share a game across threads must serialise calls (one lock or one
//!    actor per table).
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) state cloning via `im-rs`, so the
//!   clone at the start of each transition is cheap.
//!
//! - **Deterministic RNG**: The state owns a seeded ChaCha8 RNG. The same
//!   state and the same action always produce the same successor,
//!   reshuffles included.
//!
//! - **Events, not callbacks**: Transitions return `GameEvent`s (including
//!   `PlayerWon`); rendering and notifications belong to the caller.
//!
//! ## Modules
//!
//! - `core`: Players, state, actions, RNG, configuration
//! - `cards`: Cards, ranks and the play rule
//! - `rules`: RulesEngine trait, transitions and errors
//! - `events`: Events reported by transitions
//! - `games`: The Lama rules and table setup
//!
//! ## Example
//!
//! ```
//! use lama::{LamaGameBuilder, PlayerId, GameEvent};
//!
//! let (game, state) = LamaGameBuilder::new().reference_table(42);
//!
//! // Player 0 plays a 1 on the 3 (the wrap rule).
//! let next = game.play_card(&state, PlayerId::new(0), 0).unwrap();
//! assert_eq!(next.state.top_card().to_string(), "1");
//! assert_eq!(next.state.current_player(), PlayerId::new(1));
//! assert!(!next.events.contains(&GameEvent::PlayerWon(PlayerId::new(0))));
//!
//! // A 2 cannot go on a 3; the input state is untouched either way.
//! assert!(game.play_card(&state, PlayerId::new(0), 1).is_err());
//! ```

pub mod core;
pub mod cards;
pub mod rules;
pub mod events;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    GameRng, GameRngState,
    LamaConfig, WinPolicy, ConfigError, MAX_DECK_SIZE, MAX_PLAYERS, MIN_PLAYERS,
    Action, ActionRecord,
    GameState, PublicView,
};

pub use crate::cards::{Card, CardParseError, Rank, RankRange};

pub use crate::rules::{GameError, GameResult, InvalidMove, RulesEngine, Transition};

pub use crate::events::GameEvent;

pub use crate::games::lama::{is_valid_play, new_game, LamaGame, LamaGameBuilder};
