//! Core engine types: players, state, actions, RNG, configuration.
//!
//! These are the building blocks every transition works on. The rules
//! themselves live in `games::lama`.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use config::{ConfigError, LamaConfig, WinPolicy, MAX_DECK_SIZE, MAX_PLAYERS, MIN_PLAYERS};
pub use action::{Action, ActionRecord};
pub use state::{GameState, PublicView};
