//! Rules engine trait, transition results and errors.
//!
//! Games implement `RulesEngine` to define:
//! - Legal actions for each game state
//! - How actions turn one state into the next
//! - Win conditions
//!
//! Drivers (a UI, a simulator, tests) talk to a game only through this
//! trait and the values it returns.

pub mod engine;
pub mod error;

pub use engine::{GameResult, RulesEngine, Transition};
pub use error::{GameError, InvalidMove};
