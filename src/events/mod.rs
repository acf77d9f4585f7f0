//! Events emitted by transitions.
//!
//! Transitions report what happened as a list of [`GameEvent`]s alongside
//! the new state. Callers (a UI, a simulator, a test) react to them; the
//! engine never calls out.

pub mod event;

pub use event::GameEvent;
