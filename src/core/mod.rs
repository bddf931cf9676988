//! Core vocabulary of the state machine:
//! - State identity via the `State` trait
//! - Guard predicates over the application context
//!
//! Everything in this module is pure. Mutation lives in rule effects and
//! in the engine's current-state pointer.

mod guard;
mod state;

pub use guard::Guard;
pub use state::State;
