//! Table-driven state machine engine.
//!
//! A machine owns a read-only [`RuleTable`] and a single mutable
//! current-state pointer. Dispatching an event looks up the rule for the
//! current state, resolves and validates the next state, commits it, and
//! only then runs the rule's effect against the application context.

mod engine;
mod error;
mod rule;

pub use engine::StateMachine;
pub use error::{BuildError, TransitionError};
pub use rule::{EffectFn, Rule, RuleTable, TransitionFn};
