//! Error taxonomy for machine construction and event dispatch.

use thiserror::Error;

/// Errors that can occur when constructing a state machine.
///
/// All of these indicate a configuration defect; none are recoverable by
/// retrying with the same inputs.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Rule table is empty. Register at least one rule")]
    NoRules,

    #[error("Initial state '{state}' has no rule registered in the table")]
    UnknownInitialState { state: String },
}

/// Errors that can occur while dispatching an event.
///
/// `InvalidTransition` is the only user-input-driven kind; the other two
/// point at a defect in rule-table construction and should not be caught
/// and retried. On any of these the machine's current state is unchanged
/// and the rule's effect has not run.
#[derive(Debug, Error)]
pub enum TransitionError {
    #[error("No rule registered for current state '{state}'")]
    UnknownState { state: String },

    #[error("Event {event} does not lead to a meaningful next state from '{from}'")]
    InvalidTransition { from: String, event: String },

    #[error("Transition from '{from}' on event {event} targets unregistered state '{to}'")]
    UnknownTarget {
        from: String,
        to: String,
        event: String,
    },
}
