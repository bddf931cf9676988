//! Builder for constructing state machines.

use crate::core::State;
use crate::machine::{BuildError, Rule, RuleTable, StateMachine};

/// Builder for constructing state machines with a fluent API.
///
/// # Example
///
/// ```
/// use tenframe::builder::MachineBuilder;
/// use tenframe::machine::Rule;
/// use tenframe::state_enum;
///
/// state_enum! {
///     enum Light {
///         Red,
///         Green,
///     }
/// }
///
/// let machine = MachineBuilder::<Light, (), ()>::new()
///     .initial(Light::Red)
///     .rule(Light::Red, Rule::absorbing(Light::Red))
///     .rule(Light::Green, Rule::absorbing(Light::Green))
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.current_state(), &Light::Red);
/// ```
pub struct MachineBuilder<S: State, E, C> {
    initial: Option<S>,
    rules: RuleTable<S, E, C>,
}

impl<S: State, E, C> MachineBuilder<S, E, C> {
    /// Create a new builder.
    pub fn new() -> Self {
        MachineBuilder {
            initial: None,
            rules: RuleTable::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Register the rule for a state.
    pub fn rule(mut self, state: S, rule: Rule<S, E, C>) -> Self {
        self.rules.insert(state, rule);
        self
    }

    /// Build the state machine.
    ///
    /// Fails when the initial state is missing, no rules were registered,
    /// or the initial state has no rule.
    pub fn build(self) -> Result<StateMachine<S, E, C>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.rules.is_empty() {
            return Err(BuildError::NoRules);
        }

        StateMachine::new(self.rules, initial)
    }
}

impl<S: State, E, C> Default for MachineBuilder<S, E, C> {
    fn default() -> Self {
        Self::new()
    }
}
