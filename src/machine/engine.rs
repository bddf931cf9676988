//! The engine: dispatches events against the rule table.

use crate::core::State;
use crate::machine::error::{BuildError, TransitionError};
use crate::machine::rule::RuleTable;
use std::fmt::Debug;
use std::sync::Arc;

/// Table-driven state machine.
///
/// Generic over the state token `S`, the event type `E`, and the mutable
/// application context `C` that rule effects operate on. The rule table is
/// read-only after construction; the current-state pointer is the only
/// mutable field.
///
/// Single-threaded and synchronous. [`StateMachine::on`] is not reentrant;
/// a machine shared across threads needs external synchronization.
pub struct StateMachine<S: State, E, C> {
    rules: Arc<RuleTable<S, E, C>>,
    current: S,
}

impl<S: State, E, C> StateMachine<S, E, C> {
    /// Create a machine over `rules`, starting in `initial`.
    ///
    /// Fails immediately when the initial state has no rule registered;
    /// this validation is never deferred to the first dispatch.
    pub fn new(rules: RuleTable<S, E, C>, initial: S) -> Result<Self, BuildError> {
        if !rules.contains(&initial) {
            return Err(BuildError::UnknownInitialState {
                state: initial.name().to_string(),
            });
        }

        Ok(StateMachine {
            rules: Arc::new(rules),
            current: initial,
        })
    }

    /// Get the current state (pure).
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Check if the machine is in a final state (pure).
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    /// Overwrite the current state without consulting the rule table.
    ///
    /// Escape hatch for forcing absorbing behaviour. The target is not
    /// validated; if it has no rule registered, the next call to
    /// [`StateMachine::on`] fails with [`TransitionError::UnknownState`].
    pub fn reset_current_state(&mut self, state: S) {
        self.current = state;
    }

    /// Dispatch one event against the rule for the current state.
    ///
    /// Evaluation order is fixed:
    ///
    /// 1. rule lookup for the current state; a miss (possible only after an
    ///    unvalidated reset) is [`TransitionError::UnknownState`]
    /// 2. the rule's pre-transition guards, then its transition function;
    ///    no meaningful next state is [`TransitionError::InvalidTransition`]
    /// 3. table validation of the target; an unregistered target is
    ///    [`TransitionError::UnknownTarget`]
    /// 4. commit the new state, run the effect, then evaluate the rule's
    ///    post-effect hooks
    ///
    /// The state is committed before the effect runs, so anything observing
    /// the machine mid-effect sees the state it transitioned into. On any
    /// error the current state is unchanged and the effect has not run.
    pub fn on(&mut self, ctx: &mut C, event: E) -> Result<(), TransitionError>
    where
        E: Debug,
    {
        let rules = Arc::clone(&self.rules);
        let rule = rules
            .get(&self.current)
            .ok_or_else(|| TransitionError::UnknownState {
                state: self.current.name().to_string(),
            })?;

        let next = match rule.reroute_target(ctx) {
            Some(target) => target.clone(),
            None => {
                rule.next_state(ctx, &event)
                    .ok_or_else(|| TransitionError::InvalidTransition {
                        from: self.current.name().to_string(),
                        event: format!("{event:?}"),
                    })?
            }
        };

        if !rules.contains(&next) {
            return Err(TransitionError::UnknownTarget {
                from: self.current.name().to_string(),
                to: next.name().to_string(),
                event: format!("{event:?}"),
            });
        }

        // Commit before the effect runs.
        self.current = next;
        rule.run_effect(ctx, &event);

        if let Some(target) = rule.forced_target(ctx) {
            let target = target.clone();
            self.reset_current_state(target);
        }

        Ok(())
    }
}
