//! Rules: the (transition, effect) pair registered for each state.

use crate::core::{Guard, State};
use std::collections::HashMap;

/// Pure transition part of a rule.
///
/// Returns `None` when the event is not meaningful for the state the rule
/// is registered under.
pub type TransitionFn<S, E, C> = Box<dyn Fn(&C, &E) -> Option<S> + Send + Sync>;

/// Effect part of a rule.
///
/// Runs only after the transition has been validated and committed, and
/// may mutate the application context. Effects are infallible by type;
/// a panicking effect propagates to the dispatcher's caller uncaught.
pub type EffectFn<E, C> = Box<dyn Fn(&mut C, &E) + Send + Sync>;

/// Behaviour of one state: a transition function, an effect, and ordered
/// lists of pre-transition guards and post-effect hooks.
///
/// Guards and hooks let cross-cutting behaviour live outside the
/// transition and effect functions, with an evaluation order the engine
/// makes explicit:
///
/// 1. pre-transition guards, in declaration order; the first whose
///    condition holds reroutes the machine without consulting the
///    transition function
/// 2. the transition function
/// 3. the effect
/// 4. post-effect hooks, in declaration order; the first whose condition
///    holds forces the machine into its target state with reset semantics
pub struct Rule<S, E, C> {
    reroutes: Vec<(Guard<C>, S)>,
    transition: TransitionFn<S, E, C>,
    effect: EffectFn<E, C>,
    forces: Vec<(Guard<C>, S)>,
}

impl<S, E, C> Rule<S, E, C> {
    /// Create a rule from its transition and effect functions.
    pub fn new<T, F>(transition: T, effect: F) -> Self
    where
        T: Fn(&C, &E) -> Option<S> + Send + Sync + 'static,
        F: Fn(&mut C, &E) + Send + Sync + 'static,
    {
        Rule {
            reroutes: Vec::new(),
            transition: Box::new(transition),
            effect: Box::new(effect),
            forces: Vec::new(),
        }
    }

    /// Identity rule: every event transitions back to `state`, the effect
    /// is a no-op. This is what makes a terminal state truly absorbing.
    pub fn absorbing(state: S) -> Self
    where
        S: Clone + Send + Sync + 'static,
    {
        Rule::new(move |_: &C, _: &E| Some(state.clone()), |_: &mut C, _: &E| {})
    }

    /// Append a pre-transition guard: when `condition` holds, skip the
    /// transition function and route straight to `target`. The target still
    /// goes through rule-table validation.
    pub fn reroute_when(mut self, condition: Guard<C>, target: S) -> Self {
        self.reroutes.push((condition, target));
        self
    }

    /// Append a post-effect hook: after the effect has run, if `condition`
    /// holds the machine's current state is overwritten with `target`,
    /// bypassing table validation (reset semantics).
    pub fn force_when(mut self, condition: Guard<C>, target: S) -> Self {
        self.forces.push((condition, target));
        self
    }

    /// Target of the first pre-transition guard whose condition holds.
    pub fn reroute_target(&self, ctx: &C) -> Option<&S> {
        self.reroutes
            .iter()
            .find(|(guard, _)| guard.check(ctx))
            .map(|(_, target)| target)
    }

    /// Evaluate the transition function (pure).
    pub fn next_state(&self, ctx: &C, event: &E) -> Option<S> {
        (self.transition)(ctx, event)
    }

    /// Run the effect against the context.
    pub fn run_effect(&self, ctx: &mut C, event: &E) {
        (self.effect)(ctx, event)
    }

    /// Target of the first post-effect hook whose condition holds.
    pub fn forced_target(&self, ctx: &C) -> Option<&S> {
        self.forces
            .iter()
            .find(|(guard, _)| guard.check(ctx))
            .map(|(_, target)| target)
    }
}

/// Mapping from state to rule, fixed once the machine is constructed.
pub struct RuleTable<S: State, E, C> {
    rules: HashMap<S, Rule<S, E, C>>,
}

impl<S: State, E, C> RuleTable<S, E, C> {
    /// Create an empty table.
    pub fn new() -> Self {
        RuleTable {
            rules: HashMap::new(),
        }
    }

    /// Register the rule for a state, replacing any previous one.
    pub fn insert(&mut self, state: S, rule: Rule<S, E, C>) {
        self.rules.insert(state, rule);
    }

    /// Look up the rule for a state.
    pub fn get(&self, state: &S) -> Option<&Rule<S, E, C>> {
        self.rules.get(state)
    }

    /// Check whether a state has a rule registered.
    pub fn contains(&self, state: &S) -> bool {
        self.rules.contains_key(state)
    }

    /// Number of states with a rule registered.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check whether the table has no rules at all.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<S: State, E, C> Default for RuleTable<S, E, C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        On,
        Off,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::On => "On",
                Self::Off => "Off",
            }
        }
    }

    struct Ctx {
        toggles: u32,
    }

    fn toggle_rule(to: TestState) -> Rule<TestState, (), Ctx> {
        Rule::new(
            move |_: &Ctx, _: &()| Some(to.clone()),
            |ctx: &mut Ctx, _: &()| ctx.toggles += 1,
        )
    }

    #[test]
    fn next_state_delegates_to_transition_fn() {
        let rule = toggle_rule(TestState::Off);
        let ctx = Ctx { toggles: 0 };

        assert_eq!(rule.next_state(&ctx, &()), Some(TestState::Off));
    }

    #[test]
    fn run_effect_mutates_context() {
        let rule = toggle_rule(TestState::Off);
        let mut ctx = Ctx { toggles: 0 };

        rule.run_effect(&mut ctx, &());
        assert_eq!(ctx.toggles, 1);
    }

    #[test]
    fn absorbing_rule_loops_with_no_effect() {
        let rule: Rule<TestState, (), Ctx> = Rule::absorbing(TestState::Off);
        let mut ctx = Ctx { toggles: 0 };

        assert_eq!(rule.next_state(&ctx, &()), Some(TestState::Off));
        rule.run_effect(&mut ctx, &());
        assert_eq!(ctx.toggles, 0);
    }

    #[test]
    fn first_firing_reroute_wins() {
        let rule = toggle_rule(TestState::Off)
            .reroute_when(Guard::new(|ctx: &Ctx| ctx.toggles >= 1), TestState::On)
            .reroute_when(Guard::new(|_: &Ctx| true), TestState::Off);

        let quiet = Ctx { toggles: 0 };
        assert_eq!(rule.reroute_target(&quiet), Some(&TestState::Off));

        let busy = Ctx { toggles: 5 };
        assert_eq!(rule.reroute_target(&busy), Some(&TestState::On));
    }

    #[test]
    fn forced_target_requires_a_firing_hook() {
        let rule = toggle_rule(TestState::Off)
            .force_when(Guard::new(|ctx: &Ctx| ctx.toggles >= 2), TestState::On);

        assert_eq!(rule.forced_target(&Ctx { toggles: 1 }), None);
        assert_eq!(
            rule.forced_target(&Ctx { toggles: 2 }),
            Some(&TestState::On)
        );
    }

    #[test]
    fn table_tracks_registered_states() {
        let mut table: RuleTable<TestState, (), Ctx> = RuleTable::new();
        assert!(table.is_empty());

        table.insert(TestState::On, toggle_rule(TestState::Off));

        assert_eq!(table.len(), 1);
        assert!(table.contains(&TestState::On));
        assert!(!table.contains(&TestState::Off));
        assert!(table.get(&TestState::On).is_some());
    }
}
