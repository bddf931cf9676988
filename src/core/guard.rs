//! Guard predicates over the application context.
//!
//! Guards are pure boolean functions evaluated by the engine around a
//! rule's transition and effect. They let cross-cutting conditions (such
//! as "the game is over") live in one named place instead of being woven
//! through every transition closure.

/// Pure predicate over the application context.
///
/// Guards gate rule behaviour: a rule's pre-transition guards can reroute
/// the machine before its transition function is consulted, and its
/// post-effect hooks can force the machine into another state afterwards.
///
/// # Example
///
/// ```rust
/// use tenframe::core::Guard;
///
/// struct Counters {
///     done: u32,
///     limit: u32,
/// }
///
/// let at_limit = Guard::new(|c: &Counters| c.done == c.limit);
///
/// assert!(!at_limit.check(&Counters { done: 2, limit: 3 }));
/// assert!(at_limit.check(&Counters { done: 3, limit: 3 }));
/// ```
pub struct Guard<C> {
    predicate: Box<dyn Fn(&C) -> bool + Send + Sync>,
}

impl<C> Guard<C> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and free of side effects.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Evaluate the predicate against the context.
    pub fn check(&self, ctx: &C) -> bool {
        (self.predicate)(ctx)
    }
}
