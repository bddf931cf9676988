//! Core State trait for rule-table keys.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// States are opaque, comparable tokens used as rule-table keys. They carry
/// no ordering semantics and no behaviour beyond identity and a couple of
/// pure inspection methods.
///
/// # Required Traits
///
/// - `Clone`: states are cloned when transitions resolve
/// - `Eq` + `Hash`: states key the rule table
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be serializable
///
/// # Example
///
/// ```rust
/// use tenframe::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Phase {
///     Idle,
///     Running,
///     Done,
/// }
///
/// impl State for Phase {
///     fn name(&self) -> &str {
///         match self {
///             Self::Idle => "Idle",
///             Self::Running => "Running",
///             Self::Done => "Done",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Done)
///     }
/// }
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display and error messages.
    fn name(&self) -> &str;

    /// Check if this is a final (absorbing) state.
    ///
    /// Final states represent completion points where the machine accepts
    /// further events without effect.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
