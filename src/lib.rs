//! Tenframe: a table-driven event state machine, and a bowling scorer
//! built on top of it.
//!
//! The engine holds a fixed rule table and a single mutable current-state
//! pointer. For each event it looks up the rule for the current state,
//! resolves the next state, validates it against the table, commits it,
//! and only then runs the rule's effect against an explicit mutable
//! application context.
//!
//! # Core Concepts
//!
//! - **State**: opaque, comparable rule-table keys via the [`State`] trait
//! - **Rule**: the (transition, effect) pair registered for one state,
//!   optionally carrying pre-transition guards and post-effect hooks
//! - **Context**: the mutable value rule effects operate on, passed
//!   explicitly into every dispatch
//!
//! # Example
//!
//! ```rust
//! use tenframe::{MachineBuilder, Rule};
//! use tenframe::state_enum;
//!
//! state_enum! {
//!     enum Door {
//!         Open,
//!         Closed,
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Log {
//!     toggles: u32,
//! }
//!
//! let mut machine = MachineBuilder::new()
//!     .initial(Door::Closed)
//!     .rule(
//!         Door::Closed,
//!         Rule::new(
//!             |_: &Log, _: &()| Some(Door::Open),
//!             |log: &mut Log, _: &()| log.toggles += 1,
//!         ),
//!     )
//!     .rule(
//!         Door::Open,
//!         Rule::new(
//!             |_: &Log, _: &()| Some(Door::Closed),
//!             |log: &mut Log, _: &()| log.toggles += 1,
//!         ),
//!     )
//!     .build()?;
//!
//! let mut log = Log::default();
//! machine.on(&mut log, ())?;
//!
//! assert_eq!(machine.current_state(), &Door::Open);
//! assert_eq!(log.toggles, 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The [`bowling`] module is the worked consumer: it scores ten-pin
//! bowling with spare and strike bonuses expressed purely as machine
//! state.
//!
//! ```rust
//! use tenframe::BowlingGame;
//!
//! let mut game = BowlingGame::new();
//! for pins in [10, 3, 6, 3] {
//!     game.roll(pins)?;
//! }
//! assert_eq!(game.score(), 31);
//! # Ok::<(), tenframe::TransitionError>(())
//! ```

pub mod bowling;
pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::bowling::BowlingGame;
pub use crate::builder::MachineBuilder;
pub use crate::core::{Guard, State};
pub use crate::machine::{BuildError, Rule, RuleTable, StateMachine, TransitionError};
