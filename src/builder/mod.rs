//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder and the `state_enum!` macro for
//! creating machines with minimal boilerplate while keeping construction
//! validation in one place.

pub mod machine;
pub mod macros;

pub use machine::MachineBuilder;
