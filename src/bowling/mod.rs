//! Ten-pin bowling scorer built on the state machine engine.
//!
//! Frame bonuses (spares, strikes, consecutive strikes) are modelled
//! entirely as state: each [`FrameState`] encodes the scoring multiplier
//! carried over from previous frames, so there is no lookahead and no
//! score revision.

mod game;
mod rules;
mod scorecard;
mod state;

pub use game::BowlingGame;
pub use scorecard::Scorecard;
pub use state::FrameState;
