//! Mutable scoring context threaded through rule effects.

/// Running score and frame bookkeeping, plus the fixed game configuration.
///
/// The scorecard is the explicit context object that rule effects mutate;
/// it carries no knowledge of the state machine driving it, which keeps
/// the effects testable in isolation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scorecard {
    score: u32,
    partial_frame: u32,
    completed_frames: u32,
    pins_per_frame: u32,
    frames_per_game: u32,
}

impl Scorecard {
    /// Fresh scorecard for a game with the given configuration.
    pub fn new(pins_per_frame: u32, frames_per_game: u32) -> Self {
        Scorecard {
            score: 0,
            partial_frame: 0,
            completed_frames: 0,
            pins_per_frame,
            frames_per_game,
        }
    }

    /// Total score so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of completed frames. Monotone, never exceeds the configured
    /// frame count.
    pub fn completed_frames(&self) -> u32 {
        self.completed_frames
    }

    /// Pins knocked down by the first delivery of an unresolved frame.
    pub fn partial_frame(&self) -> u32 {
        self.partial_frame
    }

    /// Pins standing at the start of every frame.
    pub fn pins_per_frame(&self) -> u32 {
        self.pins_per_frame
    }

    /// Whether the last frame has been completed.
    pub fn is_over(&self) -> bool {
        self.completed_frames == self.frames_per_game
    }

    /// Add a delivery to the score under the given bonus multiplier.
    pub(crate) fn credit(&mut self, pins: u32, multiplier: u32) {
        self.score += pins * multiplier;
    }

    /// Record the first delivery of a frame that left pins standing.
    pub(crate) fn open_frame(&mut self, pins: u32) {
        self.partial_frame = pins;
    }

    /// Close out the current frame.
    pub(crate) fn close_frame(&mut self) {
        self.partial_frame = 0;
        self.completed_frames += 1;
    }
}
