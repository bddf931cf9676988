//! The bowling game facade over the engine.

use crate::bowling::rules::rule_table;
use crate::bowling::scorecard::Scorecard;
use crate::bowling::state::FrameState;
use crate::machine::{StateMachine, TransitionError};

/// Scores a game of ten-pin bowling by feeding each delivery through the
/// state machine engine.
///
/// # Example
///
/// ```
/// use tenframe::bowling::BowlingGame;
///
/// let mut game = BowlingGame::new();
/// game.roll(7)?;
/// game.roll(3)?;
/// game.roll(4)?;
/// assert_eq!(game.score(), 18);
/// # Ok::<(), tenframe::machine::TransitionError>(())
/// ```
pub struct BowlingGame {
    machine: StateMachine<FrameState, u32, Scorecard>,
    card: Scorecard,
}

impl BowlingGame {
    /// Standard game: ten pins per frame, ten frames.
    pub fn new() -> Self {
        Self::with_config(10, 10)
    }

    /// Game with a custom pin and frame count.
    pub fn with_config(pins_per_frame: u32, frames_per_game: u32) -> Self {
        let machine = StateMachine::new(rule_table(), FrameState::FirstDelivery)
            .expect("rule table registers every frame state");

        BowlingGame {
            machine,
            card: Scorecard::new(pins_per_frame, frames_per_game),
        }
    }

    /// Feed one delivery into the game.
    ///
    /// Fails with [`TransitionError::InvalidTransition`] when `pins` is
    /// inconsistent with the pins still standing in the current frame; the
    /// game is left unchanged. Deliveries after the last frame are
    /// accepted and ignored.
    pub fn roll(&mut self, pins: u32) -> Result<(), TransitionError> {
        self.machine.on(&mut self.card, pins)
    }

    /// Total score so far.
    pub fn score(&self) -> u32 {
        self.card.score()
    }

    /// Number of completed frames.
    pub fn completed_frames(&self) -> u32 {
        self.card.completed_frames()
    }

    /// Whether the game has been locked into its terminal state.
    pub fn is_finished(&self) -> bool {
        self.machine.is_final()
    }
}

impl Default for BowlingGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roll_all(game: &mut BowlingGame, deliveries: &[u32]) {
        for &pins in deliveries {
            game.roll(pins).unwrap();
        }
    }

    #[test]
    fn scores_a_plain_delivery() {
        let mut game = BowlingGame::new();
        game.roll(5).unwrap();
        assert_eq!(game.score(), 5);
    }

    #[test]
    fn spare_doubles_the_next_delivery() {
        let mut game = BowlingGame::new();
        roll_all(&mut game, &[7, 3, 4]);
        assert_eq!(game.score(), 18);
    }

    #[test]
    fn strike_doubles_the_next_frame() {
        let mut game = BowlingGame::new();
        roll_all(&mut game, &[10, 3, 6, 3]);
        assert_eq!(game.score(), 31);
    }

    #[test]
    fn spare_then_strike_then_open_frame() {
        let mut game = BowlingGame::new();
        roll_all(&mut game, &[7, 3, 10, 2, 3]);
        // Frames: (7 + 3 + 10) + (10 + 2 + 3) + (2 + 3)
        assert_eq!(game.score(), 40);
    }

    #[test]
    fn strike_then_spare_then_open_frame() {
        let mut game = BowlingGame::new();
        roll_all(&mut game, &[10, 3, 7, 4, 3]);
        // Frames: (10 + 3 + 7) + (3 + 7 + 4) + (4 + 3)
        assert_eq!(game.score(), 41);
    }

    #[test]
    fn three_consecutive_strikes_score_triple() {
        let mut game = BowlingGame::new();
        roll_all(&mut game, &[10, 10, 10, 5, 2, 4, 3]);
        // Frames: (10+10+10) + (10+10+5) + (10+5+2) + (5+2) + (4+3)
        assert_eq!(game.score(), 86);
    }

    #[test]
    fn a_strike_completes_its_frame_in_one_delivery() {
        let mut game = BowlingGame::new();
        roll_all(&mut game, &[1, 2]);
        assert_eq!(game.completed_frames(), 1);

        game.roll(10).unwrap();
        assert_eq!(game.completed_frames(), 2);

        roll_all(&mut game, &[3, 4]);
        assert_eq!(game.completed_frames(), 3);
    }

    #[test]
    fn deliveries_after_the_last_frame_are_ignored() {
        let mut game = BowlingGame::with_config(10, 3);
        roll_all(&mut game, &[1, 2, 3, 4, 5, 4]);

        assert_eq!(game.score(), 19);
        assert_eq!(game.completed_frames(), 3);
        assert!(game.is_finished());

        game.roll(3).unwrap();
        assert_eq!(game.score(), 19);
        assert_eq!(game.completed_frames(), 3);
    }

    #[test]
    fn last_frame_strike_also_locks_the_game() {
        let mut game = BowlingGame::with_config(10, 2);
        roll_all(&mut game, &[1, 2, 10]);

        assert!(game.is_finished());
        game.roll(10).unwrap();
        assert_eq!(game.completed_frames(), 2);
    }

    #[test]
    fn delivery_exceeding_standing_pins_is_rejected() {
        let mut game = BowlingGame::new();
        let err = game.roll(11).unwrap_err();
        assert!(matches!(err, TransitionError::InvalidTransition { .. }));
    }

    #[test]
    fn frame_total_exceeding_standing_pins_is_rejected() {
        let mut game = BowlingGame::new();
        game.roll(1).unwrap();
        assert_eq!(game.score(), 1);

        let err = game.roll(10).unwrap_err();
        assert!(matches!(err, TransitionError::InvalidTransition { .. }));
    }

    #[test]
    fn absurd_second_delivery_is_rejected_without_wrapping() {
        let mut game = BowlingGame::new();
        game.roll(1).unwrap();

        let err = game.roll(u32::MAX).unwrap_err();
        assert!(matches!(err, TransitionError::InvalidTransition { .. }));
        assert_eq!(game.score(), 1);
        assert_eq!(game.completed_frames(), 0);
    }

    #[test]
    fn rejected_delivery_leaves_the_game_unchanged() {
        let mut game = BowlingGame::new();
        roll_all(&mut game, &[10, 4]);
        let score = game.score();
        let frames = game.completed_frames();

        assert!(game.roll(9).is_err());

        assert_eq!(game.score(), score);
        assert_eq!(game.completed_frames(), frames);

        // The frame can still be resolved normally afterwards.
        game.roll(6).unwrap();
        assert_eq!(game.completed_frames(), frames + 1);
    }
}
