//! Frame states: the scoring-multiplier context between deliveries.

use crate::state_enum;

state_enum! {
    /// Where the game stands within the current frame, and which bonus
    /// multiplier the next delivery earns.
    pub enum FrameState {
        /// First delivery of a frame with no bonus pending.
        FirstDelivery,
        /// Second delivery of an open frame.
        SecondDelivery,
        /// First delivery after a spare: counts double.
        FirstAfterSpare,
        /// First delivery after a strike: counts double.
        FirstAfterStrike,
        /// First delivery after two consecutive strikes: counts triple.
        FirstAfterDouble,
        /// Second delivery of a frame that follows a strike: counts double.
        SecondAfterStrike,
        /// Absorbing state once the last frame is complete.
        Finished,
    }
    final: [Finished]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;

    #[test]
    fn only_finished_is_final() {
        assert!(FrameState::Finished.is_final());
        assert!(!FrameState::FirstDelivery.is_final());
        assert!(!FrameState::SecondAfterStrike.is_final());
    }

    #[test]
    fn names_match_variants() {
        assert_eq!(FrameState::FirstAfterSpare.name(), "FirstAfterSpare");
        assert_eq!(FrameState::Finished.name(), "Finished");
    }

    #[test]
    fn frame_state_round_trips_through_serde() {
        let state = FrameState::FirstAfterDouble;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: FrameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
