//! Adjustment engine: owns the playback state and applies clamped,
//! rounded deltas on behalf of gestures, scroll input, and resets.

use crate::types::{
    Axis, Direction, PlaybackState, round1, DEFAULT_SPEED, MAX_SPEED, MAX_VOLUME, MIN_SPEED,
    MIN_VOLUME, SCROLL_SPEED_STEP,
};

/// Applies adjustments to a [`PlaybackState`].
///
/// All mutations clamp silently; pushing past a bound simply stops
/// changing the value. Speed stays at one-decimal granularity.
#[derive(Debug, Clone, Default)]
pub struct AdjustmentEngine {
    state: PlaybackState,
}

impl AdjustmentEngine {
    pub fn new(state: PlaybackState) -> Self {
        Self { state }
    }

    /// Current playback state
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Display label for the given axis
    pub fn label(&self, axis: Axis) -> String {
        self.state.label(axis)
    }

    /// Apply one tick's worth of adjustment on an axis.
    ///
    /// Volume adjustments unmute: a user reaching for the volume wants
    /// to hear the result.
    pub fn apply_delta(&mut self, axis: Axis, direction: Direction, step: f64) {
        match axis {
            Axis::Speed => {
                self.state.speed =
                    round1((self.state.speed + direction.sign() * step).clamp(MIN_SPEED, MAX_SPEED));
            }
            Axis::Volume => {
                self.state.volume =
                    (self.state.volume + direction.sign() * step).clamp(MIN_VOLUME, MAX_VOLUME);
                self.state.muted = false;
            }
        }
    }

    /// Reset speed to exactly 1.0 (the single-click action)
    pub fn reset_speed(&mut self) {
        self.state.speed = DEFAULT_SPEED;
    }

    /// Wheel input: speed only, fixed 0.1 step, independent of drag tiers
    pub fn apply_scroll_delta(&mut self, direction: Direction) {
        self.apply_delta(Axis::Speed, direction, SCROLL_SPEED_STEP);
    }

    /// Adopt externally observed media state (rate/volume changed by
    /// another party). Values are clamped and rounded on the way in so
    /// the invariants hold regardless of the source.
    pub fn sync(&mut self, speed: f64, volume: f64, muted: bool) {
        self.state = PlaybackState::new(speed, volume, muted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamping_speed() {
        let mut engine = AdjustmentEngine::default();
        for _ in 0..100 {
            engine.apply_delta(Axis::Speed, Direction::Up, 1.0);
        }
        assert_eq!(engine.state().speed, MAX_SPEED);
        for _ in 0..100 {
            engine.apply_delta(Axis::Speed, Direction::Down, 1.0);
        }
        assert_eq!(engine.state().speed, MIN_SPEED);
    }

    #[test]
    fn test_clamping_volume() {
        let mut engine = AdjustmentEngine::default();
        for _ in 0..200 {
            engine.apply_delta(Axis::Volume, Direction::Up, 0.1);
        }
        assert_eq!(engine.state().volume, MAX_VOLUME);
        for _ in 0..200 {
            engine.apply_delta(Axis::Volume, Direction::Down, 0.1);
        }
        assert_eq!(engine.state().volume, MIN_VOLUME);
    }

    #[test]
    fn test_rounding_stability() {
        // Ten +0.1 steps from 1.0 must land exactly on 2.0 (no drift)
        let mut engine = AdjustmentEngine::default();
        for _ in 0..10 {
            engine.apply_delta(Axis::Speed, Direction::Up, 0.1);
        }
        assert_eq!(engine.state().speed, 2.0);
    }

    #[test]
    fn test_volume_unmutes() {
        let mut engine = AdjustmentEngine::new(PlaybackState::new(1.0, 0.5, true));
        engine.apply_delta(Axis::Volume, Direction::Down, 0.02);
        assert!(!engine.state().muted);
    }

    #[test]
    fn test_speed_does_not_unmute() {
        let mut engine = AdjustmentEngine::new(PlaybackState::new(1.0, 0.5, true));
        engine.apply_delta(Axis::Speed, Direction::Up, 0.1);
        assert!(engine.state().muted);
    }

    #[test]
    fn test_reset_speed_exact() {
        let mut engine = AdjustmentEngine::new(PlaybackState::new(3.7, 0.5, false));
        engine.reset_speed();
        assert_eq!(engine.state().speed, 1.0);
    }

    #[test]
    fn test_scroll_delta() {
        let mut engine = AdjustmentEngine::default();
        engine.apply_scroll_delta(Direction::Up);
        assert_eq!(engine.state().speed, 1.1);
        engine.apply_scroll_delta(Direction::Down);
        engine.apply_scroll_delta(Direction::Down);
        assert_eq!(engine.state().speed, 0.9);
    }

    #[test]
    fn test_sync_clamps() {
        let mut engine = AdjustmentEngine::default();
        engine.sync(9.0, 2.0, true);
        assert_eq!(engine.state().speed, MAX_SPEED);
        assert_eq!(engine.state().volume, MAX_VOLUME);
        assert!(engine.state().muted);
    }
}
