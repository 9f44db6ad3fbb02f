//! Shared types and constants for the jog gesture core

use std::fmt;
use std::time::Duration;

/// Minimum playback speed multiplier
pub const MIN_SPEED: f64 = 0.1;

/// Maximum playback speed multiplier
pub const MAX_SPEED: f64 = 4.0;

/// Speed restored by a non-drag click on the overlay
pub const DEFAULT_SPEED: f64 = 1.0;

/// Minimum volume (silent)
pub const MIN_VOLUME: f64 = 0.0;

/// Maximum volume (full)
pub const MAX_VOLUME: f64 = 1.0;

/// Fixed speed step for wheel input (independent of drag tiers)
pub const SCROLL_SPEED_STEP: f64 = 0.1;

/// Minimum drag distance in pixels before any adjustment is applied.
///
/// Displacements below this threshold classify as a dead-zone gesture:
/// no adjustment, running ticks stop, and the widget snaps back to
/// neutral. Matches the lowest tier threshold so every distance that
/// survives the dead zone resolves to a tier.
pub const DEAD_ZONE: f32 = 15.0;

/// Movement in pixels past which a press counts as a drag, not a click.
///
/// Checked per axis on every move; once set, the flag never clears for
/// the lifetime of the session. A release without this flag is the
/// single-click action (speed reset).
pub const DRAG_THRESHOLD: f32 = 5.0;

/// Delay before the label falls back to the default (speed) view after
/// the last wheel input. Re-armed on every scroll tick.
pub const LABEL_RESET_DELAY: Duration = Duration::from_millis(600);

/// Which adjustable quantity a gesture targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Playback speed (horizontal drag)
    Speed,
    /// Volume (vertical drag)
    Volume,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Speed => write!(f, "speed"),
            Self::Volume => write!(f, "volume"),
        }
    }
}

/// Adjustment direction along an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Increase (drag right for speed, drag up for volume)
    Up,
    /// Decrease
    Down,
}

impl Direction {
    /// Signed multiplier for delta application
    pub fn sign(self) -> f64 {
        match self {
            Self::Up => 1.0,
            Self::Down => -1.0,
        }
    }
}

/// Round to the nearest 0.1.
///
/// Speed values are kept at one-decimal granularity to avoid
/// floating-point drift across repeated steps and to match the
/// displayed precision.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Adjustable playback state owned by one overlay controller
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    /// Playback rate multiplier, `MIN_SPEED..=MAX_SPEED`, one decimal
    pub speed: f64,
    /// Volume, `0.0..=1.0`
    pub volume: f64,
    /// Whether the media element is muted
    pub muted: bool,
}

impl PlaybackState {
    /// State for a freshly attached surface
    pub fn new(speed: f64, volume: f64, muted: bool) -> Self {
        Self {
            speed: round1(speed.clamp(MIN_SPEED, MAX_SPEED)),
            volume: volume.clamp(MIN_VOLUME, MAX_VOLUME),
            muted,
        }
    }

    /// Display label for the speed view, e.g. `"1.5x"`
    pub fn speed_label(&self) -> String {
        format!("{:.1}x", round1(self.speed))
    }

    /// Display label for the volume view, e.g. `"75%"`
    pub fn volume_label(&self) -> String {
        format!("{}%", (self.volume * 100.0).round() as u32)
    }

    /// Display label for the given axis
    pub fn label(&self, axis: Axis) -> String {
        match axis {
            Axis::Speed => self.speed_label(),
            Axis::Volume => self.volume_label(),
        }
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            volume: MAX_VOLUME,
            muted: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round1_stability() {
        let mut value = 1.0;
        for _ in 0..10 {
            value = round1(value + 0.1);
        }
        assert_eq!(value, 2.0);
    }

    #[test]
    fn test_new_clamps_and_rounds() {
        let state = PlaybackState::new(5.23, 1.4, false);
        assert_eq!(state.speed, MAX_SPEED);
        assert_eq!(state.volume, MAX_VOLUME);

        let state = PlaybackState::new(0.04, -0.2, true);
        assert_eq!(state.speed, MIN_SPEED);
        assert_eq!(state.volume, MIN_VOLUME);
        assert!(state.muted);
    }

    #[test]
    fn test_labels() {
        let state = PlaybackState::new(1.5, 0.75, false);
        assert_eq!(state.speed_label(), "1.5x");
        assert_eq!(state.volume_label(), "75%");
        assert_eq!(state.label(Axis::Speed), "1.5x");
        assert_eq!(state.label(Axis::Volume), "75%");
    }

    #[test]
    fn test_direction_sign() {
        assert_eq!(Direction::Up.sign(), 1.0);
        assert_eq!(Direction::Down.sign(), -1.0);
    }
}
