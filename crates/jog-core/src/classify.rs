//! Gesture classification: axis disambiguation and dead-zone filtering

use crate::types::{Axis, Direction, DEAD_ZONE};

/// Raw cumulative pointer offset from the gesture origin.
///
/// Ephemeral: recomputed on every pointer move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub dx: f32,
    pub dy: f32,
}

/// Result of classifying a gesture sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classification {
    /// Displacement below the dead zone: no adjustment, snap back
    DeadZone,
    /// An actionable gesture on one axis
    Active {
        axis: Axis,
        direction: Direction,
        distance: f32,
    },
}

/// Classify a cumulative pointer offset.
///
/// Horizontal movement targets speed, vertical targets volume; the
/// dominant component wins, with ties going to speed. Distance is the
/// dominant component's magnitude. Volume direction is inverted
/// relative to screen coordinates: dragging up (negative dy) raises
/// the volume.
pub fn classify(sample: GestureSample) -> Classification {
    let abs_dx = sample.dx.abs();
    let abs_dy = sample.dy.abs();
    let distance = abs_dx.max(abs_dy);

    if distance < DEAD_ZONE {
        return Classification::DeadZone;
    }

    if abs_dx >= abs_dy {
        let direction = if sample.dx > 0.0 {
            Direction::Up
        } else {
            Direction::Down
        };
        Classification::Active {
            axis: Axis::Speed,
            direction,
            distance,
        }
    } else {
        let direction = if sample.dy < 0.0 {
            Direction::Up
        } else {
            Direction::Down
        };
        Classification::Active {
            axis: Axis::Volume,
            direction,
            distance,
        }
    }
}
