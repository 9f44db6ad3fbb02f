//! Drag-distance acceleration tiers
//!
//! Farther drag means faster, larger steps: a velocity-free, purely
//! position-based acceleration curve. Each axis has its own static
//! table, ordered by ascending distance threshold.

use std::time::Duration;

use crate::types::Axis;

/// One acceleration rule: at or beyond `min_distance`, apply `step`
/// every `interval`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    /// Drag distance in pixels at which this tier starts applying
    pub min_distance: f32,
    /// Adjustment applied per tick
    pub step: f64,
    /// Repeat cadence while the gesture holds in this tier
    pub interval: Duration,
}

const fn tier(min_distance: f32, step: f64, interval_ms: u64) -> Tier {
    Tier {
        min_distance,
        step,
        interval: Duration::from_millis(interval_ms),
    }
}

/// Speed axis tiers. The lowest threshold equals the dead zone, so any
/// distance that survives dead-zone filtering resolves to a tier.
pub const SPEED_TIERS: [Tier; 4] = [
    tier(15.0, 0.1, 300),
    tier(50.0, 0.1, 100),
    tier(100.0, 0.5, 100),
    tier(180.0, 1.0, 80),
];

/// Volume axis tiers
pub const VOLUME_TIERS: [Tier; 3] = [
    tier(15.0, 0.02, 200),
    tier(50.0, 0.05, 100),
    tier(100.0, 0.1, 80),
];

/// Tier table for the given axis
pub fn tiers_for(axis: Axis) -> &'static [Tier] {
    match axis {
        Axis::Speed => &SPEED_TIERS,
        Axis::Volume => &VOLUME_TIERS,
    }
}

/// Select the highest tier whose threshold the distance reaches.
///
/// Scans from the largest threshold down; `None` below the lowest
/// threshold (unreachable in practice once the dead zone has filtered
/// smaller distances).
pub fn tier_for(distance: f32, tiers: &[Tier]) -> Option<&Tier> {
    tiers.iter().rev().find(|t| distance >= t.min_distance)
}
