//! Drag session: the bounded lifetime of one pointer-down-to-release
//! interaction, including the explicit repeat-tick timer value.

use std::time::Instant;

use crate::tiers::Tier;
use crate::types::{Axis, Direction, DRAG_THRESHOLD};

/// The repeat timer for the currently targeted axis/direction.
///
/// An explicit value owned by the session rather than a shared timer
/// handle mutated from callbacks: starting a new tick always replaces
/// this whole value, so at most one timer exists per session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveTick {
    pub axis: Axis,
    pub direction: Direction,
    pub step: f64,
    pub interval: std::time::Duration,
    /// Deadline of the next repeat application
    next_fire: Instant,
}

/// One pending tick application
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickFire {
    pub axis: Axis,
    pub direction: Direction,
    pub step: f64,
}

/// State for a single pointer interaction, created on pointer-down and
/// destroyed on pointer-up/cancel/capture-loss.
#[derive(Debug, Clone)]
pub struct DragSession {
    origin_x: f32,
    origin_y: f32,
    did_drag: bool,
    tick: Option<ActiveTick>,
}

impl DragSession {
    /// Open a session at the pointer-down position
    pub fn new(origin_x: f32, origin_y: f32) -> Self {
        Self {
            origin_x,
            origin_y,
            did_drag: false,
            tick: None,
        }
    }

    /// Cumulative offset of the given pointer position from the origin
    pub fn offset(&self, x: f32, y: f32) -> (f32, f32) {
        (x - self.origin_x, y - self.origin_y)
    }

    /// Whether movement ever exceeded the click threshold.
    ///
    /// Disambiguates click from drag at release; once set it stays set.
    pub fn did_drag(&self) -> bool {
        self.did_drag
    }

    /// Record a move's displacement for click-vs-drag disambiguation
    pub fn note_movement(&mut self, dx: f32, dy: f32) {
        if dx.abs() > DRAG_THRESHOLD || dy.abs() > DRAG_THRESHOLD {
            self.did_drag = true;
        }
    }

    /// The currently running repeat tick, if any
    pub fn tick(&self) -> Option<&ActiveTick> {
        self.tick.as_ref()
    }

    /// Stop any running repeat tick
    pub fn clear_tick(&mut self) {
        self.tick = None;
    }

    /// Point the repeat tick at an axis/direction with the given tier.
    ///
    /// Returns `true` when this started (or restarted) the tick — the
    /// caller must apply one immediate delta. A tick already running on
    /// the same axis/direction adopts the tier's step and interval in
    /// place: the cadence is preserved, except that a shorter interval
    /// may pull the pending deadline earlier. Deadlines are never
    /// pushed later by a tier change.
    pub fn retarget(
        &mut self,
        axis: Axis,
        direction: Direction,
        tier: &Tier,
        now: Instant,
    ) -> bool {
        match self.tick.as_mut() {
            Some(tick) if tick.axis == axis && tick.direction == direction => {
                tick.step = tier.step;
                if tick.interval != tier.interval {
                    tick.interval = tier.interval;
                    tick.next_fire = tick.next_fire.min(now + tier.interval);
                }
                false
            }
            _ => {
                self.tick = Some(ActiveTick {
                    axis,
                    direction,
                    step: tier.step,
                    interval: tier.interval,
                    next_fire: now + tier.interval,
                });
                true
            }
        }
    }

    /// Collect all tick applications due at `now`, advancing the
    /// deadline by whole intervals (no carry-over drift).
    pub fn take_due(&mut self, now: Instant) -> Vec<TickFire> {
        let mut fires = Vec::new();
        if let Some(tick) = self.tick.as_mut() {
            while tick.next_fire <= now {
                fires.push(TickFire {
                    axis: tick.axis,
                    direction: tick.direction,
                    step: tick.step,
                });
                tick.next_fire += tick.interval;
            }
        }
        fires
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiers::{tier_for, SPEED_TIERS, VOLUME_TIERS};
    use std::time::Duration;

    #[test]
    fn test_click_threshold() {
        let mut session = DragSession::new(100.0, 100.0);
        session.note_movement(3.0, -3.0);
        assert!(!session.did_drag());
        session.note_movement(0.0, 6.0);
        assert!(session.did_drag());
        // Flag never clears
        session.note_movement(0.0, 0.0);
        assert!(session.did_drag());
    }

    #[test]
    fn test_retarget_starts_once() {
        let now = Instant::now();
        let mut session = DragSession::new(0.0, 0.0);
        let tier = tier_for(60.0, &SPEED_TIERS).unwrap();

        assert!(session.retarget(Axis::Speed, Direction::Up, tier, now));
        // Same target again: no restart
        assert!(!session.retarget(Axis::Speed, Direction::Up, tier, now));
        assert!(session.tick().is_some());
    }

    #[test]
    fn test_single_active_tick() {
        let now = Instant::now();
        let mut session = DragSession::new(0.0, 0.0);
        let speed_tier = tier_for(60.0, &SPEED_TIERS).unwrap();
        let volume_tier = tier_for(60.0, &VOLUME_TIERS).unwrap();

        assert!(session.retarget(Axis::Speed, Direction::Up, speed_tier, now));
        assert!(session.retarget(Axis::Volume, Direction::Down, volume_tier, now));
        let tick = session.tick().unwrap();
        assert_eq!(tick.axis, Axis::Volume);
        assert_eq!(tick.direction, Direction::Down);
    }

    #[test]
    fn test_direction_change_restarts() {
        let now = Instant::now();
        let mut session = DragSession::new(0.0, 0.0);
        let tier = tier_for(60.0, &SPEED_TIERS).unwrap();

        assert!(session.retarget(Axis::Speed, Direction::Up, tier, now));
        assert!(session.retarget(Axis::Speed, Direction::Down, tier, now));
    }

    #[test]
    fn test_tier_upgrade_in_place() {
        let now = Instant::now();
        let mut session = DragSession::new(0.0, 0.0);
        let slow = tier_for(20.0, &SPEED_TIERS).unwrap(); // 0.1 / 300ms
        let fast = tier_for(200.0, &SPEED_TIERS).unwrap(); // 1.0 / 80ms

        assert!(session.retarget(Axis::Speed, Direction::Up, slow, now));
        assert!(!session.retarget(Axis::Speed, Direction::Up, fast, now));
        let tick = session.tick().unwrap();
        assert_eq!(tick.step, 1.0);
        assert_eq!(tick.interval, Duration::from_millis(80));
        // Shorter interval pulled the deadline earlier than the
        // original 300ms arming
        assert!(session.take_due(now + Duration::from_millis(90)).len() >= 1);
    }

    #[test]
    fn test_take_due_cadence() {
        let now = Instant::now();
        let mut session = DragSession::new(0.0, 0.0);
        let tier = tier_for(60.0, &SPEED_TIERS).unwrap(); // 100ms

        session.retarget(Axis::Speed, Direction::Up, tier, now);
        assert!(session.take_due(now + Duration::from_millis(50)).is_empty());
        assert_eq!(session.take_due(now + Duration::from_millis(100)).len(), 1);
        // A late poll catches up on missed intervals
        assert_eq!(session.take_due(now + Duration::from_millis(310)).len(), 2);
    }

    #[test]
    fn test_clear_tick() {
        let now = Instant::now();
        let mut session = DragSession::new(0.0, 0.0);
        let tier = tier_for(60.0, &SPEED_TIERS).unwrap();

        session.retarget(Axis::Speed, Direction::Up, tier, now);
        session.clear_tick();
        assert!(session.tick().is_none());
        assert!(session
            .take_due(now + Duration::from_secs(10))
            .is_empty());
    }

    #[test]
    fn test_offset() {
        let session = DragSession::new(100.0, 50.0);
        assert_eq!(session.offset(130.0, 40.0), (30.0, -10.0));
    }
}
