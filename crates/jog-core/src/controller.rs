//! Per-surface overlay controller
//!
//! Glues the classifier, the adjustment engine, and the drag session
//! together behind the event-shaped API the widget layer speaks:
//! pointer down/move/up, capture loss, wheel, media change notices, and
//! a periodic poll. Every call returns the feedback events produced by
//! that transition.

use std::time::Instant;

use crate::classify::{classify, Classification, GestureSample};
use crate::engine::AdjustmentEngine;
use crate::feedback::FeedbackEvent;
use crate::session::DragSession;
use crate::tiers::{tier_for, tiers_for};
use crate::types::{Axis, Direction, PlaybackState, LABEL_RESET_DELAY};

/// Gesture controller for one overlay widget.
///
/// Owns the adjustable state and at most one drag session at a time.
/// All failure modes degrade to the idle state with an unchanged or
/// safely clamped [`PlaybackState`]; there are no fatal errors here.
#[derive(Debug, Clone, Default)]
pub struct OverlayController {
    engine: AdjustmentEngine,
    session: Option<DragSession>,
    /// Deadline for falling back to the speed label after a scroll
    label_reset_at: Option<Instant>,
}

impl OverlayController {
    pub fn new(state: PlaybackState) -> Self {
        Self {
            engine: AdjustmentEngine::new(state),
            session: None,
            label_reset_at: None,
        }
    }

    /// Current playback state
    pub fn state(&self) -> &PlaybackState {
        self.engine.state()
    }

    /// Whether a drag session is open
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Pointer-down with the primary button opens a drag session.
    ///
    /// Any session still open (a missed release) is force-closed first,
    /// without the click-reset branch.
    pub fn pointer_down(&mut self, x: f32, y: f32, primary: bool) -> Vec<FeedbackEvent> {
        if !primary {
            return Vec::new();
        }
        if self.session.is_some() {
            log::debug!("pointer_down with a session still open; force-closing");
        }
        // A new gesture supersedes any pending scroll fallback
        self.label_reset_at = None;
        self.session = Some(DragSession::new(x, y));
        Vec::new()
    }

    /// Pointer move: reclassify the gesture and (re)target the repeat
    /// tick. Ignored outside a session.
    pub fn pointer_move(&mut self, x: f32, y: f32, now: Instant) -> Vec<FeedbackEvent> {
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };

        let (dx, dy) = session.offset(x, y);
        session.note_movement(dx, dy);

        let mut events = Vec::new();
        match classify(GestureSample { dx, dy }) {
            Classification::DeadZone => {
                if session.tick().is_some() {
                    session.clear_tick();
                    events.push(FeedbackEvent::AxisIdle);
                }
            }
            Classification::Active {
                axis,
                direction,
                distance,
            } => {
                // The lowest tier threshold equals the dead zone, so a
                // classified gesture always resolves to a tier; treat a
                // miss like the dead zone anyway.
                let Some(tier) = tier_for(distance, tiers_for(axis)) else {
                    if session.tick().is_some() {
                        session.clear_tick();
                        events.push(FeedbackEvent::AxisIdle);
                    }
                    return events;
                };

                if session.retarget(axis, direction, tier, now) {
                    // New target: one immediate application, then the
                    // repeat cadence takes over
                    self.engine.apply_delta(axis, direction, tier.step);
                    events.push(FeedbackEvent::AxisActive { axis, direction });
                    events.push(FeedbackEvent::ValueChanged {
                        axis,
                        text: self.engine.label(axis),
                    });
                }
            }
        }
        events
    }

    /// Pointer release closes the session. A release without meaningful
    /// movement is the single-click action: reset speed to 1.0.
    pub fn pointer_up(&mut self) -> Vec<FeedbackEvent> {
        let Some(session) = self.session.take() else {
            return Vec::new();
        };
        self.label_reset_at = None;

        let mut events = Vec::new();
        if !session.did_drag() {
            self.engine.reset_speed();
            events.push(FeedbackEvent::ValueChanged {
                axis: Axis::Speed,
                text: self.engine.label(Axis::Speed),
            });
        }
        events.push(FeedbackEvent::AxisIdle);
        events
    }

    /// Capture loss force-closes the session exactly like a release,
    /// but never the click-reset branch: movement state is
    /// indeterminate, so no destructive action is taken.
    pub fn capture_lost(&mut self) -> Vec<FeedbackEvent> {
        if self.session.take().is_none() {
            return Vec::new();
        }
        self.label_reset_at = None;
        log::debug!("pointer capture lost; force-closing drag session");
        vec![FeedbackEvent::AxisIdle]
    }

    /// Wheel input: one fixed speed step, and re-arm the label-reset
    /// debounce. Scroll is speed-only by design; the speed axis stays
    /// highlighted until the fallback fires.
    pub fn wheel(&mut self, direction: Direction, now: Instant) -> Vec<FeedbackEvent> {
        self.engine.apply_scroll_delta(direction);
        self.label_reset_at = Some(now + LABEL_RESET_DELAY);
        vec![
            FeedbackEvent::AxisActive {
                axis: Axis::Speed,
                direction,
            },
            FeedbackEvent::ValueChanged {
                axis: Axis::Speed,
                text: self.engine.label(Axis::Speed),
            },
        ]
    }

    /// Reconcile a media change made by another party. Ignored while a
    /// drag is in progress (the drag's own writes would race the
    /// notification; the gesture wins).
    pub fn media_changed(&mut self, speed: f64, volume: f64, muted: bool) -> Vec<FeedbackEvent> {
        if self.session.is_some() {
            return Vec::new();
        }
        let before = self.engine.state().clone();
        self.engine.sync(speed, volume, muted);
        let after = self.engine.state();

        let mut events = Vec::new();
        if after.speed != before.speed {
            events.push(FeedbackEvent::ValueChanged {
                axis: Axis::Speed,
                text: after.speed_label(),
            });
        }
        if after.volume != before.volume {
            events.push(FeedbackEvent::ValueChanged {
                axis: Axis::Volume,
                text: after.volume_label(),
            });
        }
        events
    }

    /// Drive time-based behavior: due repeat ticks and the scroll-label
    /// debounce. Deadline-based, so a coarse poll cadence preserves the
    /// average adjustment rate.
    pub fn poll(&mut self, now: Instant) -> Vec<FeedbackEvent> {
        let mut events = Vec::new();

        if let Some(session) = self.session.as_mut() {
            for fire in session.take_due(now) {
                self.engine.apply_delta(fire.axis, fire.direction, fire.step);
                events.push(FeedbackEvent::ValueChanged {
                    axis: fire.axis,
                    text: self.engine.label(fire.axis),
                });
            }
        }

        // The scroll fallback is deferred while a drag is in progress;
        // the session owns the highlight and label until it closes
        if self.session.is_none() {
            if let Some(reset_at) = self.label_reset_at {
                if reset_at <= now {
                    self.label_reset_at = None;
                    events.push(FeedbackEvent::ValueChanged {
                        axis: Axis::Speed,
                        text: self.engine.label(Axis::Speed),
                    });
                    events.push(FeedbackEvent::AxisIdle);
                }
            }
        }

        events
    }
}
