//! Feedback events exposed to the rendering layer
//!
//! Events are emitted synchronously after each state transition and are
//! fire-and-forget: the core never waits on the renderer, and animation
//! (easing, tweening) is entirely the collaborator's concern.

use crate::types::{Axis, Direction};

/// A discrete visual-feedback event
#[derive(Debug, Clone, PartialEq)]
pub enum FeedbackEvent {
    /// A gesture is actively adjusting an axis; highlight it
    AxisActive { axis: Axis, direction: Direction },
    /// No axis is active; return to the neutral state (snap back)
    AxisIdle,
    /// A value changed; show this label text for the axis
    ValueChanged { axis: Axis, text: String },
}
