//! Jog Core - gesture interpretation for the playback overlay
//!
//! This crate contains the pure, deterministic core of the jog overlay:
//! mapping a continuous pointer drag into discretized, rate-limited
//! speed/volume adjustments. It has no UI dependencies; all timing is
//! clock-injected (callers pass `Instant`), so every state transition is
//! directly testable.
//!
//! Rendering, animation, and media playback are collaborators: the widget
//! layer feeds pointer/wheel/media events into an [`OverlayController`]
//! and receives [`feedback::FeedbackEvent`]s back.

pub mod classify;
pub mod controller;
pub mod engine;
pub mod feedback;
pub mod media;
pub mod registry;
pub mod session;
pub mod tiers;
pub mod types;

pub use controller::OverlayController;
pub use feedback::FeedbackEvent;
pub use media::{apply_to, MediaElement};
pub use registry::{OverlayRegistry, RegistryError, SurfaceId};
pub use types::*;
