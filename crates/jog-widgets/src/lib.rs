//! Overlay widgets for jog media applications
//!
//! This crate provides the iced side of the gesture overlay: a canvas
//! `Program` that translates raw mouse events into the event vocabulary
//! `jog-core` consumes, a visual model driven by feedback events, and a
//! subscription helper for bridging sync channels into iced.
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! - **State structs**: Pure data (`OverlayVisual`)
//! - **Canvas Programs**: Event-to-callback translation and rendering
//! - **Callback closures**: Widgets publish the caller's `Message` type

pub mod overlay;
pub mod subscription;
pub mod theme;

pub use overlay::{overlay_canvas, OverlayCanvas, OverlayEvent, OverlayInteraction, OverlayVisual};
pub use subscription::channel_subscription;
pub use theme::{OVERLAY_SIZE, RING_RADIUS};
