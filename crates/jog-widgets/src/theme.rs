//! Shared theme constants for jog UI components

use iced::Color;

/// Overlay canvas edge length in pixels (square hit area)
pub const OVERLAY_SIZE: f32 = 120.0;

/// Radius of the hint ring drawn around the overlay center
pub const RING_RADIUS: f32 = 44.0;

/// Neutral overlay background
pub const OVERLAY_BACKGROUND: Color = Color::from_rgba(0.08, 0.08, 0.1, 0.85);

/// Hint ring in its idle state
pub const RING_IDLE: Color = Color::from_rgba(0.6, 0.6, 0.65, 0.5);

/// Hint ring while a speed gesture is active
pub const RING_SPEED: Color = Color::from_rgb(1.0, 0.6, 0.0);

/// Hint ring while a volume gesture is active
pub const RING_VOLUME: Color = Color::from_rgb(0.0, 0.8, 0.8);

/// Direction hint arrows
pub const ARROW_COLOR: Color = Color::from_rgba(0.8, 0.8, 0.85, 0.7);

/// Value label text
pub const LABEL_COLOR: Color = Color::from_rgb(0.95, 0.95, 0.95);

/// Mock video surface background
pub const SURFACE_BACKGROUND: Color = Color::from_rgb(0.1, 0.1, 0.12);

/// Progress bar fill on the mock surface
pub const PROGRESS_COLOR: Color = Color::from_rgb(0.2, 0.8, 0.4);
