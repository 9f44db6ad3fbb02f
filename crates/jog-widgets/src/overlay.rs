//! Overlay canvas: gesture capture and visual feedback
//!
//! The canvas `Program` translates raw mouse events into [`OverlayEvent`]s
//! and publishes them through a callback closure; it never interprets
//! gestures itself. Interpretation lives in `jog-core`, rendering state
//! in [`OverlayVisual`].

use iced::alignment::{Horizontal, Vertical};
use iced::mouse::ScrollDelta;
use iced::widget::canvas::{self, Canvas, Event, Frame, Geometry, Path, Program, Stroke, Text};
use iced::{mouse, Length, Point, Rectangle, Theme};

use jog_core::{Axis, Direction, FeedbackEvent};

use crate::theme::{
    ARROW_COLOR, LABEL_COLOR, OVERLAY_BACKGROUND, OVERLAY_SIZE, RING_IDLE, RING_RADIUS,
    RING_SPEED, RING_VOLUME,
};

/// Raw pointer event observed on the overlay, in window coordinates.
///
/// Window coordinates (not canvas-local) so move offsets stay coherent
/// when a drag wanders off the widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayEvent {
    Pressed { x: f32, y: f32 },
    Moved { x: f32, y: f32 },
    Released,
    /// The pointer vanished mid-drag (left the window)
    CaptureLost,
    Scrolled(Direction),
}

/// Canvas state tracking whether a drag is being captured
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlayInteraction {
    pub dragging: bool,
}

/// Rendering state for one overlay, driven by feedback events
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayVisual {
    /// Text shown in the overlay center
    pub label: String,
    /// Highlighted axis while a gesture is active
    pub active: Option<(Axis, Direction)>,
    /// Whether the hint ring and direction arrows are drawn
    pub show_hints: bool,
}

impl OverlayVisual {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            active: None,
            show_hints: true,
        }
    }

    /// Fold one feedback event into the visual state
    pub fn apply(&mut self, event: &FeedbackEvent) {
        match event {
            FeedbackEvent::AxisActive { axis, direction } => {
                self.active = Some((*axis, *direction));
            }
            FeedbackEvent::AxisIdle => {
                self.active = None;
            }
            FeedbackEvent::ValueChanged { text, .. } => {
                self.label = text.clone();
            }
        }
    }
}

impl Default for OverlayVisual {
    fn default() -> Self {
        Self::new("1.0x")
    }
}

/// Canvas program for the gesture overlay.
///
/// Takes a callback closure `on_event` invoked for every overlay event;
/// the caller routes these into its controller and feeds the resulting
/// feedback back into the [`OverlayVisual`].
pub struct OverlayCanvas<'a, Message, F>
where
    F: Fn(OverlayEvent) -> Message,
{
    pub visual: &'a OverlayVisual,
    pub on_event: F,
}

impl<'a, Message, F> Program<Message> for OverlayCanvas<'a, Message, F>
where
    Message: Clone,
    F: Fn(OverlayEvent) -> Message,
{
    type State = OverlayInteraction;

    fn update(
        &self,
        interaction: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                // Presses start only on the overlay itself
                if cursor.position_in(bounds).is_some() {
                    if let Some(position) = cursor.position() {
                        interaction.dragging = true;
                        return Some(canvas::Action::publish((self.on_event)(
                            OverlayEvent::Pressed {
                                x: position.x,
                                y: position.y,
                            },
                        )));
                    }
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                // Once dragging, follow the pointer anywhere in the window
                if interaction.dragging {
                    if let Some(position) = cursor.position() {
                        return Some(canvas::Action::publish((self.on_event)(
                            OverlayEvent::Moved {
                                x: position.x,
                                y: position.y,
                            },
                        )));
                    }
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if interaction.dragging {
                    interaction.dragging = false;
                    return Some(canvas::Action::publish((self.on_event)(
                        OverlayEvent::Released,
                    )));
                }
            }
            Event::Mouse(mouse::Event::CursorLeft) => {
                if interaction.dragging {
                    interaction.dragging = false;
                    return Some(canvas::Action::publish((self.on_event)(
                        OverlayEvent::CaptureLost,
                    )));
                }
            }
            Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                if cursor.position_in(bounds).is_some() {
                    let y = match delta {
                        ScrollDelta::Lines { y, .. } => *y,
                        ScrollDelta::Pixels { y, .. } => *y,
                    };
                    if y != 0.0 {
                        let direction = if y > 0.0 {
                            Direction::Up
                        } else {
                            Direction::Down
                        };
                        return Some(canvas::Action::publish((self.on_event)(
                            OverlayEvent::Scrolled(direction),
                        )));
                    }
                }
            }
            _ => {}
        }

        None
    }

    fn mouse_interaction(
        &self,
        interaction: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if interaction.dragging {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }

    fn draw(
        &self,
        _interaction: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), OVERLAY_BACKGROUND);

        if self.visual.show_hints {
            let ring_color = match self.visual.active {
                Some((Axis::Speed, _)) => RING_SPEED,
                Some((Axis::Volume, _)) => RING_VOLUME,
                None => RING_IDLE,
            };
            frame.stroke(
                &Path::circle(center, RING_RADIUS),
                Stroke::default().with_color(ring_color).with_width(2.5),
            );

            draw_hint_arrows(&mut frame, center, self.visual.active);
        }

        frame.fill_text(Text {
            content: self.visual.label.clone(),
            position: center,
            size: 22.0.into(),
            color: LABEL_COLOR,
            align_x: Horizontal::Center.into(),
            align_y: Vertical::Center.into(),
            ..Text::default()
        });

        vec![frame.into_geometry()]
    }
}

/// Four direction hints around the ring; the active gesture's arrow is
/// drawn in the axis color.
fn draw_hint_arrows(frame: &mut Frame, center: Point, active: Option<(Axis, Direction)>) {
    let offset = RING_RADIUS + 8.0;
    let half = 5.0;

    // (position, apex direction, axis, gesture direction)
    let arrows = [
        (
            Point::new(center.x + offset, center.y),
            Point::new(half, 0.0),
            Axis::Speed,
            Direction::Up,
        ),
        (
            Point::new(center.x - offset, center.y),
            Point::new(-half, 0.0),
            Axis::Speed,
            Direction::Down,
        ),
        (
            Point::new(center.x, center.y - offset),
            Point::new(0.0, -half),
            Axis::Volume,
            Direction::Up,
        ),
        (
            Point::new(center.x, center.y + offset),
            Point::new(0.0, half),
            Axis::Volume,
            Direction::Down,
        ),
    ];

    for (at, apex, axis, direction) in arrows {
        let color = match active {
            Some((a, d)) if a == axis && d == direction => match axis {
                Axis::Speed => RING_SPEED,
                Axis::Volume => RING_VOLUME,
            },
            _ => ARROW_COLOR,
        };
        let triangle = Path::new(|builder| {
            builder.move_to(Point::new(at.x + apex.x, at.y + apex.y));
            // Base perpendicular to the apex direction
            builder.line_to(Point::new(at.x - apex.y, at.y + apex.x));
            builder.line_to(Point::new(at.x + apex.y, at.y - apex.x));
            builder.close();
        });
        frame.fill(&triangle, color);
    }
}

/// Build the overlay as a fixed-size canvas element
pub fn overlay_canvas<'a, Message>(
    visual: &'a OverlayVisual,
    on_event: impl Fn(OverlayEvent) -> Message + 'a,
) -> iced::Element<'a, Message>
where
    Message: Clone + 'a,
{
    Canvas::new(OverlayCanvas { visual, on_event })
        .width(Length::Fixed(OVERLAY_SIZE))
        .height(Length::Fixed(OVERLAY_SIZE))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visual_follows_feedback() {
        let mut visual = OverlayVisual::default();
        assert_eq!(visual.label, "1.0x");

        visual.apply(&FeedbackEvent::AxisActive {
            axis: Axis::Volume,
            direction: Direction::Up,
        });
        assert_eq!(visual.active, Some((Axis::Volume, Direction::Up)));

        visual.apply(&FeedbackEvent::ValueChanged {
            axis: Axis::Volume,
            text: "80%".to_string(),
        });
        assert_eq!(visual.label, "80%");

        visual.apply(&FeedbackEvent::AxisIdle);
        assert_eq!(visual.active, None);
        // The last label survives going idle
        assert_eq!(visual.label, "80%");
    }
}
