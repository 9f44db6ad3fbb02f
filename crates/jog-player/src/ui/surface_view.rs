//! Mock media surface rendering
//!
//! Draws one surface as a canvas (clip area, playhead clock, progress
//! bar) and stacks the gesture overlay in its corner when attached.

use iced::alignment::{Horizontal, Vertical};
use iced::widget::canvas::{Canvas, Frame, Geometry, Program, Text};
use iced::widget::{button, column, container, text};
use iced::{mouse, Element, Fill, Length, Point, Rectangle, Size, Theme};

use jog_core::SurfaceId;
use jog_widgets::overlay::{overlay_canvas, OverlayVisual};
use jog_widgets::theme::{LABEL_COLOR, PROGRESS_COLOR, SURFACE_BACKGROUND};

use crate::media::MediaState;
use super::app::Message;

/// Height of the mock clip area in pixels
pub const SURFACE_HEIGHT: f32 = 280.0;

/// Canvas program rendering one mock surface (no interaction; the
/// overlay layer owns all input)
pub struct SurfaceCanvas {
    pub index: usize,
    pub state: MediaState,
}

impl<Message> Program<Message> for SurfaceCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let width = bounds.width;
        let height = bounds.height;

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), SURFACE_BACKGROUND);

        frame.fill_text(Text {
            content: format!("Clip {}", self.index + 1),
            position: Point::new(12.0, 12.0),
            size: 16.0.into(),
            color: iced::Color::from_rgb(0.6, 0.6, 0.65),
            align_x: Horizontal::Left.into(),
            align_y: Vertical::Top.into(),
            ..Text::default()
        });

        // Rate and volume caption, with the mute state folded in
        let volume_text = if self.state.muted {
            "muted".to_string()
        } else {
            format!("{}%", (self.state.volume * 100.0).round())
        };
        frame.fill_text(Text {
            content: format!("{:.1}x \u{00B7} {}", self.state.rate, volume_text),
            position: Point::new(width - 12.0, 12.0),
            size: 16.0.into(),
            color: iced::Color::from_rgb(0.6, 0.6, 0.65),
            align_x: Horizontal::Right.into(),
            align_y: Vertical::Top.into(),
            ..Text::default()
        });

        // Playhead clock in the clip center
        let secs = self.state.position as u64;
        frame.fill_text(Text {
            content: format!("{}:{:02}", secs / 60, secs % 60),
            position: Point::new(width / 2.0, height / 2.0),
            size: 36.0.into(),
            color: LABEL_COLOR,
            align_x: Horizontal::Center.into(),
            align_y: Vertical::Center.into(),
            ..Text::default()
        });

        // Progress bar along the bottom edge
        let fraction = (self.state.position / self.state.duration).clamp(0.0, 1.0) as f32;
        frame.fill_rectangle(
            Point::new(0.0, height - 6.0),
            Size::new(width, 6.0),
            iced::Color::from_rgb(0.2, 0.2, 0.22),
        );
        frame.fill_rectangle(
            Point::new(0.0, height - 6.0),
            Size::new(width * fraction, 6.0),
            PROGRESS_COLOR,
        );

        vec![frame.into_geometry()]
    }
}

/// One surface cell: the clip canvas, the overlay layer when attached,
/// and the attach/detach control.
pub fn surface_view<'a>(
    id: SurfaceId,
    index: usize,
    state: MediaState,
    visual: Option<&'a OverlayVisual>,
) -> Element<'a, Message> {
    let clip = Canvas::new(SurfaceCanvas { index, state })
        .width(Fill)
        .height(Length::Fixed(SURFACE_HEIGHT));

    let surface: Element<'a, Message> = match visual {
        Some(visual) => {
            let overlay = container(
                overlay_canvas(visual, move |event| Message::Overlay(id, event)),
            )
            .width(Fill)
            .height(Length::Fixed(SURFACE_HEIGHT))
            .align_x(Horizontal::Right)
            .align_y(Vertical::Bottom)
            .padding(12);

            iced::widget::stack![clip, overlay].into()
        }
        None => clip.into(),
    };

    let toggle_label = if visual.is_some() {
        "Detach overlay"
    } else {
        "Attach overlay"
    };
    let toggle = button(text(toggle_label).size(13)).on_press(Message::ToggleOverlay(id));

    column![surface, toggle].spacing(8).into()
}
