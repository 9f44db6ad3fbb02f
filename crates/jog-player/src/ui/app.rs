//! Main iced application for Jog Player
//!
//! Routes overlay events into the per-surface controllers, feedback
//! events into the overlay visuals, and controller state out to the
//! mock media surfaces.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Instant;

use iced::time;
use iced::widget::{button, column, container, row, text, Space};
use iced::{Center, Element, Fill, Subscription, Task, Theme};

use jog_core::{
    apply_to, FeedbackEvent, OverlayRegistry, PlaybackState, SurfaceId,
};
use jog_widgets::overlay::{OverlayEvent, OverlayVisual};
use jog_widgets::channel_subscription;

use crate::config::{save_config, PlayerConfig};
use crate::media::{MediaEngine, MediaNotice};
use super::surface_view::surface_view;

/// UI poll cadence; repeat ticks are deadline-based so this only needs
/// to be comfortably finer than the fastest tier interval (80ms)
const POLL_INTERVAL: std::time::Duration = std::time::Duration::from_millis(16);

/// Messages that can be sent to the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Periodic driver for repeat ticks and debounces
    Poll,
    /// Raw pointer event from a surface's overlay
    Overlay(SurfaceId, OverlayEvent),
    /// A surface's media state changed
    Media(MediaNotice),
    /// Attach or detach the overlay on a surface
    ToggleOverlay(SurfaceId),
    /// Toggle the hint ring on all overlays
    ToggleHintRing,
}

/// Application state
pub struct JogApp {
    media: MediaEngine,
    registry: OverlayRegistry,
    /// Rendering state per attached overlay
    visuals: HashMap<SurfaceId, OverlayVisual>,
    config: PlayerConfig,
    config_path: PathBuf,
    status: String,
}

impl JogApp {
    /// Create the application with an overlay attached to every surface
    pub fn new(media: MediaEngine, config: PlayerConfig, config_path: PathBuf) -> Self {
        let mut app = Self {
            media,
            registry: OverlayRegistry::new(),
            visuals: HashMap::new(),
            config,
            config_path,
            status: "ready".to_string(),
        };

        let ids: Vec<SurfaceId> = app.media.handles().iter().map(|h| h.id()).collect();
        for id in ids {
            app.attach_overlay(id);
        }
        app
    }

    /// Update application state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Poll => {
                let now = Instant::now();
                let batches: Vec<(SurfaceId, Vec<FeedbackEvent>)> = self
                    .registry
                    .iter_mut()
                    .map(|(id, controller)| (id, controller.poll(now)))
                    .collect();
                for (id, events) in batches {
                    self.handle_feedback(id, events);
                }
            }

            Message::Overlay(id, event) => {
                let now = Instant::now();
                let Some(controller) = self.registry.get_mut(id) else {
                    return Task::none();
                };
                let events = match event {
                    OverlayEvent::Pressed { x, y } => controller.pointer_down(x, y, true),
                    OverlayEvent::Moved { x, y } => controller.pointer_move(x, y, now),
                    OverlayEvent::Released => controller.pointer_up(),
                    OverlayEvent::CaptureLost => controller.capture_lost(),
                    OverlayEvent::Scrolled(direction) => controller.wheel(direction, now),
                };
                self.handle_feedback(id, events);
            }

            Message::Media(notice) => {
                // Reconcile the surface's actual state; echoes of our
                // own writes produce no feedback
                let Some(state) = self.media.handle(notice.surface).map(|h| h.snapshot())
                else {
                    return Task::none();
                };
                let Some(controller) = self.registry.get_mut(notice.surface) else {
                    return Task::none();
                };
                let events = controller.media_changed(state.rate, state.volume, state.muted);
                self.handle_feedback(notice.surface, events);
            }

            Message::ToggleOverlay(id) => {
                if self.registry.contains(id) {
                    match self.registry.detach(id) {
                        Ok(_) => {
                            self.visuals.remove(&id);
                            self.status = format!("{id}: overlay detached");
                        }
                        Err(e) => log::warn!("detach failed: {e}"),
                    }
                } else {
                    self.attach_overlay(id);
                    self.status = format!("{id}: overlay attached");
                }
            }

            Message::ToggleHintRing => {
                self.config.ui.show_hint_ring = !self.config.ui.show_hint_ring;
                for visual in self.visuals.values_mut() {
                    visual.show_hints = self.config.ui.show_hint_ring;
                }
                if let Err(e) = save_config(&self.config, &self.config_path) {
                    log::warn!("failed to save config: {e:#}");
                }
            }
        }
        Task::none()
    }

    /// Attach an overlay seeded from the surface's current media state
    fn attach_overlay(&mut self, id: SurfaceId) {
        let Some(state) = self.media.handle(id).map(|h| h.snapshot()) else {
            log::warn!("cannot attach overlay: {id} has no media surface");
            return;
        };
        let playback = PlaybackState::new(state.rate, state.volume, state.muted);
        let label = playback.speed_label();
        match self.registry.attach(id, playback) {
            Ok(()) => {
                let mut visual = OverlayVisual::new(label);
                visual.show_hints = self.config.ui.show_hint_ring;
                self.visuals.insert(id, visual);
            }
            Err(e) => log::warn!("attach failed: {e}"),
        }
    }

    /// Fold a batch of feedback events into the overlay's visual state
    /// and push the controller's state onto the media surface.
    fn handle_feedback(&mut self, id: SurfaceId, events: Vec<FeedbackEvent>) {
        if events.is_empty() {
            return;
        }

        if let Some(visual) = self.visuals.get_mut(&id) {
            for event in &events {
                visual.apply(event);
            }
        }

        if let (Some(controller), Some(handle)) =
            (self.registry.get(id), self.media.handle_mut(id))
        {
            apply_to(controller.state(), handle);
        }

        let last_change = events.iter().rev().find_map(|e| match e {
            FeedbackEvent::ValueChanged { axis, text } => Some((axis, text)),
            _ => None,
        });
        if let Some((axis, text)) = last_change {
            self.status = format!("{id}: {axis} {text}");
        }
    }

    /// Subscribe to the poll timer and media change notices
    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            time::every(POLL_INTERVAL).map(|_| Message::Poll),
            channel_subscription(self.media.notice_receiver()).map(Message::Media),
        ])
    }

    /// Build the view
    pub fn view(&self) -> Element<'_, Message> {
        let header = self.view_header();

        let surfaces = row(self.media.handles().iter().enumerate().map(|(index, handle)| {
            let id = handle.id();
            surface_view(id, index, handle.snapshot(), self.visuals.get(&id))
        }))
        .spacing(10);

        let status_bar = container(text(&self.status).size(12)).padding(5);

        let content = column![header, surfaces, status_bar].spacing(10).padding(10);

        container(content).width(Fill).height(Fill).into()
    }

    fn view_header(&self) -> Element<'_, Message> {
        let title = text("JOG PLAYER").size(24);

        let hint_label = if self.config.ui.show_hint_ring {
            "Hints: on"
        } else {
            "Hints: off"
        };
        let hint_toggle = button(text(hint_label).size(13)).on_press(Message::ToggleHintRing);

        let overlay_count = text(format!("{} overlays", self.registry.len())).size(12);

        row![title, Space::new().width(Fill), overlay_count, hint_toggle]
            .spacing(20)
            .align_y(Center)
            .padding(10)
            .into()
    }

    /// Get the theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}
