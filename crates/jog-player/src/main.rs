//! Jog Player - gesture overlays on mock media surfaces
//!
//! Demo host for the jog overlay: a handful of mock clips, each with a
//! drag/scroll overlay that adjusts its playback rate and volume. It:
//! 1. Starts the mock media engine in a background thread
//! 2. Launches the iced GUI application
//! 3. Bridges media change notices into the update loop

mod config;
mod media;
mod ui;

use iced::{Size, Task};

use media::MediaEngine;
use ui::{JogApp, Message};

fn main() -> iced::Result {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("jog-player starting up");

    let config_path = config::default_config_path();
    let config = config::load_config(&config_path);

    let engine = MediaEngine::start(&config.media);

    // Wrap resources in cells so the boot closure can be Fn (required by iced)
    // The boot function is only called once, but iced requires Fn for API consistency
    let engine_cell = std::cell::RefCell::new(Some(engine));
    let config_cell = std::cell::RefCell::new(Some(config));

    iced::application(
        move || {
            let engine = engine_cell
                .borrow_mut()
                .take()
                .expect("media engine already taken");
            let config = config_cell.borrow_mut().take().expect("config already taken");
            let app = JogApp::new(engine, config, config_path.clone());
            (app, Task::none())
        },
        update,
        view,
    )
    .subscription(subscription)
    .theme(theme)
    .title("Jog Player")
    .window_size(Size::new(960.0, 620.0))
    .run()
}

/// Update function for iced
fn update(app: &mut JogApp, message: Message) -> Task<Message> {
    app.update(message)
}

/// View function for iced
fn view(app: &JogApp) -> iced::Element<'_, Message> {
    app.view()
}

/// Subscription function for iced
fn subscription(app: &JogApp) -> iced::Subscription<Message> {
    app.subscription()
}

/// Theme function for iced
fn theme(app: &JogApp) -> iced::Theme {
    app.theme()
}
