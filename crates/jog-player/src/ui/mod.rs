//! UI module for Jog Player
//!
//! Built with iced using a message-passing architecture; background
//! media state flows in through a channel subscription.

pub mod app;
pub mod surface_view;

pub use app::{JogApp, Message};
