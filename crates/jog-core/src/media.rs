//! Abstraction over the controllable playback target

use crate::types::PlaybackState;

/// A media element whose rate, volume, and mute flag can be read and
/// written. The overlay machinery drives targets only through this
/// trait.
pub trait MediaElement {
    fn rate(&self) -> f64;
    fn set_rate(&mut self, rate: f64);
    fn volume(&self) -> f64;
    fn set_volume(&mut self, volume: f64);
    fn muted(&self) -> bool;
    fn set_muted(&mut self, muted: bool);
}

/// Push a playback state onto a media element, writing only the fields
/// that differ so well-behaved targets do not see redundant sets.
pub fn apply_to(state: &PlaybackState, element: &mut dyn MediaElement) {
    if element.rate() != state.speed {
        element.set_rate(state.speed);
    }
    if element.volume() != state.volume {
        element.set_volume(state.volume);
    }
    if element.muted() != state.muted {
        element.set_muted(state.muted);
    }
}
