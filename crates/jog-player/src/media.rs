//! Mock media surfaces
//!
//! Stands in for real video elements: each surface has a rate, volume,
//! mute flag, and a playhead advanced by a background thread. State
//! changes are reported on a notice channel the UI subscribes to,
//! mirroring how real playback targets emit rate/volume change events
//! no matter who performed the write.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use jog_core::{MediaElement, SurfaceId};

use crate::config::MediaConfig;

/// Playhead advance cadence for the media thread
const TICK: Duration = Duration::from_millis(33);

/// Full state of one mock surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaState {
    pub rate: f64,
    pub volume: f64,
    pub muted: bool,
    /// Playhead position in seconds
    pub position: f64,
    /// Clip length in seconds; the playhead wraps here
    pub duration: f64,
}

/// Which field of a surface changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaChange {
    Rate,
    Volume,
    Muted,
}

/// A change notification from a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaNotice {
    pub surface: SurfaceId,
    pub change: MediaChange,
}

/// Handle to one mock surface.
///
/// Setters notify the notice channel only when the value actually
/// changed, so echoes of a write are cheap to reconcile.
#[derive(Debug)]
pub struct MediaHandle {
    id: SurfaceId,
    state: Arc<Mutex<MediaState>>,
    notices: Sender<MediaNotice>,
}

impl MediaHandle {
    pub fn id(&self) -> SurfaceId {
        self.id
    }

    /// Copy of the current surface state
    pub fn snapshot(&self) -> MediaState {
        self.state
            .lock()
            .map(|s| *s)
            .unwrap_or_else(|poisoned| *poisoned.into_inner())
    }

    fn notify(&self, change: MediaChange) {
        // The receiver only disappears on shutdown
        let _ = self.notices.send(MediaNotice {
            surface: self.id,
            change,
        });
    }
}

impl MediaElement for MediaHandle {
    fn rate(&self) -> f64 {
        self.snapshot().rate
    }

    fn set_rate(&mut self, rate: f64) {
        if let Ok(mut s) = self.state.lock() {
            if s.rate != rate {
                s.rate = rate;
                drop(s);
                self.notify(MediaChange::Rate);
            }
        }
    }

    fn volume(&self) -> f64 {
        self.snapshot().volume
    }

    fn set_volume(&mut self, volume: f64) {
        if let Ok(mut s) = self.state.lock() {
            if s.volume != volume {
                s.volume = volume;
                drop(s);
                self.notify(MediaChange::Volume);
            }
        }
    }

    fn muted(&self) -> bool {
        self.snapshot().muted
    }

    fn set_muted(&mut self, muted: bool) {
        if let Ok(mut s) = self.state.lock() {
            if s.muted != muted {
                s.muted = muted;
                drop(s);
                self.notify(MediaChange::Muted);
            }
        }
    }
}

/// Owns the mock surfaces and the playhead thread
pub struct MediaEngine {
    handles: Vec<MediaHandle>,
    notices: Arc<Mutex<Receiver<MediaNotice>>>,
    stop: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl MediaEngine {
    /// Create the configured surfaces and start the playhead thread
    pub fn start(config: &MediaConfig) -> Self {
        let (tx, rx) = channel();
        let duration = config.clip_secs.max(1.0);
        let volume = config.default_volume.clamp(0.0, 1.0);

        let handles: Vec<MediaHandle> = (0..config.surface_count.max(1))
            .map(|n| MediaHandle {
                id: SurfaceId(n as u64),
                state: Arc::new(Mutex::new(MediaState {
                    rate: 1.0,
                    volume,
                    muted: false,
                    position: 0.0,
                    duration,
                })),
                notices: tx.clone(),
            })
            .collect();

        let stop = Arc::new(AtomicBool::new(false));
        let worker = spawn_playhead_thread(
            handles.iter().map(|h| Arc::clone(&h.state)).collect(),
            Arc::clone(&stop),
        );

        log::info!("media engine started with {} surfaces", handles.len());

        Self {
            handles,
            notices: Arc::new(Mutex::new(rx)),
            stop,
            worker,
        }
    }

    pub fn handles(&self) -> &[MediaHandle] {
        &self.handles
    }

    pub fn handle(&self, id: SurfaceId) -> Option<&MediaHandle> {
        self.handles.iter().find(|h| h.id == id)
    }

    pub fn handle_mut(&mut self, id: SurfaceId) -> Option<&mut MediaHandle> {
        self.handles.iter_mut().find(|h| h.id == id)
    }

    /// Receiver for change notices, shaped for `channel_subscription`
    pub fn notice_receiver(&self) -> Arc<Mutex<Receiver<MediaNotice>>> {
        Arc::clone(&self.notices)
    }
}

impl Drop for MediaEngine {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

/// Advance every playhead by rate * elapsed, wrapping at the clip end
fn spawn_playhead_thread(
    states: Vec<Arc<Mutex<MediaState>>>,
    stop: Arc<AtomicBool>,
) -> Option<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("jog-media".to_string())
        .spawn(move || {
            let mut last = Instant::now();
            while !stop.load(Ordering::Relaxed) {
                std::thread::sleep(TICK);
                let now = Instant::now();
                let dt = now.duration_since(last).as_secs_f64();
                last = now;

                for state in &states {
                    if let Ok(mut s) = state.lock() {
                        s.position = (s.position + s.rate * dt) % s.duration;
                    }
                }
            }
        })
        .map_err(|e| log::error!("failed to spawn media thread: {e}"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> MediaConfig {
        MediaConfig {
            surface_count: 2,
            default_volume: 0.8,
            clip_secs: 10.0,
        }
    }

    #[test]
    fn test_engine_creates_surfaces() {
        let engine = MediaEngine::start(&test_config());
        assert_eq!(engine.handles().len(), 2);
        assert!(engine.handle(SurfaceId(1)).is_some());
        assert!(engine.handle(SurfaceId(2)).is_none());

        let state = engine.handles()[0].snapshot();
        assert_eq!(state.rate, 1.0);
        assert_eq!(state.volume, 0.8);
        assert!(!state.muted);
    }

    #[test]
    fn test_setters_notify_only_on_change() {
        let mut engine = MediaEngine::start(&test_config());
        let rx = engine.notice_receiver();

        {
            let handle = engine.handle_mut(SurfaceId(0)).unwrap();
            handle.set_rate(1.0); // unchanged
            handle.set_rate(1.5);
            handle.set_volume(0.8); // unchanged
            handle.set_muted(true);
        }

        let rx = rx.lock().unwrap();
        let notices: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            notices,
            vec![
                MediaNotice {
                    surface: SurfaceId(0),
                    change: MediaChange::Rate,
                },
                MediaNotice {
                    surface: SurfaceId(0),
                    change: MediaChange::Muted,
                },
            ]
        );
    }

    #[test]
    fn test_playhead_advances_and_wraps() {
        let engine = MediaEngine::start(&MediaConfig {
            surface_count: 1,
            default_volume: 0.8,
            clip_secs: 10.0,
        });
        std::thread::sleep(Duration::from_millis(150));
        let position = engine.handles()[0].snapshot().position;
        assert!(position > 0.0);
        assert!(position < 10.0);
    }
}
