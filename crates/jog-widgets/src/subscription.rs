//! Bridging background-thread notices into iced
//!
//! The media engine reports state changes over a plain `std::sync::mpsc`
//! channel; this helper turns the shared receiver into an iced
//! `Subscription` so those notices arrive as messages on the update
//! loop.
//!
//! # Usage
//!
//! ```ignore
//! use jog_widgets::channel_subscription;
//!
//! fn subscription(&self) -> Subscription<Message> {
//!     Subscription::batch([
//!         channel_subscription(self.media.notice_receiver()).map(Message::Media),
//!         // ... other subscriptions
//!     ])
//! }
//! ```

use std::any::TypeId;
use std::hash::Hash;
use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use iced::advanced::subscription::{self, EventStream, Hasher, Recipe};
use iced::futures::stream::BoxStream;
use iced::Subscription;

/// Sleep between drain attempts. Notices are sparse (one per gesture
/// step at most), so this only bounds their latency; 1ms keeps them
/// well inside a frame.
const DRAIN_INTERVAL: Duration = Duration::from_millis(1);

/// Recipe draining a shared channel receiver into the iced runtime
struct ChannelRecipe<T> {
    /// Subscription identity: the receiver's Arc pointer, so the same
    /// receiver maps to the same live stream across subscription passes
    tag: u64,
    receiver: Arc<Mutex<Receiver<T>>>,
}

impl<T: Send + 'static> Recipe for ChannelRecipe<T> {
    type Output = T;

    fn hash(&self, state: &mut Hasher) {
        TypeId::of::<Self>().hash(state);
        self.tag.hash(state);
    }

    fn stream(self: Box<Self>, _input: EventStream) -> BoxStream<'static, Self::Output> {
        Box::pin(iced::futures::stream::unfold(
            self.receiver,
            |receiver| async move {
                loop {
                    let next = receiver.lock().ok().and_then(|rx| rx.try_recv().ok());
                    match next {
                        Some(notice) => return Some((notice, receiver)),
                        None => tokio::time::sleep(DRAIN_INTERVAL).await,
                    }
                }
            },
        ))
    }
}

/// Subscribe to a channel of notices shared with a background thread.
///
/// Call this on every `subscription()` pass with the same `Arc`; the
/// pointer doubles as the subscription identity, so iced keeps one
/// stream alive instead of tearing it down and rebuilding it.
pub fn channel_subscription<T>(receiver: Arc<Mutex<Receiver<T>>>) -> Subscription<T>
where
    T: Send + 'static,
{
    let tag = Arc::as_ptr(&receiver) as u64;

    subscription::from_recipe(ChannelRecipe { tag, receiver })
}
