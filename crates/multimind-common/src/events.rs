//! Outbound notifications from the core to the presentation layer.
//!
//! Each observable event type has its own [`Topic`], so a subscriber only
//! receives the notifications it asked for.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// A notification published by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Notification {
    /// The active surface started (`true`) or stopped (`false`) loading.
    LoadingStateChanged(bool),
    /// The scratch store was mutated; the item list should be refreshed.
    StoreChanged,
    /// A short user-facing message (toast).
    Notify(String),
}

/// A single-type broadcast channel.
pub struct Topic<T: Clone> {
    sender: broadcast::Sender<T>,
}

impl<T: Clone> Topic<T> {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<T> {
        self.sender.subscribe()
    }

    /// Publish a value; returns the number of subscribers that received it.
    pub fn publish(&self, value: T) -> usize {
        self.sender.send(value).unwrap_or(0)
    }
}

/// The three outbound notification topics.
pub struct EventBus {
    loading: Topic<bool>,
    store: Topic<()>,
    notify: Topic<String>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        Self {
            loading: Topic::new(capacity),
            store: Topic::new(capacity),
            notify: Topic::new(capacity),
        }
    }

    pub fn subscribe_loading(&self) -> broadcast::Receiver<bool> {
        self.loading.subscribe()
    }

    pub fn subscribe_store(&self) -> broadcast::Receiver<()> {
        self.store.subscribe()
    }

    pub fn subscribe_notify(&self) -> broadcast::Receiver<String> {
        self.notify.subscribe()
    }

    /// Route a notification to its topic.
    pub fn publish(&self, notification: Notification) -> usize {
        match notification {
            Notification::LoadingStateChanged(loading) => self.loading.publish(loading),
            Notification::StoreChanged => self.store.publish(()),
            Notification::Notify(message) => self.notify.publish(message),
        }
    }

    /// Subscribe to every topic at once.
    pub fn subscribe_all(&self) -> Subscriptions {
        Subscriptions {
            loading: self.subscribe_loading(),
            store: self.subscribe_store(),
            notify: self.subscribe_notify(),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}

/// Receivers for all topics, drained without blocking from the event loop.
pub struct Subscriptions {
    loading: broadcast::Receiver<bool>,
    store: broadcast::Receiver<()>,
    notify: broadcast::Receiver<String>,
}

impl Subscriptions {
    /// Collect every notification that is currently queued.
    ///
    /// Lagged receivers skip the overwritten messages and keep draining.
    pub fn drain(&mut self) -> Vec<Notification> {
        let mut out = Vec::new();
        drain_into(&mut self.loading, &mut out, Notification::LoadingStateChanged);
        drain_into(&mut self.store, &mut out, |()| Notification::StoreChanged);
        drain_into(&mut self.notify, &mut out, Notification::Notify);
        out
    }
}

fn drain_into<T: Clone>(
    rx: &mut broadcast::Receiver<T>,
    out: &mut Vec<Notification>,
    wrap: impl Fn(T) -> Notification,
) {
    loop {
        match rx.try_recv() {
            Ok(value) => out.push(wrap(value)),
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "notification subscriber lagged");
            }
            Err(_) => break,
        }
    }
}
