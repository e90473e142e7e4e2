//! wry-backed surfaces.
//!
//! `SurfaceManager` builds `wry::WebView` instances: one per chat service,
//! each with its own on-disk `WebContext` partition, plus the full-window
//! shell that hosts the rail and scratch panel. Engine callbacks push
//! [`SurfaceEvent`]s into a shared sink that the event loop drains.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::content::ContentProvider;
use crate::events::SurfaceEvent;

mod factory;
mod handle;
pub mod handlers;
mod lifecycle;
mod types;

pub use factory::WebSurfaceFactory;
pub use handle::WebSurface;
pub use types::SurfaceSettings;

/// Shared sink for engine callbacks.
pub type EventSink = Arc<Mutex<Vec<SurfaceEvent>>>;

/// Builds surfaces and collects their events.
#[derive(Clone)]
pub struct SurfaceManager {
    events: EventSink,
    content_provider: Option<Arc<ContentProvider>>,
    /// Each service persists its browsing data in `<root>/<key>`.
    partitions_root: PathBuf,
    settings: SurfaceSettings,
}

impl SurfaceManager {
    pub fn new(partitions_root: impl Into<PathBuf>, settings: SurfaceSettings) -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            content_provider: None,
            partitions_root: partitions_root.into(),
            settings,
        }
    }

    /// Set the content provider for serving the shell via `multimind://`.
    pub fn set_content_provider(&mut self, provider: ContentProvider) {
        self.content_provider = Some(Arc::new(provider));
    }

    /// Storage directory of the partition for `key`.
    pub fn partition_dir(&self, key: &str) -> PathBuf {
        self.partitions_root.join(key)
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<SurfaceEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    pub(crate) fn event_sink(&self) -> EventSink {
        Arc::clone(&self.events)
    }
}

/// Push an event from an engine callback. A poisoned sink drops the event.
pub(crate) fn push_event(sink: &EventSink, event: SurfaceEvent) {
    if let Ok(mut events) = sink.lock() {
        events.push(event);
    }
}
