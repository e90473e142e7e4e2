//! Surface event types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded.
    Finished,
}

impl PageLoadState {
    /// Whether the surface is loading while in this state.
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Started)
    }
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events pushed by surfaces from engine callbacks, drained by the event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// Page load state changed on the surface named `key`.
    PageLoad {
        key: String,
        state: PageLoadState,
        url: String,
    },
    /// A JSON IPC message was received from the shell UI.
    IpcMessage { key: String, body: String },
    /// Files from the desktop were dropped onto the shell UI.
    FilesDropped { key: String, paths: Vec<PathBuf> },
}

impl SurfaceEvent {
    /// Key of the surface that produced the event.
    pub fn key(&self) -> &str {
        match self {
            Self::PageLoad { key, .. }
            | Self::IpcMessage { key, .. }
            | Self::FilesDropped { key, .. } => key,
        }
    }
}
