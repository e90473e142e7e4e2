//! Internal types and constants for the app state module.

use std::time::Duration;

use multimind_platform::SystemHost;
use multimind_webview::WebSurfaceFactory;
use winit::window::Window;

use crate::bridge::EventBridge;

/// The bridge as wired to real webviews and the desktop.
pub(super) type AppBridge = EventBridge<WebSurfaceFactory<Window>, SystemHost>;

/// How often to poll for surface events (approx 60 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);
