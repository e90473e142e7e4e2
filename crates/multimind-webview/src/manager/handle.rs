use multimind_common::{Rect, SurfaceError};
use wry::{WebContext, WebView};

use crate::bounds::rect_to_wry;
use crate::surface::Surface;

/// A live wry webview bound to one key.
pub struct WebSurface {
    key: String,
    webview: WebView,
    /// Storage partition. Field order drops it after `webview`.
    _context: Option<WebContext>,
}

impl WebSurface {
    pub(super) fn new(key: String, webview: WebView, context: Option<WebContext>) -> Self {
        Self {
            key,
            webview,
            _context: context,
        }
    }

    /// Send a typed IPC message to the page's JS bridge.
    pub fn send_ipc(&self, kind: &str, payload: &serde_json::Value) -> Result<(), SurfaceError> {
        let script = crate::ipc::js_dispatch_message(kind, payload);
        self.webview.evaluate_script(&script).map_err(engine_error)
    }

    /// The URL currently loaded.
    pub fn url(&self) -> Result<String, SurfaceError> {
        self.webview.url().map_err(engine_error)
    }
}

impl Surface for WebSurface {
    fn key(&self) -> &str {
        &self.key
    }

    fn set_bounds(&self, bounds: Rect) -> Result<(), SurfaceError> {
        self.webview
            .set_bounds(rect_to_wry(&bounds))
            .map_err(engine_error)
    }

    fn set_visible(&self, visible: bool) -> Result<(), SurfaceError> {
        self.webview.set_visible(visible).map_err(engine_error)
    }

    fn reload(&self) -> Result<(), SurfaceError> {
        let url = self.url()?;
        self.webview.load_url(&url).map_err(engine_error)
    }
}

pub(super) fn engine_error(e: wry::Error) -> SurfaceError {
    SurfaceError::Operation(e.to_string())
}
