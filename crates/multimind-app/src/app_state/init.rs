//! Window creation and surface setup.

use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use multimind_common::{Rect, Size};
use multimind_webview::Surface;

use super::core::MultimindApp;

// =============================================================================
// INITIALIZATION
// =============================================================================

impl MultimindApp {
    /// Create the window, the shell and every service surface.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let wc = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(wc.title.as_str())
            .with_inner_size(LogicalSize::new(f64::from(wc.width), f64::from(wc.height)))
            .with_min_inner_size(LogicalSize::new(
                f64::from(wc.min_width),
                f64::from(wc.min_height),
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        // The shell is created first so service surfaces stack above it.
        let size = logical_size(&window);
        match self.manager.create_shell(&*window, full_window(size)) {
            Ok(shell) => self.shell = Some(shell),
            Err(e) => {
                tracing::error!("Failed to create shell: {e}");
                return false;
            }
        }

        self.bridge.registry_mut().factory_mut().set_window(&window);
        self.bridge.host_mut().set_window(&window);
        self.bridge.resize(size);
        match self.bridge.create_surfaces() {
            Ok(count) => tracing::info!(count, "service surfaces created"),
            Err(e) => {
                tracing::error!("Failed to create service surfaces: {e}");
                return false;
            }
        }

        if !self.bridge.show(&self.startup_service) {
            tracing::warn!(service = %self.startup_service, "startup service unavailable");
        }

        self.window = Some(window);
        tracing::info!(
            width = size.width,
            height = size.height,
            "Window created and surfaces initialized"
        );
        true
    }

    /// Keep the shell covering the window and re-lay the service surfaces.
    pub(super) fn sync_bounds(&mut self) {
        let Some(window) = &self.window else {
            return;
        };
        let size = logical_size(window);
        if let Some(shell) = &self.shell {
            if let Err(e) = shell.set_bounds(full_window(size)) {
                tracing::warn!(error = %e, "failed to resize shell");
            }
        }
        self.bridge.resize(size);
    }
}

/// Inner size of `window` in logical pixels.
pub(super) fn logical_size(window: &Window) -> Size {
    let size = window.inner_size().to_logical::<f64>(window.scale_factor());
    Size::new(size.width, size.height)
}

pub(super) fn full_window(size: Size) -> Rect {
    Rect::new(0.0, 0.0, size.width, size.height)
}
