use std::sync::{Arc, Weak};

use multimind_common::{Rect, ServiceDescriptor, SurfaceError};
use wry::raw_window_handle::HasWindowHandle;

use crate::surface::SurfaceFactory;

use super::handle::WebSurface;
use super::SurfaceManager;

/// Builds service surfaces as children of the host window.
///
/// Holds the window weakly: once it is dropped, creation fails with
/// [`SurfaceError::WindowGone`] until [`set_window`](Self::set_window)
/// supplies a new one.
pub struct WebSurfaceFactory<W> {
    manager: SurfaceManager,
    window: Weak<W>,
}

impl<W: HasWindowHandle> WebSurfaceFactory<W> {
    pub fn new(manager: SurfaceManager, window: &Arc<W>) -> Self {
        Self {
            manager,
            window: Arc::downgrade(window),
        }
    }

    /// A factory with no window yet. Creation fails until
    /// [`set_window`](Self::set_window) is called.
    pub fn detached(manager: SurfaceManager) -> Self {
        Self {
            manager,
            window: Weak::new(),
        }
    }

    /// Point the factory at a re-created host window.
    pub fn set_window(&mut self, window: &Arc<W>) {
        self.window = Arc::downgrade(window);
    }

    pub fn manager(&self) -> &SurfaceManager {
        &self.manager
    }
}

impl<W: HasWindowHandle> SurfaceFactory for WebSurfaceFactory<W> {
    type Surface = WebSurface;

    fn create(
        &mut self,
        service: &ServiceDescriptor,
        bounds: Rect,
    ) -> Result<WebSurface, SurfaceError> {
        let window = self.window.upgrade().ok_or(SurfaceError::WindowGone)?;
        self.manager
            .create_service_surface(&*window, service, bounds)
    }
}
