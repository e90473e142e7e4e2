//! The seam between surface bookkeeping and the web engine.
//!
//! [`SurfaceRegistry`](crate::SurfaceRegistry) and
//! [`LayoutCoordinator`](crate::LayoutCoordinator) only talk to these traits,
//! so their logic runs in tests against in-memory fakes.

use multimind_common::{Rect, ServiceDescriptor, SurfaceError};

/// An isolated browsing surface composed into the host window.
pub trait Surface {
    /// The service key this surface is bound to.
    fn key(&self) -> &str;

    /// Position and size the surface in logical window coordinates.
    fn set_bounds(&self, bounds: Rect) -> Result<(), SurfaceError>;

    /// Show or hide the surface.
    fn set_visible(&self, visible: bool) -> Result<(), SurfaceError>;

    /// Reload the surface from its current URL.
    fn reload(&self) -> Result<(), SurfaceError>;
}

/// Creates surfaces for services.
pub trait SurfaceFactory {
    type Surface: Surface;

    /// Create a hidden surface for `service` at `bounds` and start loading
    /// the service URL.
    fn create(
        &mut self,
        service: &ServiceDescriptor,
        bounds: Rect,
    ) -> Result<Self::Surface, SurfaceError>;
}
