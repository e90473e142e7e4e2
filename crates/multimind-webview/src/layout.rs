//! Surface geometry.
//!
//! Every service surface occupies the same rectangle: right of the left
//! rail, full window height, and narrowed by the right panel while it is
//! visible. Only the active surface is visible, but all of them are kept
//! at the current size so switching never shows a stale layout.

use multimind_common::{Rect, Size};
use tracing::{debug, warn};

use crate::surface::Surface;

/// Computes surface rectangles from window size and panel visibility and
/// applies them to surfaces.
#[derive(Debug, Clone)]
pub struct LayoutCoordinator {
    left_rail_width: f64,
    right_panel_width: f64,
    /// Last known window content size; `None` once the window is gone.
    window: Option<Size>,
    panel_visible: bool,
}

impl LayoutCoordinator {
    pub fn new(left_rail_width: f64, right_panel_width: f64, panel_visible: bool) -> Self {
        Self {
            left_rail_width,
            right_panel_width,
            window: None,
            panel_visible,
        }
    }

    /// The surface rectangle for a window of `window` size.
    ///
    /// Width and height are clamped at zero for windows narrower than the
    /// rails.
    pub fn compute(&self, window: Size, panel_visible: bool) -> Rect {
        let panel = if panel_visible {
            self.right_panel_width
        } else {
            0.0
        };
        Rect {
            x: self.left_rail_width,
            y: 0.0,
            width: (window.width - self.left_rail_width - panel).max(0.0),
            height: window.height.max(0.0),
        }
    }

    /// Record `window` and `panel_visible` and apply the result to every
    /// surface.
    pub fn apply<'a, S, I>(&mut self, window: Size, panel_visible: bool, surfaces: I) -> Rect
    where
        S: Surface + 'a,
        I: IntoIterator<Item = &'a S>,
    {
        self.window = Some(window);
        self.panel_visible = panel_visible;
        let rect = self.compute(window, panel_visible);
        apply_rect(rect, surfaces);
        rect
    }

    /// The window was resized.
    pub fn resize<'a, S, I>(&mut self, window: Size, surfaces: I) -> Rect
    where
        S: Surface + 'a,
        I: IntoIterator<Item = &'a S>,
    {
        self.apply(window, self.panel_visible, surfaces)
    }

    /// The right panel was shown or hidden. Before the window size is known
    /// only the flag is recorded.
    pub fn set_panel_visible<'a, S, I>(&mut self, visible: bool, surfaces: I) -> Option<Rect>
    where
        S: Surface + 'a,
        I: IntoIterator<Item = &'a S>,
    {
        self.panel_visible = visible;
        self.refresh(surfaces)
    }

    /// Re-apply the current layout. No-op while the window is unknown.
    pub fn refresh<'a, S, I>(&self, surfaces: I) -> Option<Rect>
    where
        S: Surface + 'a,
        I: IntoIterator<Item = &'a S>,
    {
        let rect = self.current_rect()?;
        apply_rect(rect, surfaces);
        Some(rect)
    }

    /// The rectangle surfaces currently occupy, if the window is known.
    pub fn current_rect(&self) -> Option<Rect> {
        self.window.map(|w| self.compute(w, self.panel_visible))
    }

    /// The host window went away; later refreshes do nothing until the next
    /// resize.
    pub fn window_closed(&mut self) {
        self.window = None;
    }

    pub fn panel_visible(&self) -> bool {
        self.panel_visible
    }

    pub fn left_rail_width(&self) -> f64 {
        self.left_rail_width
    }

    pub fn right_panel_width(&self) -> f64 {
        self.right_panel_width
    }
}

fn apply_rect<'a, S, I>(rect: Rect, surfaces: I)
where
    S: Surface + 'a,
    I: IntoIterator<Item = &'a S>,
{
    let mut applied = 0usize;
    for surface in surfaces {
        match surface.set_bounds(rect) {
            Ok(()) => applied += 1,
            Err(e) => warn!(key = %surface.key(), error = %e, "failed to set surface bounds"),
        }
    }
    debug!(?rect, applied, "layout applied");
}
