//! Layout configuration types.

use serde::{Deserialize, Serialize};

/// Width of the service icon rail on the left edge.
pub const DEFAULT_LEFT_RAIL_WIDTH: f64 = 65.0;

/// Width of the scratch panel on the right edge when it is open.
pub const DEFAULT_RIGHT_PANEL_WIDTH: f64 = 250.0;

/// Shell layout: fixed rail and panel widths around the service surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Left icon rail width in logical pixels (valid range: 40-200).
    pub left_rail_width: f64,
    /// Right scratch panel width in logical pixels (valid range: 150-600).
    pub right_panel_width: f64,
    /// Whether the scratch panel starts open.
    pub panel_visible: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            left_rail_width: DEFAULT_LEFT_RAIL_WIDTH,
            right_panel_width: DEFAULT_RIGHT_PANEL_WIDTH,
            panel_visible: false,
        }
    }
}
