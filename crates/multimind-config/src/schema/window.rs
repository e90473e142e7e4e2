//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Host window appearance and close behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial inner width in logical pixels.
    pub width: u32,
    /// Initial inner height in logical pixels.
    pub height: u32,
    pub min_width: u32,
    pub min_height: u32,
    /// Hide the window on close instead of tearing it down.
    /// Defaults to `true` on macOS, where apps outlive their windows.
    pub hide_on_close: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "MultiMind".into(),
            width: 1280,
            height: 800,
            min_width: 800,
            min_height: 600,
            hide_on_close: cfg!(target_os = "macos"),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
