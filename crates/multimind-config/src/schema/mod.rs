//! Configuration schema types for MultiMind.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod layout;
mod startup;
mod system;
mod window;

pub use layout::*;
pub use startup::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for MultiMind.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MultimindConfig {
    pub window: WindowConfig,
    pub layout: LayoutConfig,
    pub startup: StartupConfig,
    pub scratch: ScratchConfig,
    pub webview: WebViewSettings,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
