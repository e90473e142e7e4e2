//! Startup and scratch store configuration types.

use serde::{Deserialize, Serialize};

/// What the shell shows first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StartupConfig {
    /// Key of the service shown after the surfaces are created.
    pub default_service: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            default_service: "gemini".into(),
        }
    }
}

/// Scratch clipboard storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScratchConfig {
    /// Directory name under the application data directory.
    pub dir_name: String,
}

impl Default for ScratchConfig {
    fn default() -> Self {
        Self {
            dir_name: "temp-clipboard".into(),
        }
    }
}
