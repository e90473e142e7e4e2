//! System configuration types: webview engine and logging.

use serde::{Deserialize, Serialize};

/// Settings applied to every service surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebViewSettings {
    /// Enable the engine's developer tools (always on in debug builds).
    pub devtools: bool,
    /// Override the engine's user agent. Empty keeps the engine default,
    /// which the hosted sites expect.
    pub user_agent: String,
    /// Serve the shell UI from this directory instead of the bundled copy.
    /// Empty uses the bundled copy.
    pub shell_dir: String,
}

impl Default for WebViewSettings {
    fn default() -> Self {
        Self {
            devtools: cfg!(debug_assertions),
            user_agent: String::new(),
            shell_dir: String::new(),
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive for the workspace crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "multimind=trace",
            LogLevel::Debug => "multimind=debug",
            LogLevel::Info => "multimind=info",
            LogLevel::Warn => "multimind=warn",
            LogLevel::Error => "multimind=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
