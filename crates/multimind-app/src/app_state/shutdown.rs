//! Releasing surfaces and the window.

use super::core::MultimindApp;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl MultimindApp {
    /// Release every surface and the window, then mark the app for exit.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");
        self.release_window();
        self.should_exit = true;
        tracing::info!("Graceful shutdown complete");
    }

    /// Drop the service surfaces, then the shell, then the window.
    ///
    /// The active key is remembered so a re-created window opens on the
    /// same service.
    pub(super) fn release_window(&mut self) {
        if let Some(key) = self.bridge.active_key() {
            self.startup_service = key.to_string();
        }

        let released = self.bridge.teardown();
        self.bridge.window_closed();
        self.shell = None;
        self.window = None;

        if released > 0 {
            tracing::info!(released, "surfaces released");
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
