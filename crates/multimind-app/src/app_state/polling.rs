//! Event pumping between the surfaces, the bridge and the shell.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use multimind_webview::shell::SHELL_KEY;
use multimind_webview::SurfaceEvent;

use crate::bridge::Outbound;

use super::core::MultimindApp;
use super::types::POLL_INTERVAL;

impl MultimindApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_surface_events();
            self.forward_notifications();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    /// Dispatch everything the engine callbacks queued since the last poll.
    pub(super) fn poll_surface_events(&mut self) {
        for event in self.manager.drain_events() {
            match event {
                SurfaceEvent::PageLoad { key, state, url } => {
                    tracing::debug!(key = %key, ?state, url = %url, "page load event");
                    self.bridge.on_page_load(&key, state);
                }
                SurfaceEvent::IpcMessage { key, body } => {
                    if key != SHELL_KEY {
                        tracing::warn!(key = %key, "IPC from a service surface ignored");
                        continue;
                    }
                    for reply in self.bridge.handle_ipc(&body) {
                        self.send_to_shell(&reply);
                    }
                }
                SurfaceEvent::FilesDropped { paths, .. } => {
                    self.bridge.on_files_dropped(&paths);
                }
            }
        }
    }

    /// Relay bus notifications to the shell.
    pub(super) fn forward_notifications(&mut self) {
        for notification in self.subscriptions.drain() {
            self.send_to_shell(&Outbound::from(notification));
        }
    }

    fn send_to_shell(&self, message: &Outbound) {
        let Some(shell) = &self.shell else {
            tracing::debug!(kind = message.kind(), "no shell, message dropped");
            return;
        };
        if let Err(e) = shell.send_ipc(message.kind(), &message.payload()) {
            tracing::warn!(kind = message.kind(), error = %e, "failed to message shell");
        }
    }
}
