//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use super::core::MultimindApp;

impl ApplicationHandler for MultimindApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        // First launch, or re-activation after the window was released.
        if !self.initialize_window(event_loop) {
            self.shutdown();
            event_loop.exit();
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        tracing::info!("Application suspended");
        self.release_window();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                if self.config.window.hide_on_close {
                    self.hide_window();
                } else {
                    tracing::info!("Window close requested");
                    self.shutdown();
                    event_loop.exit();
                }
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_bounds();
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                self.sync_bounds();
            }

            WindowEvent::Destroyed => {
                tracing::info!("Window destroyed");
                self.release_window();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl MultimindApp {
    /// Close without quitting: the window goes to the dock and the
    /// surfaces keep their sessions.
    fn hide_window(&mut self) {
        if let Some(window) = &self.window {
            tracing::info!("Window close requested, minimizing");
            window.set_minimized(true);
        }
    }
}
