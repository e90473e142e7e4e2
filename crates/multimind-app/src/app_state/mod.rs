//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the host window, the shell surface and the event
//! bridge, and pumps surface events and notifications between them.

mod core;
mod event_handler;
mod init;
mod polling;
mod shutdown;
mod types;

pub use core::MultimindApp;
