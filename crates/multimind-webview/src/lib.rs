//! Embedded web surfaces for MultiMind.
//!
//! Wraps the `wry` crate to provide:
//! - One isolated surface per chat service, each with its own storage partition
//! - A registry that tracks which surface is active
//! - A layout coordinator that keeps surface geometry in sync with the window
//! - The `multimind://` protocol serving the bundled shell UI
//! - JSON IPC between the shell UI and Rust

pub mod bounds;
pub mod content;
pub mod events;
pub mod ipc;
pub mod layout;
pub mod manager;
pub mod registry;
pub mod shell;
pub mod surface;

#[cfg(test)]
mod testing;

pub use content::ContentProvider;
pub use events::{PageLoadState, SurfaceEvent};
pub use ipc::{IpcMessage, IpcPayload};
pub use layout::LayoutCoordinator;
pub use manager::{SurfaceManager, SurfaceSettings, WebSurface, WebSurfaceFactory};
pub use registry::SurfaceRegistry;
pub use surface::{Surface, SurfaceFactory};
