//! Desktop services the shell asks the operating system for.
//!
//! `HostServices` is the seam between the command bridge and the OS, so the
//! bridge can be driven by a recording fake in tests.

use std::path::Path;
use std::sync::{Arc, Weak};

use multimind_common::PlatformError;
use raw_window_handle::HasWindowHandle;
use tracing::debug;

use crate::opener;

/// Operating-system services used by the scratch panel.
pub trait HostServices {
    /// Put `text` on the system clipboard.
    fn copy_text(&mut self, text: &str) -> Result<(), PlatformError>;

    /// Open `path` with the default application.
    fn open_path(&mut self, path: &Path) -> Result<(), PlatformError>;

    /// Start a native drag of the file at `path` out of the window.
    ///
    /// `Ok` means the OS now owns the drag and will deliver the file;
    /// [`PlatformError::NotSupported`] means no native drag is running.
    fn start_drag(&mut self, path: &Path) -> Result<(), PlatformError>;
}

/// A host window as seen by the drag source.
type DragWindow = dyn HasWindowHandle + Send + Sync;

/// The real desktop host: `arboard` clipboard, `open` launcher and the
/// `drag` file drag source.
///
/// The clipboard handle is created lazily and kept, since some platforms
/// drop clipboard ownership when the handle is dropped. The window is held
/// weakly; without one, drags report `NotSupported`.
#[derive(Default)]
pub struct SystemHost {
    clipboard: Option<arboard::Clipboard>,
    window: Option<Weak<DragWindow>>,
}

impl SystemHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `window` as the source of native drags.
    pub fn set_window<W>(&mut self, window: &Arc<W>)
    where
        W: HasWindowHandle + Send + Sync + 'static,
    {
        let window: Arc<DragWindow> = window.clone();
        self.window = Some(Arc::downgrade(&window));
    }

    fn clipboard(&mut self) -> Result<&mut arboard::Clipboard, PlatformError> {
        if self.clipboard.is_none() {
            self.clipboard = Some(arboard::Clipboard::new().map_err(clipboard_error)?);
        }
        self.clipboard
            .as_mut()
            .ok_or_else(|| PlatformError::Clipboard("clipboard unavailable".into()))
    }
}

impl HostServices for SystemHost {
    fn copy_text(&mut self, text: &str) -> Result<(), PlatformError> {
        let result = self
            .clipboard()?
            .set_text(text.to_owned())
            .map_err(clipboard_error);
        match result {
            Ok(()) => debug!(len = text.len(), "text copied to clipboard"),
            // A stale handle is rebuilt on the next copy.
            Err(_) => self.clipboard = None,
        }
        result
    }

    fn open_path(&mut self, path: &Path) -> Result<(), PlatformError> {
        opener::open_path(path)
    }

    fn start_drag(&mut self, path: &Path) -> Result<(), PlatformError> {
        let Some(window) = self.window.as_ref().and_then(Weak::upgrade) else {
            debug!(path = %path.display(), "no window to drag from");
            return Err(PlatformError::NotSupported("dragging without a window"));
        };
        platform_start_drag(&window, path)
    }
}

fn clipboard_error(e: arboard::Error) -> PlatformError {
    PlatformError::Clipboard(e.to_string())
}

#[cfg(any(target_os = "macos", target_os = "windows"))]
fn platform_start_drag(window: &Arc<DragWindow>, path: &Path) -> Result<(), PlatformError> {
    const ICON: &[u8] = include_bytes!("../assets/drag-icon.png");

    let dragged = path.to_path_buf();
    drag::start_drag(
        window,
        drag::DragItem::Files(vec![path.to_path_buf()]),
        drag::Image::Raw(ICON.to_vec()),
        move |result, _cursor| match result {
            drag::DragResult::Dropped => {
                debug!(path = %dragged.display(), "native drag dropped");
            }
            drag::DragResult::Cancel => {
                debug!(path = %dragged.display(), "native drag cancelled");
            }
        },
        drag::Options::default(),
    )
    .map_err(|e| PlatformError::Drag(e.to_string()))
}

// The GTK drag source needs a gtk widget, which a winit window does not have.
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn platform_start_drag(_window: &Arc<DragWindow>, path: &Path) -> Result<(), PlatformError> {
    debug!(path = %path.display(), "no native drag source on this platform");
    Err(PlatformError::NotSupported("dragging files out of the window"))
}
