//! The relay between the shell UI and the core components.
//!
//! Inbound, it turns shell commands into calls on the surface registry,
//! layout coordinator and scratch store. Outbound, every state change is
//! published on the [`EventBus`]; loading events pass only when they come
//! from the active surface.

mod command;
mod outbound;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use multimind_common::{
    EventBus, Notification, PlatformError, ServiceDescriptor, Size, SurfaceError,
};
use multimind_platform::HostServices;
use multimind_store::ScratchStore;
use multimind_webview::{LayoutCoordinator, PageLoadState, SurfaceFactory, SurfaceRegistry};
use tracing::{debug, info, warn};

pub use command::{Command, CommandError, NewItem};
pub use outbound::Outbound;

/// Toast shown after a text item is copied.
pub const TEXT_COPIED: &str = "Text copied!";

pub struct EventBridge<F: SurfaceFactory, H: HostServices> {
    services: Vec<ServiceDescriptor>,
    registry: SurfaceRegistry<F>,
    layout: LayoutCoordinator,
    store: ScratchStore,
    host: H,
    bus: Arc<EventBus>,
    /// Item whose file the OS is currently dragging out of the window.
    native_drag: Option<PathBuf>,
}

impl<F: SurfaceFactory, H: HostServices> EventBridge<F, H> {
    pub fn new(
        services: Vec<ServiceDescriptor>,
        registry: SurfaceRegistry<F>,
        layout: LayoutCoordinator,
        store: ScratchStore,
        host: H,
        bus: Arc<EventBus>,
    ) -> Self {
        Self {
            services,
            registry,
            layout,
            store,
            host,
            bus,
            native_drag: None,
        }
    }

    // -- surfaces ------------------------------------------------------------

    /// Create surfaces for every service at the current layout.
    pub fn create_surfaces(&mut self) -> Result<usize, SurfaceError> {
        let bounds = self.layout.current_rect().unwrap_or_default();
        let created = self.registry.create_all(&self.services, bounds)?;
        self.layout.refresh(self.registry.surfaces());
        Ok(created)
    }

    /// Show the surface for `key`. Unknown keys are ignored.
    pub fn show(&mut self, key: &str) -> bool {
        if !self.registry.show(key) {
            return false;
        }
        self.layout.refresh(self.registry.surfaces());
        true
    }

    pub fn reload_active(&mut self) {
        if let Err(e) = self.registry.reload_active() {
            self.report("Could not reload the page", &e);
        }
    }

    /// Release all surfaces. The host window may still exist.
    pub fn teardown(&mut self) -> usize {
        self.registry.teardown()
    }

    pub fn resize(&mut self, window: Size) {
        self.layout.resize(window, self.registry.surfaces());
    }

    pub fn toggle_panel(&mut self, visible: bool) {
        info!(visible, "right panel toggled");
        self.layout.set_panel_visible(visible, self.registry.surfaces());
    }

    /// The host window is gone; layout requests become no-ops.
    pub fn window_closed(&mut self) {
        self.layout.window_closed();
    }

    pub fn active_key(&self) -> Option<&str> {
        self.registry.active_key()
    }

    pub fn registry(&self) -> &SurfaceRegistry<F> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut SurfaceRegistry<F> {
        &mut self.registry
    }

    pub fn layout(&self) -> &LayoutCoordinator {
        &self.layout
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    // -- surface events ------------------------------------------------------

    /// A surface started or finished loading.
    ///
    /// Only the active surface's state reaches the shell; the check runs
    /// when the event is published, so a surface that stops being active
    /// mid-load is silenced from then on.
    pub fn on_page_load(&self, key: &str, state: PageLoadState) {
        if !self.registry.is_active(key) {
            debug!(key, ?state, "loading event from inactive surface dropped");
            return;
        }
        self.bus
            .publish(Notification::LoadingStateChanged(state.is_loading()));
    }

    /// Files were dropped onto the shell from the desktop.
    pub fn on_files_dropped(&self, paths: &[PathBuf]) {
        for path in paths {
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                warn!(path = %path.display(), "dropped path has no file name");
                continue;
            };
            if let Err(e) = self.store.add_file(path, name) {
                self.report("Could not save the dropped file", &e);
            }
        }
    }

    // -- commands ------------------------------------------------------------

    /// Execute a shell command. Returns direct replies for the shell;
    /// everything else travels over the bus.
    pub fn handle_command(&mut self, command: Command) -> Vec<Outbound> {
        debug!(?command, "command");
        match command {
            Command::ShellReady => {
                vec![self.services_message(), self.scratch_items_message()]
            }
            Command::ShowView { key } => {
                self.show(&key);
                Vec::new()
            }
            Command::ReloadCurrentView => {
                self.reload_active();
                Vec::new()
            }
            Command::TogglePanel { visible } => {
                self.toggle_panel(visible);
                Vec::new()
            }
            Command::ListScratchItems => vec![self.scratch_items_message()],
            Command::AddScratchItem(item) => {
                self.add_item(item);
                Vec::new()
            }
            Command::DeleteScratchItem { path } => {
                self.delete_item(&path);
                Vec::new()
            }
            Command::BeginDrag { path } => {
                self.begin_drag(&path);
                Vec::new()
            }
            Command::DragEnded { path, dropped } => {
                self.end_drag(&path, dropped);
                Vec::new()
            }
            Command::ReadScratchText { path } => {
                self.copy_text_item(&path);
                Vec::new()
            }
            Command::OpenScratchItem { path } => {
                self.open_item(&path);
                Vec::new()
            }
        }
    }

    /// Parse and execute a raw IPC body. Rejected messages are logged and
    /// produce no replies.
    pub fn handle_ipc(&mut self, body: &str) -> Vec<Outbound> {
        match Command::from_ipc(body) {
            Ok(command) => self.handle_command(command),
            Err(e) => {
                warn!(error = %e, body_len = body.len(), "IPC message rejected");
                Vec::new()
            }
        }
    }

    fn services_message(&self) -> Outbound {
        Outbound::Services {
            services: self.services.clone(),
            active: self.registry.active_key().map(str::to_string),
            panel_visible: self.layout.panel_visible(),
        }
    }

    fn scratch_items_message(&self) -> Outbound {
        let items = self.store.list().unwrap_or_else(|e| {
            self.report("Could not list scratch items", &e);
            Vec::new()
        });
        Outbound::ScratchItems { items }
    }

    fn add_item(&self, item: NewItem) {
        let result = match &item {
            NewItem::Text { content } => self.store.add_text(content),
            NewItem::File { source, name } => self.store.add_file(source, name),
        };
        if let Err(e) = result {
            self.report("Could not save item", &e);
        }
    }

    fn delete_item(&self, path: &Path) {
        if let Err(e) = self.store.delete(path) {
            self.report("Could not delete item", &e);
        }
    }

    fn copy_text_item(&mut self, path: &Path) {
        let text = match self.store.read_text(path) {
            Ok(text) => text,
            Err(e) => return self.report("Could not read item", &e),
        };
        match self.host.copy_text(&text) {
            Ok(()) => self.notify(TEXT_COPIED),
            Err(e) => self.report("Could not copy text", &e),
        }
    }

    fn open_item(&mut self, path: &Path) {
        if let Err(e) = self.store.check_inside(path) {
            return self.report("Could not open item", &e);
        }
        if let Err(e) = self.host.open_path(path) {
            self.report("Could not open item", &e);
        }
    }

    fn begin_drag(&mut self, path: &Path) {
        self.native_drag = None;
        if let Err(e) = self.store.check_inside(path) {
            return self.report("Could not drag item", &e);
        }
        match self.host.start_drag(path) {
            Ok(()) => {
                debug!(path = %path.display(), "native drag started");
                self.native_drag = Some(path.to_path_buf());
            }
            // The shell's in-window drag still runs.
            Err(PlatformError::NotSupported(what)) => {
                debug!(path = %path.display(), %what, "native drag unavailable");
            }
            Err(e) => self.report("Could not drag item", &e),
        }
    }

    /// A completed drag consumes the item only when the OS carried the
    /// file out; an in-window drag hands over at most the text body.
    fn end_drag(&mut self, path: &Path, dropped: bool) {
        let native = self.native_drag.take().is_some_and(|p| p == path);
        if dropped && native {
            self.delete_item(path);
        } else {
            debug!(path = %path.display(), dropped, native, "drag ended, item kept");
        }
    }

    fn notify(&self, message: impl Into<String>) {
        self.bus.publish(Notification::Notify(message.into()));
    }

    /// Log a failed command and tell the user about it.
    fn report(&self, context: &str, error: &dyn std::error::Error) {
        warn!(error = %error, "{context}");
        self.notify(format!("{context}: {error}"));
    }
}
