use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;

use multimind_common::{
    EventBus, Notification, PlatformError, Rect, ServiceDescriptor, Size, Subscriptions,
    SurfaceError,
};
use multimind_platform::HostServices;
use multimind_store::ScratchStore;
use multimind_webview::{
    LayoutCoordinator, PageLoadState, Surface, SurfaceFactory, SurfaceRegistry,
};
use tempfile::TempDir;

use super::*;

// =============================================================================
// FAKES
// =============================================================================

struct FakeSurface {
    key: String,
    bounds: Cell<Option<Rect>>,
    visible: Cell<bool>,
    reloads: Cell<u32>,
}

impl Surface for FakeSurface {
    fn key(&self) -> &str {
        &self.key
    }

    fn set_bounds(&self, bounds: Rect) -> Result<(), SurfaceError> {
        self.bounds.set(Some(bounds));
        Ok(())
    }

    fn set_visible(&self, visible: bool) -> Result<(), SurfaceError> {
        self.visible.set(visible);
        Ok(())
    }

    fn reload(&self) -> Result<(), SurfaceError> {
        self.reloads.set(self.reloads.get() + 1);
        Ok(())
    }
}

struct FakeFactory;

impl SurfaceFactory for FakeFactory {
    type Surface = FakeSurface;

    fn create(
        &mut self,
        service: &ServiceDescriptor,
        bounds: Rect,
    ) -> Result<FakeSurface, SurfaceError> {
        Ok(FakeSurface {
            key: service.key.clone(),
            bounds: Cell::new(Some(bounds)),
            visible: Cell::new(false),
            reloads: Cell::new(0),
        })
    }
}

#[derive(Default)]
struct HostLog {
    copied: Vec<String>,
    opened: Vec<PathBuf>,
    dragged: Vec<PathBuf>,
}

struct FakeHost {
    log: Rc<RefCell<HostLog>>,
    native_drag: bool,
}

impl HostServices for FakeHost {
    fn copy_text(&mut self, text: &str) -> Result<(), PlatformError> {
        self.log.borrow_mut().copied.push(text.to_string());
        Ok(())
    }

    fn open_path(&mut self, path: &Path) -> Result<(), PlatformError> {
        self.log.borrow_mut().opened.push(path.to_path_buf());
        Ok(())
    }

    fn start_drag(&mut self, path: &Path) -> Result<(), PlatformError> {
        if !self.native_drag {
            return Err(PlatformError::NotSupported("drag"));
        }
        self.log.borrow_mut().dragged.push(path.to_path_buf());
        Ok(())
    }
}

// =============================================================================
// FIXTURE
// =============================================================================

struct Fixture {
    tmp: TempDir,
    bridge: EventBridge<FakeFactory, FakeHost>,
    subs: Subscriptions,
    host: Rc<RefCell<HostLog>>,
    scratch: PathBuf,
}

fn services() -> Vec<ServiceDescriptor> {
    vec![
        ServiceDescriptor::new("gemini", "https://gemini.google.com/app", "Gemini"),
        ServiceDescriptor::new("chatgpt", "https://chatgpt.com/", "ChatGPT"),
        ServiceDescriptor::new("claude", "https://claude.ai/new", "Claude"),
    ]
}

fn fixture_with(native_drag: bool) -> Fixture {
    let tmp = tempfile::tempdir().unwrap();
    let scratch = tmp.path().join("temp-clipboard");
    let bus = Arc::new(EventBus::new(64));
    let subs = bus.subscribe_all();
    let host = Rc::new(RefCell::new(HostLog::default()));

    let bridge = EventBridge::new(
        services(),
        SurfaceRegistry::new(FakeFactory),
        LayoutCoordinator::new(65.0, 250.0, false),
        ScratchStore::new(&scratch, Arc::clone(&bus)),
        FakeHost {
            log: Rc::clone(&host),
            native_drag,
        },
        bus,
    );
    Fixture {
        tmp,
        bridge,
        subs,
        host,
        scratch,
    }
}

/// Bridge with a 1280x800 window and every surface created.
fn ready() -> Fixture {
    ready_with(false)
}

fn ready_with(native_drag: bool) -> Fixture {
    let mut fx = fixture_with(native_drag);
    fx.bridge.resize(Size::new(1280.0, 800.0));
    fx.bridge.create_surfaces().unwrap();
    fx
}

fn scratch_file(fx: &Fixture, name: &str, body: &str) -> PathBuf {
    std::fs::create_dir_all(&fx.scratch).unwrap();
    let path = fx.scratch.join(name);
    std::fs::write(&path, body).unwrap();
    path
}

fn drag(fx: &mut Fixture, path: &Path, dropped: bool) {
    ipc(fx, "begin_drag", serde_json::json!({ "path": path }));
    ipc(
        fx,
        "drag_ended",
        serde_json::json!({ "path": path, "dropped": dropped }),
    );
}

fn ipc(fx: &mut Fixture, kind: &str, payload: serde_json::Value) -> Vec<Outbound> {
    let body = serde_json::json!({ "kind": kind, "payload": payload }).to_string();
    fx.bridge.handle_ipc(&body)
}

fn loading_events(subs: &mut Subscriptions) -> Vec<bool> {
    subs.drain()
        .into_iter()
        .filter_map(|n| match n {
            Notification::LoadingStateChanged(b) => Some(b),
            _ => None,
        })
        .collect()
}

fn toasts(subs: &mut Subscriptions) -> Vec<String> {
    subs.drain()
        .into_iter()
        .filter_map(|n| match n {
            Notification::Notify(m) => Some(m),
            _ => None,
        })
        .collect()
}

fn store_changes(subs: &mut Subscriptions) -> usize {
    subs.drain()
        .into_iter()
        .filter(|n| *n == Notification::StoreChanged)
        .count()
}

// =============================================================================
// SURFACES AND LAYOUT
// =============================================================================

#[test]
fn create_surfaces_uses_current_layout() {
    let fx = ready();
    let registry = fx.bridge.registry();
    assert_eq!(registry.count(), 3);
    for surface in registry.surfaces() {
        assert_eq!(
            surface.bounds.get(),
            Some(Rect::new(65.0, 0.0, 1215.0, 800.0))
        );
    }
}

#[test]
fn show_command_activates_surface() {
    let mut fx = ready();
    ipc(&mut fx, "show_view", serde_json::json!({ "key": "chatgpt" }));
    assert_eq!(fx.bridge.active_key(), Some("chatgpt"));
    assert!(fx.bridge.registry().get("chatgpt").unwrap().visible.get());
}

#[test]
fn show_unknown_key_is_ignored() {
    let mut fx = ready();
    fx.bridge.show("gemini");
    assert!(!fx.bridge.show("copilot"));
    assert_eq!(fx.bridge.active_key(), Some("gemini"));
}

#[test]
fn show_reapplies_layout() {
    let mut fx = ready();
    for surface in fx.bridge.registry().surfaces() {
        surface.bounds.set(None);
    }
    fx.bridge.show("claude");
    assert!(fx
        .bridge
        .registry()
        .surfaces()
        .all(|s| s.bounds.get().is_some()));
}

#[test]
fn toggle_panel_resizes_every_surface() {
    let mut fx = ready();

    ipc(&mut fx, "toggle_panel", serde_json::json!({ "visible": true }));
    for s in fx.bridge.registry().surfaces() {
        assert_eq!(s.bounds.get().unwrap().width, 1280.0 - 65.0 - 250.0);
    }

    ipc(&mut fx, "toggle_panel", serde_json::json!({ "visible": false }));
    for s in fx.bridge.registry().surfaces() {
        assert_eq!(s.bounds.get().unwrap().width, 1280.0 - 65.0);
    }
}

#[test]
fn resize_after_window_closed_is_noop() {
    let mut fx = ready();
    fx.bridge.window_closed();
    fx.bridge.toggle_panel(true);
    for s in fx.bridge.registry().surfaces() {
        assert_eq!(s.bounds.get().unwrap().width, 1215.0);
    }
}

#[test]
fn reload_command_reloads_active() {
    let mut fx = ready();
    fx.bridge.show("claude");
    ipc(&mut fx, "reload_current_view", serde_json::Value::Null);
    assert_eq!(fx.bridge.registry().get("claude").unwrap().reloads.get(), 1);
    assert_eq!(fx.bridge.registry().get("gemini").unwrap().reloads.get(), 0);
}

#[test]
fn teardown_then_recreate() {
    let mut fx = ready();
    fx.bridge.show("gemini");
    assert_eq!(fx.bridge.teardown(), 3);
    assert_eq!(fx.bridge.active_key(), None);
    assert!(!fx.bridge.show("gemini"));
    fx.bridge.reload_active();

    assert_eq!(fx.bridge.create_surfaces().unwrap(), 3);
    assert!(fx.bridge.show("gemini"));
}

// =============================================================================
// LOADING EVENTS
// =============================================================================

#[test]
fn loading_events_from_active_surface_are_forwarded() {
    let mut fx = ready();
    fx.bridge.show("gemini");

    fx.bridge.on_page_load("gemini", PageLoadState::Started);
    fx.bridge.on_page_load("gemini", PageLoadState::Finished);

    assert_eq!(loading_events(&mut fx.subs), vec![true, false]);
}

#[test]
fn loading_events_from_inactive_surfaces_never_reach_shell() {
    let mut fx = ready();
    fx.bridge.show("gemini");

    for key in ["chatgpt", "claude", "shell", "unknown"] {
        fx.bridge.on_page_load(key, PageLoadState::Started);
        fx.bridge.on_page_load(key, PageLoadState::Finished);
    }

    assert!(loading_events(&mut fx.subs).is_empty());
}

#[test]
fn switching_silences_previous_surface() {
    let mut fx = ready();
    fx.bridge.show("gemini");
    fx.bridge.on_page_load("gemini", PageLoadState::Started);
    fx.bridge.show("claude");
    fx.bridge.on_page_load("gemini", PageLoadState::Finished);
    fx.bridge.on_page_load("claude", PageLoadState::Finished);

    assert_eq!(loading_events(&mut fx.subs), vec![true, false]);
}

#[test]
fn no_loading_events_before_any_show() {
    let mut fx = ready();
    fx.bridge.on_page_load("gemini", PageLoadState::Started);
    assert!(loading_events(&mut fx.subs).is_empty());
}

// =============================================================================
// SHELL HANDSHAKE
// =============================================================================

#[test]
fn shell_ready_replies_with_services_and_items() {
    let mut fx = ready();
    fx.bridge.show("claude");
    std::fs::create_dir_all(&fx.scratch).unwrap();
    std::fs::write(fx.scratch.join("Hi.txt"), "Hi").unwrap();

    let replies = ipc(&mut fx, "shell_ready", serde_json::Value::Null);

    assert_eq!(replies.len(), 2);
    match &replies[0] {
        Outbound::Services {
            services,
            active,
            panel_visible,
        } => {
            assert_eq!(services.len(), 3);
            assert_eq!(active.as_deref(), Some("claude"));
            assert!(!panel_visible);
        }
        other => panic!("expected services, got {other:?}"),
    }
    match &replies[1] {
        Outbound::ScratchItems { items } => {
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].name, "Hi.txt");
        }
        other => panic!("expected scratch items, got {other:?}"),
    }
}

#[test]
fn list_on_missing_store_is_empty() {
    let mut fx = ready();
    let replies = ipc(&mut fx, "list_scratch_items", serde_json::Value::Null);
    assert_eq!(replies, vec![Outbound::ScratchItems { items: vec![] }]);
    assert!(toasts(&mut fx.subs).is_empty());
}

#[test]
fn rejected_ipc_has_no_effect() {
    let mut fx = ready();
    fx.bridge.show("gemini");

    assert!(fx.bridge.handle_ipc("{oops").is_empty());
    assert!(ipc(&mut fx, "eval", serde_json::json!("alert(1)")).is_empty());
    assert!(ipc(&mut fx, "show_view", serde_json::json!({})).is_empty());

    assert_eq!(fx.bridge.active_key(), Some("gemini"));
    assert!(fx.subs.drain().is_empty());
}

// =============================================================================
// SCRATCH ITEMS
// =============================================================================

#[test]
fn add_text_item_saves_and_notifies() {
    let mut fx = ready();
    let replies = ipc(
        &mut fx,
        "add_scratch_item",
        serde_json::json!({ "kind": "text", "content": "Hello, world!" }),
    );

    assert!(replies.is_empty());
    assert_eq!(store_changes(&mut fx.subs), 1);
    assert_eq!(
        std::fs::read_to_string(fx.scratch.join("Hello....txt")).unwrap(),
        "Hello, world!"
    );
}

#[test]
fn add_empty_text_reports_error() {
    let mut fx = ready();
    ipc(
        &mut fx,
        "add_scratch_item",
        serde_json::json!({ "kind": "text", "content": "" }),
    );
    let msgs = toasts(&mut fx.subs);
    assert_eq!(msgs.len(), 1);
    assert!(msgs[0].starts_with("Could not save item"));
}

#[test]
fn add_file_item_copies_source() {
    let mut fx = ready();
    let source = fx.tmp.path().join("report.pdf");
    std::fs::write(&source, b"%PDF").unwrap();

    ipc(
        &mut fx,
        "add_scratch_item",
        serde_json::json!({ "kind": "file", "content": source, "name": "report.pdf" }),
    );

    assert_eq!(std::fs::read(fx.scratch.join("report.pdf")).unwrap(), b"%PDF");
}

#[test]
fn dropped_files_are_added() {
    let mut fx = ready();
    let a = fx.tmp.path().join("a.png");
    let b = fx.tmp.path().join("b.zip");
    std::fs::write(&a, b"a").unwrap();
    std::fs::write(&b, b"b").unwrap();

    fx.bridge.on_files_dropped(&[a, b]);

    assert!(fx.scratch.join("a.png").exists());
    assert!(fx.scratch.join("b.zip").exists());
    assert_eq!(store_changes(&mut fx.subs), 2);
}

#[test]
fn delete_missing_item_still_notifies() {
    let mut fx = ready();
    let path = fx.scratch.join("ghost.txt");
    ipc(&mut fx, "delete_scratch_item", serde_json::json!({ "path": path }));
    assert_eq!(store_changes(&mut fx.subs), 1);
}

#[test]
fn delete_outside_store_is_refused() {
    let mut fx = ready();
    let outside = fx.tmp.path().join("keep.txt");
    std::fs::write(&outside, "keep").unwrap();

    ipc(&mut fx, "delete_scratch_item", serde_json::json!({ "path": outside }));

    assert!(outside.exists());
    let msgs = toasts(&mut fx.subs);
    assert_eq!(msgs.len(), 1);
    assert!(msgs[0].starts_with("Could not delete item"));
}

#[test]
fn read_text_copies_to_clipboard_and_toasts() {
    let mut fx = ready();
    std::fs::create_dir_all(&fx.scratch).unwrap();
    let path = fx.scratch.join("Hello....txt");
    std::fs::write(&path, "Hello, world!").unwrap();

    ipc(&mut fx, "read_scratch_text", serde_json::json!({ "path": path }));

    assert_eq!(fx.host.borrow().copied, vec!["Hello, world!".to_string()]);
    assert_eq!(toasts(&mut fx.subs), vec![TEXT_COPIED.to_string()]);
}

#[test]
fn read_missing_text_reports_error_without_copy() {
    let mut fx = ready();
    let path = fx.scratch.join("gone.txt");
    ipc(&mut fx, "read_scratch_text", serde_json::json!({ "path": path }));

    assert!(fx.host.borrow().copied.is_empty());
    let msgs = toasts(&mut fx.subs);
    assert_eq!(msgs.len(), 1);
    assert!(msgs[0].starts_with("Could not read item"));
}

#[test]
fn open_item_uses_host() {
    let mut fx = ready();
    let path = fx.scratch.join("report.pdf");
    ipc(&mut fx, "open_scratch_item", serde_json::json!({ "path": path }));
    assert_eq!(fx.host.borrow().opened, vec![path]);
}

#[test]
fn open_outside_store_is_refused() {
    let mut fx = ready();
    ipc(
        &mut fx,
        "open_scratch_item",
        serde_json::json!({ "path": "/etc/passwd" }),
    );
    assert!(fx.host.borrow().opened.is_empty());
    assert_eq!(toasts(&mut fx.subs).len(), 1);
}

// =============================================================================
// DRAG-OUT
// =============================================================================

#[test]
fn native_drop_deletes_item() {
    let mut fx = ready_with(true);
    let path = scratch_file(&fx, "Hi.txt", "Hi");

    drag(&mut fx, &path, true);

    assert_eq!(fx.host.borrow().dragged, vec![path.clone()]);
    assert!(!path.exists());
    assert_eq!(store_changes(&mut fx.subs), 1);
}

#[test]
fn drop_without_native_drag_keeps_item() {
    let mut fx = ready();
    let path = scratch_file(&fx, "Hi.txt", "Hi");

    drag(&mut fx, &path, true);

    assert!(fx.host.borrow().dragged.is_empty());
    assert!(path.exists());
    assert_eq!(store_changes(&mut fx.subs), 0);
}

#[test]
fn drop_of_other_item_keeps_both() {
    let mut fx = ready_with(true);
    let dragged = scratch_file(&fx, "Hi.txt", "Hi");
    let other = scratch_file(&fx, "Yo.txt", "Yo");

    ipc(&mut fx, "begin_drag", serde_json::json!({ "path": dragged }));
    ipc(
        &mut fx,
        "drag_ended",
        serde_json::json!({ "path": other, "dropped": true }),
    );

    assert!(dragged.exists());
    assert!(other.exists());
}

#[test]
fn native_drag_counts_once() {
    let mut fx = ready_with(true);
    let path = scratch_file(&fx, "Hi.txt", "Hi");

    ipc(&mut fx, "begin_drag", serde_json::json!({ "path": path }));
    ipc(
        &mut fx,
        "drag_ended",
        serde_json::json!({ "path": path, "dropped": false }),
    );
    ipc(
        &mut fx,
        "drag_ended",
        serde_json::json!({ "path": path, "dropped": true }),
    );

    assert!(path.exists());
}

#[test]
fn cancelled_drag_keeps_item() {
    let mut fx = ready_with(true);
    let path = scratch_file(&fx, "Hi.txt", "Hi");

    drag(&mut fx, &path, false);

    assert!(path.exists());
    assert!(fx.subs.drain().is_empty());
}

#[test]
fn drag_without_native_support_is_silent() {
    let mut fx = ready();
    let path = fx.scratch.join("Hi.txt");
    ipc(&mut fx, "begin_drag", serde_json::json!({ "path": path }));
    assert!(toasts(&mut fx.subs).is_empty());
}

#[test]
fn native_drag_is_started_when_available() {
    let mut fx = fixture_with(true);
    let path = fx.scratch.join("Hi.txt");
    ipc(&mut fx, "begin_drag", serde_json::json!({ "path": path }));
    assert_eq!(fx.host.borrow().dragged, vec![path]);
}
