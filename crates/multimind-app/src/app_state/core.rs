//! MultimindApp struct definition and constructor.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use multimind_common::{EventBus, Subscriptions};
use multimind_config::schema::WebViewSettings;
use multimind_config::{built_in_services, MultimindConfig};
use multimind_platform::SystemHost;
use multimind_store::ScratchStore;
use multimind_webview::shell::shell_content;
use multimind_webview::{
    LayoutCoordinator, SurfaceManager, SurfaceRegistry, SurfaceSettings, WebSurface,
    WebSurfaceFactory,
};

use crate::bridge::EventBridge;

use super::types::AppBridge;

/// Top-level application state.
pub struct MultimindApp {
    pub(super) config: MultimindConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) shell: Option<WebSurface>,

    // Surfaces and the components behind the shell
    pub(super) manager: SurfaceManager,
    pub(super) bridge: AppBridge,
    pub(super) subscriptions: Subscriptions,

    /// Shown when the window is (re-)created; tracks the last active key.
    pub(super) startup_service: String,

    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl MultimindApp {
    pub fn new(
        config: MultimindConfig,
        scratch_dir: PathBuf,
        partitions_dir: PathBuf,
        startup_service: String,
    ) -> Self {
        let bus = Arc::new(EventBus::default());
        let subscriptions = bus.subscribe_all();

        let mut manager = SurfaceManager::new(partitions_dir, surface_settings(&config.webview));
        manager.set_content_provider(shell_content(shell_dir(&config.webview)));

        let layout = LayoutCoordinator::new(
            config.layout.left_rail_width,
            config.layout.right_panel_width,
            config.layout.panel_visible,
        );
        let bridge = EventBridge::new(
            built_in_services(),
            SurfaceRegistry::new(WebSurfaceFactory::detached(manager.clone())),
            layout,
            ScratchStore::new(scratch_dir, Arc::clone(&bus)),
            SystemHost::new(),
            bus,
        );

        Self {
            config,
            window: None,
            shell: None,
            manager,
            bridge,
            subscriptions,
            startup_service,
            should_exit: false,
            last_poll: Instant::now(),
        }
    }
}

pub(super) fn surface_settings(webview: &WebViewSettings) -> SurfaceSettings {
    SurfaceSettings {
        devtools: webview.devtools,
        user_agent: Some(webview.user_agent.trim())
            .filter(|ua| !ua.is_empty())
            .map(str::to_string),
    }
}

fn shell_dir(webview: &WebViewSettings) -> Option<&Path> {
    Some(webview.shell_dir.as_str())
        .filter(|dir| !dir.is_empty())
        .map(Path::new)
}
