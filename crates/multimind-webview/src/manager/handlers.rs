use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, SurfaceEvent};

use super::{push_event, EventSink, SurfaceManager};

// =============================================================================
// NAVIGATION POLICY
// =============================================================================

/// Which URLs a surface may navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationPolicy {
    /// The shell: bundled content only.
    Shell,
    /// A chat service: the open web, but never local files or the shell.
    Service,
}

/// Allowed URL prefixes for the shell.
pub const SHELL_NAV_PREFIXES: &[&str] = &[
    "multimind://",
    // WebView2 rewrites custom protocols: multimind://localhost/… → http://multimind.localhost/…
    "http://multimind.localhost",
    "about:blank",
];

/// Allowed URL prefixes for service surfaces.
pub const SERVICE_NAV_PREFIXES: &[&str] = &["https://", "http://", "about:", "blob:"];

impl NavigationPolicy {
    fn prefixes(self) -> &'static [&'static str] {
        match self {
            Self::Shell => SHELL_NAV_PREFIXES,
            Self::Service => SERVICE_NAV_PREFIXES,
        }
    }

    /// Check whether a URL is allowed by this policy.
    pub fn allows(self, url: &str) -> bool {
        if self == Self::Service && url.starts_with("http://multimind.localhost") {
            return false;
        }
        self.prefixes().iter().any(|prefix| url.starts_with(prefix))
    }
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl SurfaceManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        key: &str,
    ) -> WebViewBuilder<'a> {
        let key = key.to_string();
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(key = %key, body_len = body.len(), "IPC message rejected: invalid JSON");
                return;
            }

            debug!(key = %key, body_len = body.len(), "IPC message from JS");
            push_event(
                &events,
                SurfaceEvent::IpcMessage {
                    key: key.clone(),
                    body,
                },
            );
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        key: &str,
    ) -> WebViewBuilder<'a> {
        let key = key.to_string();
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(key = %key, ?state, url = %url, "page load");
            push_event(
                &events,
                SurfaceEvent::PageLoad {
                    key: key.clone(),
                    state,
                    url,
                },
            );
        })
    }

    pub(super) fn attach_drag_drop_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        key: &str,
    ) -> WebViewBuilder<'a> {
        let key = key.to_string();
        builder.with_drag_drop_handler(move |event| match event {
            wry::DragDropEvent::Drop { paths, .. } if !paths.is_empty() => {
                debug!(key = %key, count = paths.len(), "files dropped");
                push_event(
                    &events,
                    SurfaceEvent::FilesDropped {
                        key: key.clone(),
                        paths,
                    },
                );
                true
            }
            _ => false,
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        policy: NavigationPolicy,
        key: &str,
    ) -> WebViewBuilder<'a> {
        let key = key.to_string();
        builder.with_navigation_handler(move |url| {
            if !policy.allows(&url) {
                warn!(key = %key, url = %url, "navigation blocked");
                return false;
            }
            debug!(key = %key, url = %url, "navigation allowed");
            true
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_allows_bundled_content() {
        let p = NavigationPolicy::Shell;
        assert!(p.allows("multimind://localhost/shell/index.html"));
        assert!(p.allows("http://multimind.localhost/shell/index.html"));
        assert!(p.allows("about:blank"));
    }

    #[test]
    fn shell_blocks_the_web() {
        let p = NavigationPolicy::Shell;
        assert!(!p.allows("https://chatgpt.com/"));
        assert!(!p.allows("http://localhost:8080"));
        assert!(!p.allows("file:///etc/passwd"));
        assert!(!p.allows("javascript:alert(1)"));
        assert!(!p.allows(""));
    }

    #[test]
    fn service_allows_web_pages() {
        let p = NavigationPolicy::Service;
        assert!(p.allows("https://gemini.google.com/app"));
        assert!(p.allows("https://accounts.google.com/signin"));
        assert!(p.allows("http://example.com/redirect"));
        assert!(p.allows("about:blank"));
        assert!(p.allows("blob:https://claude.ai/1234"));
    }

    #[test]
    fn service_blocks_local_and_shell() {
        let p = NavigationPolicy::Service;
        assert!(!p.allows("file:///Users/me/.ssh/id_rsa"));
        assert!(!p.allows("multimind://localhost/shell/index.html"));
        assert!(!p.allows("http://multimind.localhost/shell/index.html"));
        assert!(!p.allows("javascript:void(0)"));
        assert!(!p.allows("data:text/html,<h1>x</h1>"));
        assert!(!p.allows("not-a-url"));
    }
}
