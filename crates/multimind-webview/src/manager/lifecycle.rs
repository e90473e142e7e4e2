use std::borrow::Cow;
use std::sync::Arc;

use multimind_common::{Rect, ServiceDescriptor, SurfaceError};
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};
use wry::http::{header, Response, StatusCode};
use wry::raw_window_handle::HasWindowHandle;
use wry::{WebContext, WebViewBuilder};

use crate::bounds::rect_to_wry;
use crate::content::ContentProvider;
use crate::ipc::IPC_INIT_SCRIPT;
use crate::shell::{request_path, PROTOCOL, SHELL_KEY, SHELL_URL};

use super::handle::WebSurface;
use super::handlers::NavigationPolicy;
use super::SurfaceManager;

impl SurfaceManager {
    /// Create a hidden surface for `service` as a child of `window`.
    ///
    /// The surface stores cookies and site data in its own partition and
    /// starts loading the service URL immediately. WKWebView ignores the
    /// data directory, so on macOS the partition is a data store keyed by
    /// [`data_store_id`].
    pub fn create_service_surface<W: HasWindowHandle>(
        &self,
        window: &W,
        service: &ServiceDescriptor,
        bounds: Rect,
    ) -> Result<WebSurface, SurfaceError> {
        let partition = self.partition_dir(&service.key);
        let mut context = WebContext::new(Some(partition.clone()));

        let mut builder = WebViewBuilder::with_web_context(&mut context)
            .with_url(service.url.as_str())
            .with_bounds(rect_to_wry(&bounds))
            .with_visible(false)
            .with_devtools(self.settings.devtools)
            .with_clipboard(true)
            .with_autoplay(true)
            .with_focused(false);

        if let Some(ua) = &self.settings.user_agent {
            builder = builder.with_user_agent(ua.as_str());
        }

        #[cfg(target_os = "macos")]
        {
            use wry::WebViewBuilderExtDarwin;
            builder = builder.with_data_store_identifier(data_store_id(&service.key));
        }

        builder = Self::attach_page_load_handler(builder, self.event_sink(), &service.key);
        builder = Self::attach_navigation_handler(builder, NavigationPolicy::Service, &service.key);

        let webview = builder
            .build_as_child(window)
            .map_err(|e| SurfaceError::Create {
                key: service.key.clone(),
                reason: e.to_string(),
            })?;

        info!(
            key = %service.key,
            url = %service.url,
            partition = %partition.display(),
            "service surface created"
        );
        Ok(WebSurface::new(service.key.clone(), webview, Some(context)))
    }

    /// Create the shell webview covering `bounds` (normally the whole window).
    ///
    /// The shell is the only surface with the IPC bridge and the native
    /// file-drop handler.
    pub fn create_shell<W: HasWindowHandle>(
        &self,
        window: &W,
        bounds: Rect,
    ) -> Result<WebSurface, SurfaceError> {
        let mut builder = WebViewBuilder::new()
            .with_url(SHELL_URL)
            .with_bounds(rect_to_wry(&bounds))
            .with_devtools(self.settings.devtools)
            .with_focused(true)
            .with_initialization_script(IPC_INIT_SCRIPT);

        builder = Self::attach_ipc_handler(builder, self.event_sink(), SHELL_KEY);
        builder = Self::attach_page_load_handler(builder, self.event_sink(), SHELL_KEY);
        builder = Self::attach_drag_drop_handler(builder, self.event_sink(), SHELL_KEY);
        builder = Self::attach_navigation_handler(builder, NavigationPolicy::Shell, SHELL_KEY);
        builder = self.attach_custom_protocol(builder);

        let webview = builder
            .build_as_child(window)
            .map_err(|e| SurfaceError::Create {
                key: SHELL_KEY.to_string(),
                reason: e.to_string(),
            })?;

        debug!(url = SHELL_URL, "shell surface created");
        Ok(WebSurface::new(SHELL_KEY.to_string(), webview, None))
    }

    fn attach_custom_protocol<'a>(&self, builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        let Some(provider) = &self.content_provider else {
            warn!("no content provider; the shell will not load");
            return builder;
        };
        let cp = Arc::clone(provider);
        builder.with_custom_protocol(PROTOCOL.to_string(), move |_id, request| {
            let uri = request.uri().to_string();
            serve_asset(&cp, request_path(&uri))
        })
    }
}

/// Stable WebKit data store identifier for a service key.
///
/// The bytes form a UUID (version 8, RFC 4122 variant) derived from the
/// key, so a service finds its cookies again on the next launch.
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
pub(crate) fn data_store_id(key: &str) -> [u8; 16] {
    let digest = Sha256::new()
        .chain_update(b"multimind/partition/")
        .chain_update(key.as_bytes())
        .finalize();
    let mut id = [0u8; 16];
    id.copy_from_slice(&digest[..16]);
    id[6] = (id[6] & 0x0f) | 0x80;
    id[8] = (id[8] & 0x3f) | 0x80;
    id
}

fn serve_asset(cp: &ContentProvider, path: &str) -> Response<Cow<'static, [u8]>> {
    let (status, mime, body) = match cp.resolve(path) {
        Some((mime, data)) => (StatusCode::OK, mime.into_owned(), data.into_owned()),
        None => {
            warn!(path = %path, "custom protocol: asset not found");
            (
                StatusCode::NOT_FOUND,
                "text/plain".to_string(),
                b"Not Found".to_vec(),
            )
        }
    };
    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, mime)
        .body(Cow::Owned(body))
        .unwrap_or_else(|e| {
            warn!(path = %path, error = %e, "custom protocol: bad response");
            let mut response = Response::new(Cow::Borrowed(&b""[..]));
            *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            response
        })
}
