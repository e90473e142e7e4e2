//! The bundled shell UI: left rail, scratch panel, progress bar, toasts.

use std::path::Path;

use crate::content::ContentProvider;

/// Custom protocol scheme serving the shell.
pub const PROTOCOL: &str = "multimind";

/// Surface key used for events from the shell webview.
pub const SHELL_KEY: &str = "shell";

/// Entry point of the shell UI.
///
/// WebView2 serves custom protocols as `http://<scheme>.localhost/`.
#[cfg(target_os = "windows")]
pub const SHELL_URL: &str = "http://multimind.localhost/shell/index.html";
#[cfg(not(target_os = "windows"))]
pub const SHELL_URL: &str = "multimind://localhost/shell/index.html";

const BUNDLED: &[(&str, &str, &str)] = &[
    (
        "shell/index.html",
        "text/html",
        include_str!("../assets/shell/index.html"),
    ),
    (
        "shell/shell.css",
        "text/css",
        include_str!("../assets/shell/shell.css"),
    ),
    (
        "shell/shell.js",
        "application/javascript",
        include_str!("../assets/shell/shell.js"),
    ),
];

/// Content provider with the bundled shell assets, optionally overlaid by
/// files from `dev_dir`.
pub fn shell_content(dev_dir: Option<&Path>) -> ContentProvider {
    let mut provider = match dev_dir {
        Some(dir) => ContentProvider::new().with_base_dir(dir),
        None => ContentProvider::new(),
    };
    for (path, mime, data) in BUNDLED {
        provider.insert(*path, *mime, data.as_bytes());
    }
    provider
}

/// Strip the scheme and host from a request URI, leaving the asset path.
pub fn request_path(uri: &str) -> &str {
    uri.strip_prefix("multimind://localhost/")
        .or_else(|| uri.strip_prefix("multimind://localhost"))
        .or_else(|| uri.strip_prefix("http://multimind.localhost/"))
        .or_else(|| uri.strip_prefix("https://multimind.localhost/"))
        .or_else(|| uri.strip_prefix("multimind:///"))
        .or_else(|| uri.strip_prefix("multimind://"))
        .unwrap_or("")
}
