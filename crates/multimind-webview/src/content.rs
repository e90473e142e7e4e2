//! Local content serving via custom protocol.
//!
//! Registers a `multimind://` custom protocol so that the shell UI loads
//! from bundled assets without a local HTTP server.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Serves assets for the `multimind://` protocol.
///
/// Bundled assets are registered in memory. An optional base directory is
/// consulted first, so a checkout of the shell UI can be edited live.
#[derive(Debug, Default)]
pub struct ContentProvider {
    /// Directory searched before the bundled assets.
    base_dir: Option<PathBuf>,
    /// In-memory assets: path -> (mime, data).
    bundled: HashMap<String, (String, Vec<u8>)>,
}

impl ContentProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve assets from `base_dir` before the bundled ones.
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    /// Register an in-memory asset.
    pub fn insert(
        &mut self,
        path: impl Into<String>,
        mime: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) {
        self.bundled.insert(path.into(), (mime.into(), data.into()));
    }

    /// Resolve a request path to MIME type and content bytes.
    pub fn resolve(&self, path: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let clean = path.split(['?', '#']).next().unwrap_or("");
        let clean = clean.trim_start_matches('/');

        if let Some(found) = self.resolve_from_dir(clean) {
            return Some(found);
        }
        self.bundled
            .get(clean)
            .map(|(mime, data)| (Cow::Borrowed(mime.as_str()), Cow::Borrowed(data.as_slice())))
    }

    fn resolve_from_dir(&self, clean: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let base_dir = self.base_dir.as_ref()?;
        let file_path = base_dir.join(clean);

        // Canonicalize both sides so `..` and symlinks cannot escape the base.
        let canonical_base = std::fs::canonicalize(base_dir).ok()?;
        let canonical_file = std::fs::canonicalize(&file_path).ok()?;
        if !canonical_file.starts_with(&canonical_base) || !canonical_file.is_file() {
            return None;
        }

        let data = std::fs::read(&canonical_file).ok()?;
        let mime = mime_from_extension(&file_path);
        Some((Cow::Borrowed(mime), Cow::Owned(data)))
    }

    /// The development override directory, if any.
    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }
}

/// Guess MIME type from file extension.
pub(crate) fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("woff2") => "font/woff2",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}
