use std::path::PathBuf;

/// Failures while reading or creating `config.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("could not determine the config directory")]
    NoConfigDir,

    #[error("config io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error in {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    /// Every out-of-range value found, in section order.
    #[error("config validation error: {}", .0.join("; "))]
    ValidationError(Vec<String>),
}

impl ConfigError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("could not determine the {0} directory")]
    UnknownDir(&'static str),

    #[error("failed to create {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot open {path}: {reason}")]
    Open { path: PathBuf, reason: String },

    #[error("drag failed: {0}")]
    Drag(String),

    #[error("not supported: {0}")]
    NotSupported(&'static str),
}

/// Failures of the scratch store.
///
/// Missing resources are not errors: an absent store directory lists as
/// empty and deleting an absent item succeeds.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid item name: {0:?}")]
    InvalidName(String),

    #[error("path is outside the scratch store: {0}")]
    OutsideStore(PathBuf),

    #[error("item is not valid UTF-8 text: {0}")]
    NotText(PathBuf),

    #[error("nothing to save: text is empty")]
    EmptyText,
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("surface creation failed for '{key}': {reason}")]
    Create { key: String, reason: String },

    #[error("surface operation failed: {0}")]
    Operation(String),

    #[error("host window is gone")]
    WindowGone,
}

#[derive(Debug, thiserror::Error)]
pub enum MultimindError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
