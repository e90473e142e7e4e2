//! Reading `config.toml`, and writing the documented template on first run.

mod template;


use std::path::{Path, PathBuf};

use multimind_common::ConfigError;
use tracing::info;

use crate::schema::MultimindConfig;

pub use template::default_config_toml;

const CONFIG_FILE: &str = "config.toml";

/// `<platform config dir>/multimind/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(base.join("multimind").join(CONFIG_FILE))
}

/// Parse the file at `path`. Absent fields take their defaults.
pub fn load_from_path(path: &Path) -> Result<MultimindConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::io(path, e),
    })?;

    let config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        reason: e.to_string().trim_end().to_string(),
    })?;

    info!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Parse the file at `path`, writing the template there first if it is
/// missing. A fresh template yields the default config.
pub fn load_or_create(path: &Path) -> Result<MultimindConfig, ConfigError> {
    match load_from_path(path) {
        Err(ConfigError::FileNotFound(_)) => {
            write_template(path)?;
            Ok(MultimindConfig::default())
        }
        other => other,
    }
}

/// [`load_or_create`] at the platform default path.
pub fn load_default() -> Result<MultimindConfig, ConfigError> {
    load_or_create(&default_config_path()?)
}

fn write_template(path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::io(dir, e))?;
    }
    std::fs::write(path, default_config_toml()).map_err(|e| ConfigError::io(path, e))?;
    info!(path = %path.display(), "default config written");
    Ok(())
}
