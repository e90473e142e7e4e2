//! Where MultiMind keeps its files.
//!
//! | dir           | location                                  |
//! |---------------|-------------------------------------------|
//! | config        | `dirs::config_dir()/multimind`            |
//! | data          | `dirs::data_dir()/multimind`              |
//! | scratch store | `<data>/<scratch.dir_name>`               |
//! | partitions    | `<data>/partitions/<service key>`         |
//! | crash reports | `<data>/logs/crash-reports`               |

use std::path::PathBuf;

use multimind_common::PlatformError;

const APP_DIR: &str = "multimind";

fn app_dir(
    base: fn() -> Option<PathBuf>,
    kind: &'static str,
) -> Result<PathBuf, PlatformError> {
    base()
        .map(|dir| dir.join(APP_DIR))
        .ok_or(PlatformError::UnknownDir(kind))
}

pub fn config_dir() -> Result<PathBuf, PlatformError> {
    app_dir(dirs::config_dir, "config")
}

pub fn data_dir() -> Result<PathBuf, PlatformError> {
    app_dir(dirs::data_dir, "data")
}

pub fn scratch_dir(dir_name: &str) -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join(dir_name))
}

/// Root of the per-service browsing partitions.
pub fn partitions_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("partitions"))
}

pub fn log_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("logs"))
}

pub fn crash_report_dir() -> Result<PathBuf, PlatformError> {
    Ok(log_dir()?.join("crash-reports"))
}

/// Create every directory above that does not exist yet.
pub fn ensure_dirs(scratch_dir_name: &str) -> Result<(), PlatformError> {
    for dir in [
        config_dir()?,
        scratch_dir(scratch_dir_name)?,
        partitions_dir()?,
        crash_report_dir()?,
    ] {
        std::fs::create_dir_all(&dir)
            .map_err(|source| PlatformError::CreateDir { path: dir, source })?;
    }
    Ok(())
}
