use std::path::Path;

use multimind_common::PlatformError;
use tracing::info;

/// Open a file with the operating system's default handler.
pub fn open_path(path: &Path) -> Result<(), PlatformError> {
    if !path.exists() {
        return Err(PlatformError::Open {
            path: path.to_path_buf(),
            reason: "does not exist".into(),
        });
    }
    open::that_detached(path).map_err(|e| PlatformError::Open {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    info!(path = %path.display(), "opened with default handler");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_missing_file_fails_without_spawning() {
        let err = open_path(Path::new("/nonexistent/multimind/item.pdf")).unwrap_err();
        assert!(matches!(err, PlatformError::Open { .. }));
        assert!(err.to_string().contains("does not exist"));
    }
}
