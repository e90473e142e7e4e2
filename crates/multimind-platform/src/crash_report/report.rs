use std::any::Any;
use std::backtrace::Backtrace;
use std::io;
use std::panic::PanicHookInfo;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::paths::crash_report_dir;

use super::sanitize::sanitize_report_text;

/// What is written to `crash-reports/crash_<time>.json`.
///
/// Every free-text field passes through [`sanitize_report_text`].
#[derive(Debug, Serialize)]
pub struct CrashReport {
    pub timestamp: String,
    pub version: &'static str,
    pub os: &'static str,
    pub arch: &'static str,
    pub thread: Option<String>,
    pub message: String,
    pub location: Option<String>,
    pub backtrace: String,
    #[serde(skip)]
    file_stamp: String,
}

impl CrashReport {
    pub fn new(
        message: &str,
        location: Option<&str>,
        backtrace: &str,
        home: Option<&Path>,
    ) -> Self {
        let now = chrono::Utc::now();
        Self {
            timestamp: now.to_rfc3339(),
            version: env!("CARGO_PKG_VERSION"),
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
            thread: std::thread::current().name().map(str::to_string),
            message: sanitize_report_text(message, home),
            location: location.map(|l| sanitize_report_text(l, home)),
            backtrace: sanitize_report_text(backtrace, home),
            file_stamp: now.format("%Y%m%d_%H%M%S").to_string(),
        }
    }

    pub fn from_panic(info: &PanicHookInfo) -> Self {
        let location = info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()));
        Self::new(
            &payload_message(info.payload()),
            location.as_deref(),
            &Backtrace::force_capture().to_string(),
            dirs::home_dir().as_deref(),
        )
    }

    /// Write the report into `dir` as pretty JSON, readable by the owner only.
    pub fn write_to(&self, dir: &Path) -> io::Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(format!("crash_{}.json", self.file_stamp));
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        std::fs::write(&path, json)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600))?;
        }

        Ok(path)
    }
}

fn payload_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Panic-hook entry point. Returns where the report went, if anywhere;
/// failures are swallowed since the process is already going down.
pub fn write_crash_report(info: &PanicHookInfo) -> Option<PathBuf> {
    let dir = crash_report_dir().ok()?;
    CrashReport::from_panic(info).write_to(&dir).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_message_handles_common_payloads() {
        let s: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(payload_message(&*s), "boom");

        let s: Box<dyn Any + Send> = Box::new(String::from("bad index"));
        assert_eq!(payload_message(&*s), "bad index");

        let s: Box<dyn Any + Send> = Box::new(42_u8);
        assert_eq!(payload_message(&*s), "unknown panic payload");
    }

    #[test]
    fn report_is_written_sanitized() {
        let tmp = tempfile::tempdir().unwrap();
        let home = Path::new("/home/alice");
        let report = CrashReport::new(
            "cannot read /home/alice/.local/share/multimind/temp-clipboard/a.txt",
            Some("crates/multimind-store/src/store.rs:10:5"),
            "0: main",
            Some(home),
        );

        let path = report.write_to(&tmp.path().join("crash-reports")).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

        assert_eq!(
            json["message"],
            "cannot read ~/.local/share/multimind/temp-clipboard/a.txt"
        );
        assert_eq!(json["location"], "crates/multimind-store/src/store.rs:10:5");
        assert_eq!(json["os"], std::env::consts::OS);
        assert!(json.get("file_stamp").is_none());
        assert!(path.file_name().unwrap().to_str().unwrap().starts_with("crash_"));
    }

    #[cfg(unix)]
    #[test]
    fn report_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let path = CrashReport::new("x", None, "", None)
            .write_to(tmp.path())
            .unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
