//! JSON crash reports written from the panic hook.

mod report;
mod sanitize;

pub use report::{write_crash_report, CrashReport};
pub use sanitize::sanitize_report_text;
