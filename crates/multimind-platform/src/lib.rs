//! Operating-system integration: paths, clipboard, default-app launching,
//! native drag, and crash reports.

pub mod crash_report;
pub mod host;
pub mod opener;
pub mod paths;

pub use host::{HostServices, SystemHost};
pub use opener::open_path;
pub use paths::{
    config_dir, crash_report_dir, data_dir, ensure_dirs, log_dir, partitions_dir, scratch_dir,
};
