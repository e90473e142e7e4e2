//! Startup and scratch store validation.

use crate::schema::MultimindConfig;
use crate::services::is_known_service;

pub(crate) fn validate_startup(errors: &mut Vec<String>, config: &MultimindConfig) {
    let key = &config.startup.default_service;
    if !is_known_service(key) {
        errors.push(format!("startup.default_service = {key:?} is not a known service"));
    }
}

/// The scratch directory is a single path component under the data dir.
pub(crate) fn validate_scratch(errors: &mut Vec<String>, config: &MultimindConfig) {
    let name = &config.scratch.dir_name;
    let bad = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', ':']);
    if bad {
        errors.push(format!(
            "scratch.dir_name = {name:?} must be a single directory name"
        ));
    }
}
