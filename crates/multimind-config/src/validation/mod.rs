//! Range and cross-field checks on a parsed config.
//!
//! Every problem is collected, so one log line names all of them.

mod layout;
mod misc;


use std::fmt::Display;
use std::ops::RangeInclusive;

use crate::schema::MultimindConfig;
use multimind_common::ConfigError;

pub fn validate(config: &MultimindConfig) -> Result<(), ConfigError> {
    let mut errors = Vec::new();

    layout::validate_window(&mut errors, config);
    layout::validate_layout(&mut errors, config);
    misc::validate_startup(&mut errors, config);
    misc::validate_scratch(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors))
    }
}

/// Record `name = value` as an error unless it lies in `range`. NaN never does.
fn check_range<T: PartialOrd + Display>(
    errors: &mut Vec<String>,
    name: &str,
    value: T,
    range: RangeInclusive<T>,
) {
    if !range.contains(&value) {
        errors.push(format!(
            "{name} = {value} is out of range [{}, {}]",
            range.start(),
            range.end()
        ));
    }
}
