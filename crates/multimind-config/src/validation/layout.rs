//! Window and layout validation.

use crate::schema::MultimindConfig;

use super::check_range;

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &MultimindConfig) {
    let w = &config.window;
    check_range(errors, "window.min_width", w.min_width, 400..=7680);
    check_range(errors, "window.min_height", w.min_height, 300..=4320);
    check_range(errors, "window.width", w.width, w.min_width..=7680);
    check_range(errors, "window.height", w.height, w.min_height..=4320);
}

/// The rails must leave room for a surface at the minimum window width.
pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &MultimindConfig) {
    let l = &config.layout;
    check_range(errors, "layout.left_rail_width", l.left_rail_width, 40.0..=200.0);
    check_range(errors, "layout.right_panel_width", l.right_panel_width, 150.0..=600.0);

    let chrome = l.left_rail_width + l.right_panel_width;
    let min_width = f64::from(config.window.min_width);
    if chrome >= min_width {
        errors.push(format!(
            "layout rails ({chrome}) leave no room at window.min_width ({min_width})"
        ));
    }
}
