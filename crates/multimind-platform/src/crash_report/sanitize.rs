use std::path::Path;

use regex::Regex;

/// Longest panic message kept in a report; scratch text can be arbitrarily long.
const MAX_MESSAGE_CHARS: usize = 2000;

/// Scrubs user data from text that is about to be written to a crash report.
///
/// Chat URLs carry session state in their query strings, scratch items live
/// under the user's home directory, and panics can carry pasted text.
pub fn sanitize_report_text(input: &str, home: Option<&Path>) -> String {
    let mut result = input.to_string();

    if let Some(home) = home.and_then(|h| h.to_str()).filter(|h| !h.is_empty()) {
        result = result.replace(home, "~");
    }

    let patterns: &[(&str, &str)] = &[
        (r"(https?://[^\s?#]+)\?[^\s#]*", "${1}?[REDACTED]"),
        (r"Bearer [a-zA-Z0-9._\-]+", "Bearer [REDACTED]"),
        (r"(?i)((?:token|session|cookie)=)[^\s&;]+", "${1}[REDACTED]"),
    ];
    for (pattern, replacement) in patterns {
        // Static patterns; a failure here would be caught by the tests.
        if let Ok(re) = Regex::new(pattern) {
            result = re.replace_all(&result, *replacement).into_owned();
        }
    }

    if result.chars().count() > MAX_MESSAGE_CHARS {
        let mut truncated: String = result.chars().take(MAX_MESSAGE_CHARS).collect();
        truncated.push_str("[TRUNCATED]");
        result = truncated;
    }

    result
}
