//! File names for scratch items.

/// Characters kept from the start of a text snippet when naming it.
pub const NAME_PREFIX_CHARS: usize = 5;

const ELLIPSIS: &str = "...";
const TEXT_EXTENSION: &str = ".txt";

/// Characters no mainstream filesystem accepts in a file name.
fn is_reserved(c: char) -> bool {
    matches!(c, '\\' | '/' | ':' | '"' | '*' | '?' | '<' | '>' | '|') || c.is_control()
}

/// Replace every reserved character with `_`, keeping the length in chars.
pub fn sanitize_file_name(raw: &str) -> String {
    raw.chars()
        .map(|c| if is_reserved(c) { '_' } else { c })
        .collect()
}

/// Name a text snippet: sanitized prefix, `...` if it was cut, then `.txt`.
///
/// Sanitizing happens before truncation so a separator in the prefix can
/// never survive into the name.
pub fn text_item_name(content: &str) -> String {
    let sanitized = sanitize_file_name(content);
    let prefix: String = sanitized.chars().take(NAME_PREFIX_CHARS).collect();
    let cut = content.chars().count() > NAME_PREFIX_CHARS;
    format!(
        "{prefix}{}{TEXT_EXTENSION}",
        if cut { ELLIPSIS } else { "" }
    )
}
