use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// One entry in the scratch store.
///
/// `text` carries the body of text items so the shell can hand it to a
/// drag without a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScratchItem {
    pub name: String,
    pub path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ScratchItem {
    pub(crate) fn new(dir: &Path, name: impl Into<String>) -> Self {
        let name = name.into();
        let path = dir.join(&name);
        Self {
            name,
            path,
            text: None,
        }
    }
}

/// Text items are the `.txt` files; everything else opens externally.
pub fn is_text_name(name: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
}
