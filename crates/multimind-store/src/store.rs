use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use multimind_common::{EventBus, Notification, StoreError};
use tracing::{debug, info};

use crate::item::{is_text_name, ScratchItem};
use crate::naming::text_item_name;

/// OS metadata files that may appear in the directory but are not items.
const IGNORED_NAMES: &[&str] = &[".DS_Store", "Thumbs.db", "desktop.ini"];

/// Directory-backed scratch clipboard.
///
/// Every successful mutation publishes [`Notification::StoreChanged`] so any
/// view of the item list can refresh, whoever triggered the change.
pub struct ScratchStore {
    dir: PathBuf,
    bus: Arc<EventBus>,
}

impl ScratchStore {
    /// Open the store at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>, bus: Arc<EventBus>) -> Self {
        Self {
            dir: dir.into(),
            bus,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// All items, sorted by name. A missing directory lists as empty.
    pub fn list(&self) -> Result<Vec<ScratchItem>, StoreError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io(&self.dir, e)),
        };

        let mut items = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::io(&self.dir, e))?;
            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            if !is_file {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if IGNORED_NAMES.contains(&name.as_str()) {
                continue;
            }
            let path = entry.path();
            // Unreadable or non-UTF-8 bodies list without text.
            let text = is_text_name(&name)
                .then(|| fs::read_to_string(&path).ok())
                .flatten();
            items.push(ScratchItem { name, path, text });
        }
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }

    /// Save a text snippet under a name derived from its first characters.
    ///
    /// The file body is the original, unsanitized text. An existing item with
    /// the same derived name is overwritten.
    pub fn add_text(&self, content: &str) -> Result<ScratchItem, StoreError> {
        if content.is_empty() {
            return Err(StoreError::EmptyText);
        }
        self.ensure_dir()?;

        let mut item = ScratchItem::new(&self.dir, text_item_name(content));
        fs::write(&item.path, content).map_err(|e| StoreError::io(&item.path, e))?;

        info!(name = %item.name, len = content.len(), "scratch text saved");
        self.changed();
        item.text = Some(content.to_string());
        Ok(item)
    }

    /// Copy the file at `source` into the store as `name`, overwriting.
    ///
    /// Only the final component of `name` is used, so a dropped file can
    /// never be written outside the store.
    pub fn add_file(&self, source: &Path, name: &str) -> Result<ScratchItem, StoreError> {
        let file_name = Path::new(name)
            .file_name()
            .and_then(|n| n.to_str())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| StoreError::InvalidName(name.to_string()))?;
        self.ensure_dir()?;

        let item = ScratchItem::new(&self.dir, file_name);
        fs::copy(source, &item.path).map_err(|e| StoreError::io(source, e))?;

        info!(name = %item.name, source = %source.display(), "scratch file saved");
        self.changed();
        Ok(item)
    }

    /// Remove the item at `path`. Removing an absent item succeeds.
    pub fn delete(&self, path: &Path) -> Result<(), StoreError> {
        self.check_inside(path)?;
        match fs::remove_file(path) {
            Ok(()) => info!(path = %path.display(), "scratch item deleted"),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "scratch item already gone");
            }
            Err(e) => return Err(StoreError::io(path, e)),
        }
        self.changed();
        Ok(())
    }

    /// Contents of the item at `path` as UTF-8 text.
    pub fn read_text(&self, path: &Path) -> Result<String, StoreError> {
        self.check_inside(path)?;
        let bytes = fs::read(path).map_err(|e| StoreError::io(path, e))?;
        String::from_utf8(bytes).map_err(|_| StoreError::NotText(path.to_path_buf()))
    }

    /// Items live directly inside the store directory; anything else is refused.
    pub fn check_inside(&self, path: &Path) -> Result<(), StoreError> {
        let named = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n != "." && n != "..");
        if named && path.parent() == Some(self.dir.as_path()) {
            Ok(())
        } else {
            Err(StoreError::OutsideStore(path.to_path_buf()))
        }
    }

    fn ensure_dir(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::io(&self.dir, e))
    }

    fn changed(&self) {
        self.bus.publish(Notification::StoreChanged);
    }
}
