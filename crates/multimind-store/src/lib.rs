//! The scratch clipboard: a directory of dropped text snippets and files.
//!
//! The directory listing is the only index. Each item is one file directly
//! inside the store directory; its file name is the item name.

mod item;
mod naming;
mod store;


pub use item::{is_text_name, ScratchItem};
pub use naming::{sanitize_file_name, text_item_name, NAME_PREFIX_CHARS};
pub use store::ScratchStore;
