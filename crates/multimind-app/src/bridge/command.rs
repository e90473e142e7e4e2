//! Commands from the shell UI, parsed and validated from IPC messages.

use std::path::PathBuf;

use multimind_webview::{IpcMessage, IpcPayload};

// =============================================================================
// IPC ALLOWLIST
// =============================================================================

/// Allowed IPC message kinds from the shell.
///
/// Any message with a `kind` not in this list is rejected and logged.
pub const ALLOWED_IPC_KINDS: &[&str] = &[
    "shell_ready",
    "show_view",
    "reload_current_view",
    "toggle_panel",
    "list_scratch_items",
    "add_scratch_item",
    "delete_scratch_item",
    "begin_drag",
    "drag_ended",
    "read_scratch_text",
    "open_scratch_item",
];

/// Check whether an IPC message kind is in the allowlist.
pub fn is_ipc_kind_allowed(kind: &str) -> bool {
    ALLOWED_IPC_KINDS.contains(&kind)
}

// =============================================================================
// COMMANDS
// =============================================================================

/// An item dropped onto the scratch panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewItem {
    Text { content: String },
    File { source: PathBuf, name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ShellReady,
    ShowView { key: String },
    ReloadCurrentView,
    TogglePanel { visible: bool },
    ListScratchItems,
    AddScratchItem(NewItem),
    DeleteScratchItem { path: PathBuf },
    BeginDrag { path: PathBuf },
    DragEnded { path: PathBuf, dropped: bool },
    ReadScratchText { path: PathBuf },
    OpenScratchItem { path: PathBuf },
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("malformed IPC message")]
    Malformed,

    #[error("unknown IPC kind '{0}'")]
    UnknownKind(String),

    #[error("'{kind}' is missing '{field}'")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },

    #[error("'{kind}' has an invalid '{field}': {reason}")]
    InvalidField {
        kind: &'static str,
        field: &'static str,
        reason: String,
    },
}

impl Command {
    /// Parse a raw IPC body into a command.
    pub fn from_ipc(body: &str) -> Result<Self, CommandError> {
        let msg = IpcMessage::from_json(body).ok_or(CommandError::Malformed)?;
        Self::parse(&msg)
    }

    /// Validate a parsed IPC message against the allowlist and its payload
    /// shape.
    pub fn parse(msg: &IpcMessage) -> Result<Self, CommandError> {
        if !is_ipc_kind_allowed(&msg.kind) {
            return Err(CommandError::UnknownKind(msg.kind.clone()));
        }
        let p = &msg.payload;

        let command = match msg.kind.as_str() {
            "shell_ready" => Self::ShellReady,
            "show_view" => Self::ShowView {
                key: required_str(p, "show_view", "key")?.to_string(),
            },
            "reload_current_view" => Self::ReloadCurrentView,
            "toggle_panel" => Self::TogglePanel {
                visible: required_bool(p, "toggle_panel", "visible")?,
            },
            "list_scratch_items" => Self::ListScratchItems,
            "add_scratch_item" => Self::AddScratchItem(parse_new_item(p)?),
            "delete_scratch_item" => Self::DeleteScratchItem {
                path: required_path(p, "delete_scratch_item")?,
            },
            "begin_drag" => Self::BeginDrag {
                path: required_path(p, "begin_drag")?,
            },
            "drag_ended" => Self::DragEnded {
                path: required_path(p, "drag_ended")?,
                dropped: required_bool(p, "drag_ended", "dropped")?,
            },
            "read_scratch_text" => Self::ReadScratchText {
                path: required_path(p, "read_scratch_text")?,
            },
            "open_scratch_item" => Self::OpenScratchItem {
                path: required_path(p, "open_scratch_item")?,
            },
            other => return Err(CommandError::UnknownKind(other.to_string())),
        };
        Ok(command)
    }
}

fn parse_new_item(p: &IpcPayload) -> Result<NewItem, CommandError> {
    const KIND: &str = "add_scratch_item";
    let content = field_str(p, KIND, "content")?;
    match field_str(p, KIND, "kind")? {
        "text" => Ok(NewItem::Text {
            content: content.to_string(),
        }),
        "file" => {
            let source = PathBuf::from(content);
            let name = match p.field("name").and_then(|v| v.as_str()) {
                Some(name) => name.to_string(),
                None => source
                    .file_name()
                    .and_then(|n| n.to_str())
                    .map(str::to_string)
                    .ok_or_else(|| CommandError::InvalidField {
                        kind: KIND,
                        field: "content",
                        reason: "path has no file name".into(),
                    })?,
            };
            Ok(NewItem::File { source, name })
        }
        other => Err(CommandError::InvalidField {
            kind: KIND,
            field: "kind",
            reason: format!("expected \"text\" or \"file\", got {other:?}"),
        }),
    }
}

/// A string field of an object payload. Bare string payloads do not count.
fn field_str<'a>(
    p: &'a IpcPayload,
    kind: &'static str,
    field: &'static str,
) -> Result<&'a str, CommandError> {
    p.field(field)
        .and_then(|v| v.as_str())
        .ok_or(CommandError::MissingField { kind, field })
}

/// A required string field; a bare string payload is accepted as the value.
fn required_str<'a>(
    p: &'a IpcPayload,
    kind: &'static str,
    field: &'static str,
) -> Result<&'a str, CommandError> {
    p.str_field(field)
        .filter(|s| !s.is_empty())
        .ok_or(CommandError::MissingField { kind, field })
}

fn required_bool(
    p: &IpcPayload,
    kind: &'static str,
    field: &'static str,
) -> Result<bool, CommandError> {
    p.bool_field(field)
        .ok_or(CommandError::MissingField { kind, field })
}

fn required_path(p: &IpcPayload, kind: &'static str) -> Result<PathBuf, CommandError> {
    required_str(p, kind, "path").map(PathBuf::from)
}

// =============================================================================
// TESTS
// =============================================================================
