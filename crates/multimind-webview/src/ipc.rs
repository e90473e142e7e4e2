//! IPC protocol between the shell UI and Rust.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: the shell calls `window.multimind.ipc.send(kind, payload)`,
//!   which posts `{"kind": ..., "payload": ...}` to the webview IPC handler.
//! - **Rust -> JS**: Rust evaluates `window.multimind.ipc._dispatch(kind, payload)`
//!   in the shell, which invokes the handler registered with `on(kind, cb)`.
//!
//! Only the shell surface gets the IPC handler and init script. Service
//! surfaces host third-party pages and cannot talk to the core.

use serde::{Deserialize, Serialize};

/// A message posted by the shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    pub kind: String,
    /// Absent payloads become [`IpcPayload::None`].
    #[serde(default)]
    pub payload: IpcPayload,
}

/// Payload of an IPC message: a bare string or structured JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IpcPayload {
    Text(String),
    Json(serde_json::Value),
    #[default]
    None,
}

impl IpcPayload {
    /// Look up a field of a JSON object payload.
    pub fn field(&self, name: &str) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => value.get(name),
            _ => None,
        }
    }

    /// A string field of an object payload, or the payload itself when it
    /// is a bare string.
    pub fn str_field(&self, name: &str) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            _ => self.field(name).and_then(|v| v.as_str()),
        }
    }

    /// A boolean field of an object payload.
    pub fn bool_field(&self, name: &str) -> Option<bool> {
        self.field(name).and_then(|v| v.as_bool())
    }
}

impl IpcMessage {
    /// Parse the body of a `postMessage` call. `None` if it is not JSON or
    /// has no `kind`.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// Script injected into the shell before its own scripts run. Defines
/// `window.multimind.ipc` with `send`, `on` and `_dispatch`.
pub const IPC_INIT_SCRIPT: &str = include_str!("../assets/ipc.js");

/// JS that delivers `kind` and `payload` to the shell's listeners.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    // `Value`'s Display is its compact JSON, which is also a JS literal.
    format!(
        "window.multimind.ipc._dispatch({}, {payload});",
        serde_json::Value::from(kind)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_object_payload() {
        let msg = IpcMessage::from_json(r#"{"kind":"show_view","payload":{"key":"claude"}}"#)
            .unwrap();
        assert_eq!(msg.kind, "show_view");
        assert_eq!(msg.payload.str_field("key"), Some("claude"));
    }

    #[test]
    fn parses_bare_string_payload() {
        let msg = IpcMessage::from_json(r#"{"kind":"show_view","payload":"grok"}"#).unwrap();
        assert_eq!(msg.payload.str_field("key"), Some("grok"));
    }

    #[test]
    fn missing_payload_defaults() {
        let msg = IpcMessage::from_json(r#"{"kind":"reload_current_view"}"#).unwrap();
        assert!(matches!(msg.payload, IpcPayload::None));
        assert_eq!(msg.payload.str_field("key"), None);
    }

    #[test]
    fn null_payload_has_no_fields() {
        let msg = IpcMessage::from_json(r#"{"kind":"shell_ready","payload":null}"#).unwrap();
        assert_eq!(msg.payload.field("anything"), None);
    }

    #[test]
    fn bool_field_reads_booleans_only() {
        let msg =
            IpcMessage::from_json(r#"{"kind":"toggle_panel","payload":{"visible":true,"n":1}}"#)
                .unwrap();
        assert_eq!(msg.payload.bool_field("visible"), Some(true));
        assert_eq!(msg.payload.bool_field("n"), None);
    }

    #[test]
    fn rejects_missing_kind() {
        assert!(IpcMessage::from_json(r#"{"payload":{}}"#).is_none());
        assert!(IpcMessage::from_json("not json").is_none());
    }

    #[test]
    fn dispatch_script_escapes_strings() {
        let js = js_dispatch_message("notify", &json!({"message": "it's \"done\""}));
        assert_eq!(
            js,
            r#"window.multimind.ipc._dispatch("notify", {"message":"it's \"done\""});"#
        );
    }

    #[test]
    fn dispatch_script_passes_null_payload() {
        let js = js_dispatch_message("store_changed", &serde_json::Value::Null);
        assert_eq!(js, r#"window.multimind.ipc._dispatch("store_changed", null);"#);
    }

    #[test]
    fn init_script_defines_bridge() {
        assert!(IPC_INIT_SCRIPT.contains("window.multimind.ipc = "));
        assert!(IPC_INIT_SCRIPT.contains("_dispatch: dispatch"));
        assert!(IPC_INIT_SCRIPT.contains("window.ipc.postMessage"));
    }
}
