//! Messages from the core to the shell UI.

use multimind_common::{Notification, ServiceDescriptor};
use multimind_store::ScratchItem;
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum Outbound {
    LoadingState {
        loading: bool,
    },
    StoreChanged,
    Notify {
        message: String,
    },
    Services {
        services: Vec<ServiceDescriptor>,
        active: Option<String>,
        panel_visible: bool,
    },
    ScratchItems {
        items: Vec<ScratchItem>,
    },
}

impl Outbound {
    /// The IPC kind the shell listens on.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::LoadingState { .. } => "loading_state",
            Self::StoreChanged => "store_changed",
            Self::Notify { .. } => "notify",
            Self::Services { .. } => "services",
            Self::ScratchItems { .. } => "scratch_items",
        }
    }

    pub fn payload(&self) -> Value {
        match self {
            Self::LoadingState { loading } => json!({ "loading": loading }),
            Self::StoreChanged => Value::Null,
            Self::Notify { message } => json!({ "message": message }),
            Self::Services {
                services,
                active,
                panel_visible,
            } => json!({
                "services": services,
                "active": active,
                "panel_visible": panel_visible,
            }),
            Self::ScratchItems { items } => json!({ "items": items }),
        }
    }
}

impl From<Notification> for Outbound {
    fn from(n: Notification) -> Self {
        match n {
            Notification::LoadingStateChanged(loading) => Self::LoadingState { loading },
            Notification::StoreChanged => Self::StoreChanged,
            Notification::Notify(message) => Self::Notify { message },
        }
    }
}
