use serde_json::Value;

use crate::{ListKind, MediaType, RequestToken, SettingsForm};

/// How a search or listing request settled.
#[derive(Debug, Clone, PartialEq)]
pub enum ListOutcome {
    /// Body decoded to an array of records.
    Items(Vec<Value>),
    /// Body decoded to an object carrying an `error` field.
    BackendError(String),
    /// Network, status or decoding failure.
    Failed(String),
}

/// How a settings save settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Responded { success: bool, message: String },
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the search box.
    QueryChanged(String),
    /// User asked for a search with the current query.
    SearchSubmitted,
    /// Engine settled a search request.
    SearchSettled {
        token: RequestToken,
        outcome: ListOutcome,
    },
    /// A list widget was mounted on the page.
    ListMounted {
        kind: ListKind,
        media_type: MediaType,
        limit: Option<u32>,
    },
    /// Engine settled a listing request.
    ListSettled {
        kind: ListKind,
        token: RequestToken,
        outcome: ListOutcome,
    },
    /// User edited a settings field.
    FieldChanged {
        form: SettingsForm,
        field: String,
        value: String,
    },
    /// Intercepted submit of a settings form.
    SettingsSubmitted { form: SettingsForm },
    /// Engine settled a settings save.
    SettingsSettled {
        form: SettingsForm,
        token: RequestToken,
        outcome: SaveOutcome,
    },
    /// The clear timer for a notification fired.
    NotificationExpired { token: RequestToken },
    /// User closed the notification banner.
    NotificationDismissed,
    /// Page scan found a collapsible toggle pointing at `target`.
    ToggleRegistered { target: String, visible: bool },
    /// User clicked a collapsible toggle.
    ToggleClicked { target: String },
    /// Page icon was generated and installed.
    FaviconInstalled { data_url: String },
}
