use std::fmt;

use serde::Deserialize;
use serde_json::Value;
use slimflix_core::{ListKind, RequestToken, SettingsForm};

/// Decoded body of a search or listing call.
#[derive(Debug, Clone, PartialEq)]
pub enum ListPayload {
    Items(Vec<Value>),
    /// The backend answered with `{ "error": ... }`.
    BackendError(String),
}

/// Decoded body of `POST /admin/save_settings`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SaveResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    SearchCompleted {
        token: RequestToken,
        result: Result<ListPayload, ApiError>,
    },
    ListCompleted {
        kind: ListKind,
        token: RequestToken,
        result: Result<ListPayload, ApiError>,
    },
    SaveCompleted {
        form: SettingsForm,
        token: RequestToken,
        result: Result<SaveResponse, ApiError>,
    },
    NotificationTimerFired {
        token: RequestToken,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "malformed response"),
        }
    }
}
