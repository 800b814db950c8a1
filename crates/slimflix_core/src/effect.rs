use std::time::Duration;

use crate::{ListKind, MediaType, RequestToken, SettingsForm, SettingsPayload};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// `POST /search_jackett` with a form body.
    PostSearch {
        token: RequestToken,
        query: String,
        media_type: MediaType,
    },
    /// `GET /{collection}/{media_type}`.
    FetchList {
        kind: ListKind,
        token: RequestToken,
        media_type: MediaType,
        limit: Option<u32>,
    },
    /// `POST /admin/save_settings` with a JSON body.
    SaveSettings {
        form: SettingsForm,
        token: RequestToken,
        payload: SettingsPayload,
    },
    /// Deliver `Msg::NotificationExpired { token }` after `after`.
    ScheduleNotificationClear { token: RequestToken, after: Duration },
}
