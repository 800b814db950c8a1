//! SlimFlix core: pure widget state machines and view-model helpers.
mod dom;
mod effect;
mod favicon;
mod media;
mod msg;
mod settings;
mod state;
mod update;
mod view_model;

pub use dom::{
    list_region_id, ALERT_DANGER_CLASS, ALERT_SUCCESS_CLASS, DATA_TARGET_ATTR,
    SEARCH_RESULTS_ID, SEASON_TOGGLE_CLASS, SETTINGS_NOTIFICATIONS_ID,
};
pub use effect::Effect;
pub use favicon::{Bitmap, FAVICON_SIZE};
pub use media::{ListKind, MediaResult, MediaType};
pub use msg::{ListOutcome, Msg, SaveOutcome};
pub use settings::{SettingsForm, SettingsPayload};
pub use state::{
    AppState, ListState, NotificationKind, RequestToken, SearchState, SettingsFormState,
    Visibility, BUSY_LABEL, GENERIC_SAVE_FAILURE, MIN_QUERY_LEN, NOTIFICATION_CLEAR_AFTER,
};
pub use update::update;
pub use view_model::{AppViewModel, FormView, ListView, NotificationView, SearchView, ToggleView};
