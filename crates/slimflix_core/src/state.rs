use std::collections::BTreeMap;
use std::time::Duration;

use crate::view_model::{
    AppViewModel, FormView, ListView, NotificationView, SearchView, ToggleView,
};
use crate::{
    ListKind, ListOutcome, MediaResult, MediaType, Msg, SaveOutcome, SettingsForm,
    SettingsPayload,
};

/// Per-widget, monotonically increasing request stamp.
pub type RequestToken = u64;

/// Queries shorter than this (after trimming) never reach the backend.
pub const MIN_QUERY_LEN: usize = 3;
pub const NOTIFICATION_CLEAR_AFTER: Duration = Duration::from_millis(5000);
pub const BUSY_LABEL: &str = "Saving...";
pub const GENERIC_SAVE_FAILURE: &str = "An error occurred while saving settings.";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    query: String,
    results: Vec<MediaResult>,
    searched: bool,
    last_token: RequestToken,
    in_flight: Option<RequestToken>,
}

impl SearchState {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[MediaResult] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn has_searched(&self) -> bool {
        self.searched
    }

    pub(crate) fn set_query(&mut self, query: String) -> bool {
        if self.query == query {
            return false;
        }
        self.query = query;
        true
    }

    /// Returns the request to dispatch, or `None` when the query is too short.
    ///
    /// A short query also supersedes any outstanding request so its late
    /// response cannot repopulate the cleared list.
    pub(crate) fn begin_search(&mut self) -> Option<(RequestToken, String)> {
        let trimmed = self.query.trim();
        if trimmed.chars().count() < MIN_QUERY_LEN {
            self.results.clear();
            self.searched = false;
            // Loading ends here; the outstanding response is now stale.
            self.in_flight = None;
            return None;
        }
        let query = trimmed.to_string();
        self.last_token += 1;
        self.in_flight = Some(self.last_token);
        self.searched = true;
        Some((self.last_token, query))
    }

    fn accepts(&self, token: RequestToken) -> bool {
        self.in_flight == Some(token)
    }

    /// Applies a settlement. Returns `false` for a stale or duplicate token.
    pub(crate) fn settle(&mut self, token: RequestToken, outcome: ListOutcome) -> bool {
        if !self.accepts(token) {
            return false;
        }
        self.in_flight = None;
        apply_list_outcome(&mut self.results, outcome);
        true
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    kind: ListKind,
    media_type: MediaType,
    results: Vec<MediaResult>,
    mounted: bool,
    last_token: RequestToken,
    in_flight: Option<RequestToken>,
}

impl ListState {
    pub fn new(kind: ListKind) -> Self {
        Self {
            kind,
            media_type: MediaType::default(),
            results: Vec::new(),
            mounted: false,
            last_token: 0,
            in_flight: None,
        }
    }

    pub fn results(&self) -> &[MediaResult] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Marks the widget mounted and returns the token of its single fetch.
    /// A widget is only ever fetched once.
    pub(crate) fn mount(&mut self, media_type: MediaType) -> Option<RequestToken> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        self.media_type = media_type;
        self.last_token += 1;
        self.in_flight = Some(self.last_token);
        Some(self.last_token)
    }

    fn accepts(&self, token: RequestToken) -> bool {
        self.in_flight == Some(token)
    }

    pub(crate) fn settle(&mut self, token: RequestToken, outcome: ListOutcome) -> bool {
        if !self.accepts(token) {
            return false;
        }
        self.in_flight = None;
        apply_list_outcome(&mut self.results, outcome);
        true
    }
}

fn apply_list_outcome(results: &mut Vec<MediaResult>, outcome: ListOutcome) {
    match outcome {
        ListOutcome::Items(items) => {
            *results = items.into_iter().map(MediaResult::new).collect();
        }
        ListOutcome::BackendError(_) => results.clear(),
        // Transport failures leave whatever was displayed.
        ListOutcome::Failed(_) => {}
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsFormState {
    form: SettingsForm,
    values: BTreeMap<String, String>,
    last_token: RequestToken,
    submitting: Option<RequestToken>,
}

impl SettingsFormState {
    pub fn new(form: SettingsForm) -> Self {
        Self {
            form,
            values: BTreeMap::new(),
            last_token: 0,
            submitting: None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.is_some()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            BUSY_LABEL
        } else {
            self.form.submit_label()
        }
    }

    pub(crate) fn set_field(&mut self, field: String, value: String) -> bool {
        if !self.form.has_field(&field) {
            return false;
        }
        self.values.insert(field, value);
        true
    }

    /// The submit control is disabled while a save is in flight, so a second
    /// submit in that window is dropped.
    pub(crate) fn begin_submit(&mut self) -> Option<(RequestToken, SettingsPayload)> {
        if self.submitting.is_some() {
            return None;
        }
        self.last_token += 1;
        self.submitting = Some(self.last_token);
        Some((
            self.last_token,
            SettingsPayload::from_form(self.form, &self.values),
        ))
    }

    fn accepts(&self, token: RequestToken) -> bool {
        self.submitting == Some(token)
    }

    pub(crate) fn settle(&mut self, token: RequestToken) -> bool {
        if !self.accepts(token) {
            return false;
        }
        self.submitting = None;
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Notification {
    kind: NotificationKind,
    message: String,
    token: RequestToken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    pub fn from_visible(visible: bool) -> Self {
        if visible {
            Visibility::Shown
        } else {
            Visibility::Hidden
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Visibility::Shown => Visibility::Hidden,
            Visibility::Hidden => Visibility::Shown,
        }
    }

    pub fn is_visible(self) -> bool {
        self == Visibility::Shown
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    search: SearchState,
    lists: BTreeMap<ListKind, ListState>,
    forms: BTreeMap<SettingsForm, SettingsFormState>,
    notification: Option<Notification>,
    last_notification_token: RequestToken,
    notification_clear_after: Duration,
    toggles: BTreeMap<String, Visibility>,
    favicon: Option<String>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_notification_delay(NOTIFICATION_CLEAR_AFTER)
    }

    pub fn with_notification_delay(notification_clear_after: Duration) -> Self {
        Self {
            search: SearchState::default(),
            lists: ListKind::ALL
                .into_iter()
                .map(|kind| (kind, ListState::new(kind)))
                .collect(),
            forms: SettingsForm::ALL
                .into_iter()
                .map(|form| (form, SettingsFormState::new(form)))
                .collect(),
            notification: None,
            last_notification_token: 0,
            notification_clear_after,
            toggles: BTreeMap::new(),
            favicon: None,
            dirty: false,
        }
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn list(&self, kind: ListKind) -> &ListState {
        &self.lists[&kind]
    }

    pub fn form(&self, form: SettingsForm) -> &SettingsFormState {
        &self.forms[&form]
    }

    pub fn visibility(&self, target: &str) -> Option<Visibility> {
        self.toggles.get(target).copied()
    }

    pub fn notification_clear_after(&self) -> Duration {
        self.notification_clear_after
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            search: SearchView {
                query: self.search.query.clone(),
                results: self.search.results.iter().map(MediaResult::summary).collect(),
                loading: self.search.is_loading(),
                searched: self.search.searched,
            },
            lists: self
                .lists
                .values()
                .map(|list| ListView {
                    kind: list.kind,
                    media_type: list.media_type,
                    results: list.results.iter().map(MediaResult::summary).collect(),
                    loading: list.is_loading(),
                })
                .collect(),
            forms: self
                .forms
                .values()
                .map(|form| FormView {
                    form: form.form,
                    submit_label: form.submit_label().to_string(),
                    submit_disabled: form.is_submitting(),
                })
                .collect(),
            notification: self.notification.as_ref().map(|n| NotificationView {
                kind: n.kind,
                message: n.message.clone(),
            }),
            toggles: self
                .toggles
                .iter()
                .map(|(target, visibility)| ToggleView {
                    target: target.clone(),
                    visible: visibility.is_visible(),
                })
                .collect(),
            favicon: self.favicon.clone(),
        }
    }

    /// Widget name and token of a settlement or clear timer that no longer
    /// matches what its widget is waiting for. `update` drops such messages.
    pub fn stale_settlement(&self, msg: &Msg) -> Option<(&'static str, RequestToken)> {
        let (widget, token, accepted) = match msg {
            Msg::SearchSettled { token, .. } => ("search", *token, self.search.accepts(*token)),
            Msg::ListSettled { kind, token, .. } => {
                (kind.collection(), *token, self.list(*kind).accepts(*token))
            }
            Msg::SettingsSettled { form, token, .. } => {
                ("settings", *token, self.form(*form).accepts(*token))
            }
            Msg::NotificationExpired { token } => (
                "notification",
                *token,
                self.notification.as_ref().is_some_and(|n| n.token == *token),
            ),
            _ => return None,
        };
        (!accepted).then_some((widget, token))
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn search_mut(&mut self) -> &mut SearchState {
        &mut self.search
    }

    pub(crate) fn list_mut(&mut self, kind: ListKind) -> &mut ListState {
        self.lists
            .entry(kind)
            .or_insert_with(|| ListState::new(kind))
    }

    pub(crate) fn form_mut(&mut self, form: SettingsForm) -> &mut SettingsFormState {
        self.forms
            .entry(form)
            .or_insert_with(|| SettingsFormState::new(form))
    }

    /// Replaces the banner and returns the token its clear timer must carry.
    pub(crate) fn show_notification(&mut self, outcome: SaveOutcome) -> RequestToken {
        let (kind, message) = match outcome {
            SaveOutcome::Responded {
                success: true,
                message,
            } => (NotificationKind::Success, message),
            SaveOutcome::Responded {
                success: false,
                message,
            } => (NotificationKind::Danger, message),
            SaveOutcome::Failed(_) => (NotificationKind::Danger, GENERIC_SAVE_FAILURE.to_string()),
        };
        self.last_notification_token += 1;
        let token = self.last_notification_token;
        self.notification = Some(Notification {
            kind,
            message,
            token,
        });
        token
    }

    /// Clears the banner only if it is still the one the timer was armed for.
    pub(crate) fn expire_notification(&mut self, token: RequestToken) -> bool {
        match &self.notification {
            Some(current) if current.token == token => {
                self.notification = None;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn dismiss_notification(&mut self) -> bool {
        self.notification.take().is_some()
    }

    pub(crate) fn register_toggle(&mut self, target: String, visible: bool) {
        self.toggles.insert(target, Visibility::from_visible(visible));
    }

    pub(crate) fn flip_toggle(&mut self, target: &str) -> bool {
        match self.toggles.get_mut(target) {
            Some(visibility) => {
                *visibility = visibility.toggled();
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_favicon(&mut self, data_url: String) {
        self.favicon = Some(data_url);
    }
}
