use crate::{
    ListKind, MediaType, NotificationKind, SettingsForm, ALERT_DANGER_CLASS, ALERT_SUCCESS_CLASS,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub search: SearchView,
    pub lists: Vec<ListView>,
    pub forms: Vec<FormView>,
    pub notification: Option<NotificationView>,
    pub toggles: Vec<ToggleView>,
    pub favicon: Option<String>,
}

impl AppViewModel {
    pub fn list(&self, kind: ListKind) -> Option<&ListView> {
        self.lists.iter().find(|list| list.kind == kind)
    }

    pub fn form(&self, form: SettingsForm) -> Option<&FormView> {
        self.forms.iter().find(|view| view.form == form)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchView {
    pub query: String,
    pub results: Vec<String>,
    pub loading: bool,
    pub searched: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub kind: ListKind,
    pub media_type: MediaType,
    pub results: Vec<String>,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub form: SettingsForm,
    pub submit_label: String,
    pub submit_disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub kind: NotificationKind,
    pub message: String,
}

impl NotificationView {
    /// Banner styling class.
    pub fn class(&self) -> &'static str {
        match self.kind {
            NotificationKind::Success => ALERT_SUCCESS_CLASS,
            NotificationKind::Danger => ALERT_DANGER_CLASS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleView {
    pub target: String,
    pub visible: bool,
}
