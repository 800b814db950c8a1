use crate::{AppState, Effect, MediaType, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// Every settlement is matched against the widget's latest request token;
/// anything else is a stale response and leaves the state untouched.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::QueryChanged(query) => {
            if state.search_mut().set_query(query) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SearchSubmitted => {
            let request = state.search_mut().begin_search();
            state.mark_dirty();
            match request {
                Some((token, query)) => vec![Effect::PostSearch {
                    token,
                    query,
                    media_type: MediaType::All,
                }],
                None => Vec::new(),
            }
        }
        Msg::SearchSettled { token, outcome } => {
            if state.search_mut().settle(token, outcome) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ListMounted {
            kind,
            media_type,
            limit,
        } => match state.list_mut(kind).mount(media_type) {
            Some(token) => {
                state.mark_dirty();
                vec![Effect::FetchList {
                    kind,
                    token,
                    media_type,
                    limit,
                }]
            }
            None => Vec::new(),
        },
        Msg::ListSettled {
            kind,
            token,
            outcome,
        } => {
            if state.list_mut(kind).settle(token, outcome) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::FieldChanged { form, field, value } => {
            state.form_mut(form).set_field(field, value);
            Vec::new()
        }
        Msg::SettingsSubmitted { form } => match state.form_mut(form).begin_submit() {
            Some((token, payload)) => {
                state.mark_dirty();
                vec![Effect::SaveSettings {
                    form,
                    token,
                    payload,
                }]
            }
            None => Vec::new(),
        },
        Msg::SettingsSettled {
            form,
            token,
            outcome,
        } => {
            if !state.form_mut(form).settle(token) {
                return (state, Vec::new());
            }
            let notification = state.show_notification(outcome);
            state.mark_dirty();
            vec![Effect::ScheduleNotificationClear {
                token: notification,
                after: state.notification_clear_after(),
            }]
        }
        Msg::NotificationExpired { token } => {
            if state.expire_notification(token) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::NotificationDismissed => {
            if state.dismiss_notification() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ToggleRegistered { target, visible } => {
            state.register_toggle(target, visible);
            state.mark_dirty();
            Vec::new()
        }
        Msg::ToggleClicked { target } => {
            if state.flip_toggle(&target) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::FaviconInstalled { data_url } => {
            state.set_favicon(data_url);
            state.mark_dirty();
            Vec::new()
        }
    };

    (state, effects)
}
