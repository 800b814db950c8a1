use std::sync::mpsc;
use std::thread;

use slimflix_client::{ApiError, ClientSettings, EngineEvent, EngineHandle, ListPayload};
use slimflix_core::{Effect, ListOutcome, Msg, SaveOutcome};
use slimflix_logging::{ui_debug, ui_error, ui_info};

use super::app::AppInput;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: &ClientSettings, inbox: mpsc::Sender<AppInput>) -> Result<Self, ApiError> {
        let (engine, events) = EngineHandle::new(settings)?;
        spawn_event_loop(events, inbox);
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::PostSearch {
                    token,
                    query,
                    media_type,
                } => {
                    ui_info!(
                        widget = "search";
                        "PostSearch token={} query_len={}",
                        token,
                        query.len()
                    );
                    self.engine.search(token, query, media_type);
                }
                Effect::FetchList {
                    kind,
                    token,
                    media_type,
                    limit,
                } => {
                    ui_info!(
                        widget = "list";
                        "FetchList {}/{} token={} limit={:?}",
                        kind.collection(),
                        media_type.as_str(),
                        token,
                        limit
                    );
                    self.engine.fetch_list(kind, token, media_type, limit);
                }
                Effect::SaveSettings {
                    form,
                    token,
                    payload,
                } => {
                    // Field values are credentials; only the count is logged.
                    ui_info!(
                        widget = "settings";
                        "SaveSettings #{} token={} fields={}",
                        form.element_id(),
                        token,
                        payload.field_count()
                    );
                    self.engine.save_settings(form, token, payload);
                }
                Effect::ScheduleNotificationClear { token, after } => {
                    ui_debug!(widget = "settings"; "Notification {} clears in {:?}", token, after);
                    self.engine.clear_notification_after(token, after);
                }
            }
        }
    }
}

fn spawn_event_loop(events: mpsc::Receiver<EngineEvent>, inbox: mpsc::Sender<AppInput>) {
    thread::spawn(move || {
        while let Ok(event) = events.recv() {
            if inbox.send(AppInput::Dispatch(translate(event))).is_err() {
                break;
            }
        }
    });
}

/// Maps an engine event to the message the owning widget expects, logging
/// transport failures on the way.
pub(crate) fn translate(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SearchCompleted { token, result } => Msg::SearchSettled {
            token,
            outcome: list_outcome("search", result),
        },
        EngineEvent::ListCompleted {
            kind,
            token,
            result,
        } => Msg::ListSettled {
            kind,
            token,
            outcome: list_outcome(kind.collection(), result),
        },
        EngineEvent::SaveCompleted {
            form,
            token,
            result,
        } => Msg::SettingsSettled {
            form,
            token,
            outcome: match result {
                Ok(response) => SaveOutcome::Responded {
                    success: response.success,
                    message: response.message,
                },
                Err(err) => {
                    ui_error!(widget = "settings"; "Saving #{} failed: {}", form.element_id(), err);
                    SaveOutcome::Failed(err.to_string())
                }
            },
        },
        EngineEvent::NotificationTimerFired { token } => Msg::NotificationExpired { token },
    }
}

fn list_outcome(widget: &str, result: Result<ListPayload, ApiError>) -> ListOutcome {
    match result {
        Ok(ListPayload::Items(items)) => ListOutcome::Items(items),
        Ok(ListPayload::BackendError(message)) => {
            ui_info!(widget = widget; "Backend reported error: {}", message);
            ListOutcome::BackendError(message)
        }
        Err(err) => {
            ui_error!(widget = widget; "Request failed: {}", err);
            ListOutcome::Failed(err.to_string())
        }
    }
}
