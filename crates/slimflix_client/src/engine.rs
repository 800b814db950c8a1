use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use slimflix_core::{ListKind, MediaType, RequestToken, SettingsForm, SettingsPayload};
use slimflix_logging::{ui_debug, ui_info};

use crate::client::{ApiClient, ClientSettings, ReqwestApiClient};
use crate::{ApiError, EngineEvent};

enum EngineCommand {
    Search {
        token: RequestToken,
        query: String,
        media_type: MediaType,
    },
    FetchList {
        kind: ListKind,
        token: RequestToken,
        media_type: MediaType,
        limit: Option<u32>,
    },
    SaveSettings {
        form: SettingsForm,
        token: RequestToken,
        payload: SettingsPayload,
    },
    ClearNotificationAfter {
        token: RequestToken,
        after: Duration,
    },
}

/// Runs backend calls and timers on a background tokio runtime.
///
/// Commands never block the caller; every command produces exactly one
/// `EngineEvent` on the receiver returned by `spawn`.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: &ClientSettings) -> Result<(Self, mpsc::Receiver<EngineEvent>), ApiError> {
        let client = ReqwestApiClient::new(settings)?;
        ui_info!(widget = "engine"; "Backend at {}", client.base_url());
        Ok(Self::spawn(Arc::new(client)))
    }

    pub fn spawn(client: Arc<dyn ApiClient>) -> (Self, mpsc::Receiver<EngineEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = handle_command(client.as_ref(), command).await;
                    let _ = event_tx.send(event);
                });
            }
            ui_debug!(widget = "engine"; "Command channel closed, engine thread exiting");
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn search(&self, token: RequestToken, query: impl Into<String>, media_type: MediaType) {
        self.send(EngineCommand::Search {
            token,
            query: query.into(),
            media_type,
        });
    }

    pub fn fetch_list(
        &self,
        kind: ListKind,
        token: RequestToken,
        media_type: MediaType,
        limit: Option<u32>,
    ) {
        self.send(EngineCommand::FetchList {
            kind,
            token,
            media_type,
            limit,
        });
    }

    pub fn save_settings(&self, form: SettingsForm, token: RequestToken, payload: SettingsPayload) {
        self.send(EngineCommand::SaveSettings {
            form,
            token,
            payload,
        });
    }

    pub fn clear_notification_after(&self, token: RequestToken, after: Duration) {
        self.send(EngineCommand::ClearNotificationAfter { token, after });
    }

    fn send(&self, command: EngineCommand) {
        let _ = self.cmd_tx.send(command);
    }
}

async fn handle_command(client: &dyn ApiClient, command: EngineCommand) -> EngineEvent {
    match command {
        EngineCommand::Search {
            token,
            query,
            media_type,
        } => EngineEvent::SearchCompleted {
            token,
            result: client.search(&query, media_type).await,
        },
        EngineCommand::FetchList {
            kind,
            token,
            media_type,
            limit,
        } => EngineEvent::ListCompleted {
            kind,
            token,
            result: client.list(kind, media_type, limit).await,
        },
        EngineCommand::SaveSettings {
            form,
            token,
            payload,
        } => EngineEvent::SaveCompleted {
            form,
            token,
            result: client.save_settings(&payload).await,
        },
        EngineCommand::ClearNotificationAfter { token, after } => {
            tokio::time::sleep(after).await;
            EngineEvent::NotificationTimerFired { token }
        }
    }
}
