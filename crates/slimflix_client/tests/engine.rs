use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use serde_json::json;
use slimflix_client::{
    ApiClient, ApiError, EngineEvent, EngineHandle, ListPayload, SaveResponse,
};
use slimflix_core::{ListKind, MediaType, SettingsForm, SettingsPayload};

const WAIT: Duration = Duration::from_secs(5);

#[derive(Default)]
struct RecordingClient {
    calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingClient {
    fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait::async_trait]
impl ApiClient for RecordingClient {
    async fn search(&self, query: &str, media_type: MediaType) -> Result<ListPayload, ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("search {query} {}", media_type.as_str()));
        Ok(ListPayload::Items(vec![json!({"title": query})]))
    }

    async fn list(
        &self,
        kind: ListKind,
        media_type: MediaType,
        limit: Option<u32>,
    ) -> Result<ListPayload, ApiError> {
        self.calls.lock().unwrap().push(format!(
            "list {} {} {limit:?}",
            kind.collection(),
            media_type.as_str()
        ));
        Ok(ListPayload::BackendError("not configured".to_string()))
    }

    async fn save_settings(&self, payload: &SettingsPayload) -> Result<SaveResponse, ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("save {} fields", payload.field_count()));
        Ok(SaveResponse {
            success: true,
            message: "Saved".to_string(),
        })
    }
}

#[test]
fn each_command_yields_one_event() {
    let (client, calls) = RecordingClient::new();
    let (engine, events) = EngineHandle::spawn(Arc::new(client));

    engine.search(3, "alien", MediaType::All);
    engine.fetch_list(ListKind::Available, 1, MediaType::Tv, Some(12));
    engine.save_settings(
        SettingsForm::Jackett,
        1,
        SettingsPayload::from_form(SettingsForm::Jackett, &Default::default()),
    );

    let mut received = Vec::new();
    for _ in 0..3 {
        received.push(events.recv_timeout(WAIT).expect("engine event"));
    }
    assert!(events.recv_timeout(Duration::from_millis(100)).is_err());

    assert!(received.contains(&EngineEvent::SearchCompleted {
        token: 3,
        result: Ok(ListPayload::Items(vec![json!({"title": "alien"})])),
    }));
    assert!(received.contains(&EngineEvent::ListCompleted {
        kind: ListKind::Available,
        token: 1,
        result: Ok(ListPayload::BackendError("not configured".to_string())),
    }));
    assert!(received.contains(&EngineEvent::SaveCompleted {
        form: SettingsForm::Jackett,
        token: 1,
        result: Ok(SaveResponse {
            success: true,
            message: "Saved".to_string(),
        }),
    }));

    let mut calls = calls.lock().unwrap().clone();
    calls.sort();
    assert_eq!(
        calls,
        vec![
            "list jackett_available tv Some(12)".to_string(),
            "save 2 fields".to_string(),
            "search alien all".to_string(),
        ]
    );
}

#[test]
fn notification_timer_fires_after_delay() {
    let (client, _calls) = RecordingClient::new();
    let (engine, events) = EngineHandle::spawn(Arc::new(client));

    let started = Instant::now();
    engine.clear_notification_after(7, Duration::from_millis(120));

    let event = events.recv_timeout(WAIT).expect("timer event");
    assert_eq!(event, EngineEvent::NotificationTimerFired { token: 7 });
    assert!(started.elapsed() >= Duration::from_millis(120));
}

#[test]
fn timers_do_not_block_requests() {
    let (client, _calls) = RecordingClient::new();
    let (engine, events) = EngineHandle::spawn(Arc::new(client));

    engine.clear_notification_after(1, Duration::from_secs(2));
    engine.search(1, "heat", MediaType::All);

    let first = events.recv_timeout(WAIT).expect("search event");
    assert!(matches!(first, EngineEvent::SearchCompleted { token: 1, .. }));
}
