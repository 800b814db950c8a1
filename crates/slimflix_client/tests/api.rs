use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use slimflix_client::{
    ApiClient, ClientSettings, FailureKind, ListPayload, ReqwestApiClient, SaveResponse,
};
use slimflix_core::{ListKind, MediaType, SettingsForm, SettingsPayload};
use wiremock::matchers::{body_json, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReqwestApiClient {
    let settings = ClientSettings {
        base_url: server.uri(),
        ..ClientSettings::default()
    };
    ReqwestApiClient::new(&settings).expect("client")
}

#[tokio::test]
async fn search_posts_form_with_media_type_all() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search_jackett"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("query=blade+runner"))
        .and(body_string_contains("media_type=all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"title": "Blade.Runner.1982", "clean_title": "Blade Runner", "year": "1982"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let payload = client_for(&server)
        .search("blade runner", MediaType::All)
        .await
        .expect("search ok");

    assert_eq!(
        payload,
        ListPayload::Items(vec![
            json!({"title": "Blade.Runner.1982", "clean_title": "Blade Runner", "year": "1982"})
        ])
    );
}

#[tokio::test]
async fn search_error_body_is_backend_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search_jackett"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "x"})))
        .mount(&server)
        .await;

    let payload = client_for(&server)
        .search("anything", MediaType::All)
        .await
        .expect("decoded");

    assert_eq!(payload, ListPayload::BackendError("x".to_string()));
}

#[tokio::test]
async fn available_list_sends_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jackett_available/movie"))
        .and(query_param("limit", "12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"title": "Heat"}])))
        .expect(1)
        .mount(&server)
        .await;

    let payload = client_for(&server)
        .list(ListKind::Available, MediaType::Movie, Some(12))
        .await
        .expect("list ok");

    assert_eq!(payload, ListPayload::Items(vec![json!({"title": "Heat"})]));
}

#[tokio::test]
async fn recent_list_uses_its_own_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jackett_recent/tv"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let payload = client_for(&server)
        .list(ListKind::Recent, MediaType::Tv, None)
        .await
        .expect("list ok");

    assert_eq!(payload, ListPayload::Items(Vec::new()));
}

#[tokio::test]
async fn save_settings_posts_json_object() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/save_settings"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "qbittorrent_url": "http://qb:8080",
            "qbittorrent_user": "admin",
            "qbittorrent_pass": "hunter2"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "message": "Saved"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut values = std::collections::BTreeMap::new();
    values.insert("qbittorrent_url".to_string(), "http://qb:8080".to_string());
    values.insert("qbittorrent_user".to_string(), "admin".to_string());
    values.insert("qbittorrent_pass".to_string(), "hunter2".to_string());
    let payload = SettingsPayload::from_form(SettingsForm::QBittorrent, &values);

    let response = client_for(&server)
        .save_settings(&payload)
        .await
        .expect("save ok");

    assert_eq!(
        response,
        SaveResponse {
            success: true,
            message: "Saved".to_string(),
        }
    );
}

#[tokio::test]
async fn non_json_error_page_maps_to_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jackett_recent/movie"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .list(ListKind::Recent, MediaType::Movie, None)
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn unreachable_backend_is_network_failure() {
    // Port 9 (discard) on localhost is closed in test environments.
    let settings = ClientSettings {
        base_url: "http://127.0.0.1:9".to_string(),
        connect_timeout: Duration::from_millis(500),
        request_timeout: Some(Duration::from_secs(2)),
    };
    let client = ReqwestApiClient::new(&settings).expect("client");

    let err = client.search("alien", MediaType::All).await.unwrap_err();

    assert!(matches!(err.kind, FailureKind::Network | FailureKind::Timeout));
}

#[tokio::test]
async fn request_timeout_applies_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jackett_recent/movie"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!([])),
        )
        .mount(&server)
        .await;

    let settings = ClientSettings {
        base_url: server.uri(),
        request_timeout: Some(Duration::from_millis(50)),
        ..ClientSettings::default()
    };
    let client = ReqwestApiClient::new(&settings).expect("client");

    let err = client
        .list(ListKind::Recent, MediaType::Movie, None)
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[test]
fn invalid_base_url_is_rejected() {
    let settings = ClientSettings {
        base_url: "not a url".to_string(),
        ..ClientSettings::default()
    };
    let err = ReqwestApiClient::new(&settings).unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
