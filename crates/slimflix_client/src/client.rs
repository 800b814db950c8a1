use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use slimflix_core::{ListKind, MediaType, SettingsPayload};
use url::Url;

use crate::decode::{decode_list_body, decode_save_body};
use crate::endpoints::{
    list_url, save_settings_url, search_url, SEARCH_MEDIA_FIELD, SEARCH_QUERY_FIELD,
};
use crate::{ApiError, FailureKind, ListPayload, SaveResponse};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    /// `None` leaves calls unbounded; a hung backend keeps the widget loading.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }
}

/// The backend endpoints the widgets talk to.
#[async_trait::async_trait]
pub trait ApiClient: Send + Sync {
    async fn search(&self, query: &str, media_type: MediaType) -> Result<ListPayload, ApiError>;

    async fn list(
        &self,
        kind: ListKind,
        media_type: MediaType,
        limit: Option<u32>,
    ) -> Result<ListPayload, ApiError>;

    async fn save_settings(&self, payload: &SettingsPayload) -> Result<SaveResponse, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestApiClient {
    base_url: Url,
    client: reqwest::Client,
}

impl ReqwestApiClient {
    pub fn new(settings: &ClientSettings) -> Result<Self, ApiError> {
        let base_url = Url::parse(&settings.base_url)
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::new(
                FailureKind::InvalidUrl,
                format!("{base_url} cannot be a base"),
            ));
        }

        let mut builder = reqwest::Client::builder().connect_timeout(settings.connect_timeout);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<(reqwest::StatusCode, Vec<u8>), ApiError> {
        let response = request
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_reqwest_error)?;
        Ok((status, body.to_vec()))
    }
}

#[async_trait::async_trait]
impl ApiClient for ReqwestApiClient {
    async fn search(&self, query: &str, media_type: MediaType) -> Result<ListPayload, ApiError> {
        let url = search_url(&self.base_url)?;
        let form = url::form_urlencoded::Serializer::new(String::new())
            .append_pair(SEARCH_QUERY_FIELD, query)
            .append_pair(SEARCH_MEDIA_FIELD, media_type.as_str())
            .finish();

        let request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(form);
        let (status, body) = self.send(request).await?;
        decode_list_body(status, &body)
    }

    async fn list(
        &self,
        kind: ListKind,
        media_type: MediaType,
        limit: Option<u32>,
    ) -> Result<ListPayload, ApiError> {
        let url = list_url(&self.base_url, kind, media_type, limit)?;
        let (status, body) = self.send(self.client.get(url)).await?;
        decode_list_body(status, &body)
    }

    async fn save_settings(&self, payload: &SettingsPayload) -> Result<SaveResponse, ApiError> {
        let url = save_settings_url(&self.base_url)?;
        let json = serde_json::to_vec(payload)
            .map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))?;

        let request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(json);
        let (status, body) = self.send(request).await?;
        decode_save_body(status, &body)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_builder() {
        return ApiError::new(FailureKind::InvalidUrl, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
