//! SlimFlix client: backend HTTP calls and effect execution.
mod client;
mod decode;
mod endpoints;
mod engine;
mod types;

pub use client::{ApiClient, ClientSettings, ReqwestApiClient};
pub use decode::{decode_list_body, decode_save_body};
pub use endpoints::{
    list_url, save_settings_url, search_url, SEARCH_MEDIA_FIELD, SEARCH_QUERY_FIELD,
};
pub use engine::EngineHandle;
pub use types::{ApiError, EngineEvent, FailureKind, ListPayload, SaveResponse};
