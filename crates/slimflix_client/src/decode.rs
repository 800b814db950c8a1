use reqwest::StatusCode;
use serde_json::Value;

use crate::{ApiError, FailureKind, ListPayload, SaveResponse};

/// Decodes a search or listing body.
///
/// The body is read whatever the status code: an error page that still carries
/// `{ "error": ... }` is a backend-reported error, not a transport failure.
/// Only when the body does not decode does a non-success status win.
pub fn decode_list_body(status: StatusCode, body: &[u8]) -> Result<ListPayload, ApiError> {
    let value: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(err) => return Err(undecodable(status, err.to_string())),
    };

    if let Some(error) = error_field(&value) {
        return Ok(ListPayload::BackendError(error));
    }
    match value {
        Value::Array(items) => Ok(ListPayload::Items(items)),
        other => Err(undecodable(
            status,
            format!("expected an array of results, got {}", kind_of(&other)),
        )),
    }
}

/// Decodes the `{ success, message }` body of a settings save.
pub fn decode_save_body(status: StatusCode, body: &[u8]) -> Result<SaveResponse, ApiError> {
    serde_json::from_slice::<SaveResponse>(body).map_err(|err| undecodable(status, err.to_string()))
}

fn error_field(value: &Value) -> Option<String> {
    match value.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(message) if message.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

fn undecodable(status: StatusCode, message: String) -> ApiError {
    if status.is_success() {
        ApiError::new(FailureKind::Decode, message)
    } else {
        ApiError::new(FailureKind::HttpStatus(status.as_u16()), status.to_string())
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
