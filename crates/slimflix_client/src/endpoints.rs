use slimflix_core::{ListKind, MediaType};
use url::Url;

use crate::{ApiError, FailureKind};

pub const SEARCH_QUERY_FIELD: &str = "query";
pub const SEARCH_MEDIA_FIELD: &str = "media_type";

/// `{base}/search_jackett`
pub fn search_url(base: &Url) -> Result<Url, ApiError> {
    with_segments(base, &["search_jackett"])
}

/// `{base}/{collection}/{media_type}[?limit=N]`
pub fn list_url(
    base: &Url,
    kind: ListKind,
    media_type: MediaType,
    limit: Option<u32>,
) -> Result<Url, ApiError> {
    let mut url = with_segments(base, &[kind.collection(), media_type.as_str()])?;
    if let Some(limit) = limit {
        url.query_pairs_mut().append_pair("limit", &limit.to_string());
    }
    Ok(url)
}

/// `{base}/admin/save_settings`
pub fn save_settings_url(base: &Url) -> Result<Url, ApiError> {
    with_segments(base, &["admin", "save_settings"])
}

// Appends to the base path so a front end mounted under a prefix keeps it.
fn with_segments(base: &Url, segments: &[&str]) -> Result<Url, ApiError> {
    let mut url = base.clone();
    url.set_query(None);
    url.path_segments_mut()
        .map_err(|_| ApiError::new(FailureKind::InvalidUrl, format!("{base} cannot be a base")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
