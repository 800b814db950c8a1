use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use slimflix_client::ClientSettings;
use slimflix_core::{MediaType, NOTIFICATION_CLEAR_AFTER};
use thiserror::Error;

use super::logging::LogDestination;

pub const CONFIG_FILENAME: &str = "slimflix.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("unknown media type {0:?}")]
    MediaType(String),
    #[error("failed to serialize configuration: {0}")]
    Serialize(String),
    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    /// Media type the list widgets are mounted with.
    pub media_type: String,
    pub available_limit: Option<u32>,
    pub notification_clear_ms: u64,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: Option<u64>,
    pub log_destination: LogDestination,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let client = ClientSettings::default();
        Self {
            base_url: client.base_url,
            media_type: MediaType::Movie.as_str().to_string(),
            available_limit: Some(12),
            notification_clear_ms: NOTIFICATION_CLEAR_AFTER.as_millis() as u64,
            connect_timeout_ms: client.connect_timeout.as_millis() as u64,
            request_timeout_ms: client.request_timeout.map(|t| t.as_millis() as u64),
            log_destination: LogDestination::default(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            base_url: self.base_url.clone(),
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            request_timeout: self.request_timeout_ms.map(Duration::from_millis),
        }
    }

    pub fn notification_delay(&self) -> Duration {
        Duration::from_millis(self.notification_clear_ms)
    }

    pub fn list_media_type(&self) -> Result<MediaType, ConfigError> {
        MediaType::parse(&self.media_type)
            .ok_or_else(|| ConfigError::MediaType(self.media_type.clone()))
    }
}

/// Reads `slimflix.ron` from `dir`. A missing file yields the defaults.
pub(crate) fn load_config(dir: &Path) -> Result<AppConfig, ConfigError> {
    let path = dir.join(CONFIG_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    let config: AppConfig = ron::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.clone(),
        message: err.to_string(),
    })?;
    config.list_media_type()?;
    Ok(config)
}

/// Writes the default configuration so there is a template to edit.
/// Returns `false` when a file already exists.
pub(crate) fn write_default_if_missing(dir: &Path) -> Result<bool, ConfigError> {
    let path = dir.join(CONFIG_FILENAME);
    if path.exists() {
        return Ok(false);
    }

    let pretty = ron::ser::PrettyConfig::new();
    let content = ron::ser::to_string_pretty(&AppConfig::default(), pretty)
        .map_err(|err| ConfigError::Serialize(err.to_string()))?;
    fs::write(&path, content).map_err(|source| ConfigError::Write { path, source })?;
    Ok(true)
}
