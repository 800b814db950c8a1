use std::collections::BTreeMap;

use serde::Serialize;

/// The admin forms that post to the settings endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SettingsForm {
    Jackett,
    QBittorrent,
}

impl SettingsForm {
    pub const ALL: [SettingsForm; 2] = [SettingsForm::Jackett, SettingsForm::QBittorrent];

    /// Id of the `<form>` element the handler intercepts.
    pub fn element_id(self) -> &'static str {
        match self {
            SettingsForm::Jackett => "jackett-settings-form",
            SettingsForm::QBittorrent => "qbittorrent-settings-form",
        }
    }

    /// Fixed set of fields serialized on submit, in document order.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            SettingsForm::Jackett => &["jackett_url", "jackett_api_key"],
            SettingsForm::QBittorrent => {
                &["qbittorrent_url", "qbittorrent_user", "qbittorrent_pass"]
            }
        }
    }

    pub fn has_field(self, field: &str) -> bool {
        self.fields().contains(&field)
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            SettingsForm::Jackett => "Save Jackett Settings",
            SettingsForm::QBittorrent => "Save qBittorrent Settings",
        }
    }
}

/// JSON body sent to the save endpoint: field name to string value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct SettingsPayload {
    fields: BTreeMap<String, String>,
}

impl SettingsPayload {
    /// Serializes exactly the form's fixed field set. Missing values become
    /// empty strings; values for unknown fields are dropped.
    pub fn from_form(form: SettingsForm, values: &BTreeMap<String, String>) -> Self {
        let fields = form
            .fields()
            .iter()
            .map(|name| {
                let value = values.get(*name).cloned().unwrap_or_default();
                ((*name).to_string(), value)
            })
            .collect();
        Self { fields }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}
