use slimflix_core::SettingsForm;

pub const SEARCH_INPUT_ID: &str = "search-input";

/// Collapsible sections on the detail page, in display order.
pub const SEASON_SECTIONS: &[&str] = &["Season 1", "Season 2", "Season 3"];

pub fn submit_button_id(form: SettingsForm) -> String {
    format!("{}-submit", form.element_id())
}
