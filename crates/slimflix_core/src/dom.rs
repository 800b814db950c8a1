//! Element identifiers and classes shared between the widgets and the markup
//! they attach to.

use crate::ListKind;

pub const SETTINGS_NOTIFICATIONS_ID: &str = "settings-notifications";
pub const SEARCH_RESULTS_ID: &str = "search-results";

pub const SEASON_TOGGLE_CLASS: &str = "season-toggle";
pub const DATA_TARGET_ATTR: &str = "data-target";

pub const ALERT_SUCCESS_CLASS: &str = "alert-success";
pub const ALERT_DANGER_CLASS: &str = "alert-danger";

/// Region a list widget renders its results into.
pub fn list_region_id(kind: ListKind) -> &'static str {
    match kind {
        ListKind::Available => "available-results",
        ListKind::Recent => "recent-results",
    }
}
