use slimflix_core::{list_region_id, AppViewModel, SEARCH_RESULTS_ID, SETTINGS_NOTIFICATIONS_ID};

use super::constants::{submit_button_id, SEARCH_INPUT_ID};
use super::page::DomCommand;

/// Full re-render of every widget region from the view model.
pub fn render(view: &AppViewModel) -> Vec<DomCommand> {
    let mut cmds = Vec::new();

    if let Some(data_url) = &view.favicon {
        cmds.push(DomCommand::SetFavicon {
            data_url: data_url.clone(),
        });
    }

    cmds.push(DomCommand::SetInputValue {
        id: SEARCH_INPUT_ID.to_string(),
        value: view.search.query.clone(),
    });
    let no_results =
        view.search.searched && view.search.results.is_empty() && !view.search.loading;
    let search_items = if no_results {
        vec!["No results found.".to_string()]
    } else {
        view.search.results.clone()
    };
    cmds.push(DomCommand::SetItems {
        id: SEARCH_RESULTS_ID.to_string(),
        items: search_items,
        loading: view.search.loading,
    });

    for list in &view.lists {
        cmds.push(DomCommand::SetItems {
            id: list_region_id(list.kind).to_string(),
            items: list.results.clone(),
            loading: list.loading,
        });
    }

    for form in &view.forms {
        cmds.push(DomCommand::SetButton {
            id: submit_button_id(form.form),
            label: form.submit_label.clone(),
            disabled: form.submit_disabled,
        });
    }

    // At most one banner: the container is emptied before each render.
    cmds.push(DomCommand::ClearBanners {
        container: SETTINGS_NOTIFICATIONS_ID.to_string(),
    });
    if let Some(notification) = &view.notification {
        cmds.push(DomCommand::ShowBanner {
            container: SETTINGS_NOTIFICATIONS_ID.to_string(),
            class: notification.class(),
            message: notification.message.clone(),
        });
    }

    for toggle in &view.toggles {
        cmds.push(DomCommand::SetVisibility {
            id: toggle.target.clone(),
            visible: toggle.visible,
        });
    }

    cmds
}
