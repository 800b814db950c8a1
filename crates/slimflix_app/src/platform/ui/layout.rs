use slimflix_core::{
    list_region_id, Bitmap, ListKind, MediaType, Msg, SettingsForm, DATA_TARGET_ATTR,
    SEARCH_RESULTS_ID, SEASON_TOGGLE_CLASS, SETTINGS_NOTIFICATIONS_ID,
};

use super::constants::{submit_button_id, SEARCH_INPUT_ID, SEASON_SECTIONS};
use super::page::{Element, Page};

/// Static markup the widgets attach to.
pub fn page_template() -> Page {
    let mut page = Page::default();

    page.insert(SEARCH_INPUT_ID, Element::default().with_label("Search"));
    page.insert(SEARCH_RESULTS_ID, Element::default());
    for kind in ListKind::ALL {
        page.insert(list_region_id(kind), Element::default().with_label(kind.label()));
    }

    for (number, title) in SEASON_SECTIONS.iter().enumerate() {
        let target = format!("season-{}", number + 1);
        page.insert(
            &format!("toggle-{target}"),
            Element::default()
                .with_class(SEASON_TOGGLE_CLASS)
                .with_attr(DATA_TARGET_ATTR, &target)
                .with_label(title),
        );
        page.insert(&target, Element::default().hidden());
    }

    for form in SettingsForm::ALL {
        page.insert(form.element_id(), Element::default());
        page.insert(
            &submit_button_id(form),
            Element::default().with_label(form.submit_label()),
        );
    }
    page.insert(SETTINGS_NOTIFICATIONS_ID, Element::default());

    page
}

/// Widget initialization entry points, in the order the page mounts them:
/// icon first, then toggle bindings, then the list fetches.
pub fn bootstrap(page: &Page, media_type: MediaType, available_limit: Option<u32>) -> Vec<Msg> {
    let mut msgs = vec![Msg::FaviconInstalled {
        data_url: Bitmap::favicon().to_data_url(),
    }];
    msgs.extend(bind_toggles(page));
    msgs.extend(ListKind::ALL.into_iter().map(|kind| Msg::ListMounted {
        kind,
        media_type,
        limit: available_limit.filter(|_| kind.accepts_limit()),
    }));
    msgs
}

/// One binding per element carrying both the toggle class and a target.
/// Targets that are not on the page are skipped.
pub fn bind_toggles(page: &Page) -> Vec<Msg> {
    page.by_class(SEASON_TOGGLE_CLASS)
        .filter_map(|(_, toggle)| {
            let target = toggle.attrs.get(DATA_TARGET_ATTR)?;
            let section = page.get(target)?;
            Some(Msg::ToggleRegistered {
                target: target.clone(),
                visible: !section.hidden,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_exposes_dom_contract_ids() {
        let page = page_template();
        for id in [
            "jackett-settings-form",
            "qbittorrent-settings-form",
            "settings-notifications",
            "search-results",
        ] {
            assert!(page.get(id).is_some(), "missing #{id}");
        }
    }

    #[test]
    fn toggles_bind_to_existing_targets_only() {
        let mut page = page_template();
        page.insert(
            "toggle-orphan",
            Element::default()
                .with_class(SEASON_TOGGLE_CLASS)
                .with_attr(DATA_TARGET_ATTR, "nowhere"),
        );
        page.insert("toggle-bare", Element::default().with_class(SEASON_TOGGLE_CLASS));

        let msgs = bind_toggles(&page);

        assert_eq!(msgs.len(), SEASON_SECTIONS.len());
        assert!(msgs.iter().all(|msg| matches!(
            msg,
            Msg::ToggleRegistered { visible: false, .. }
        )));
    }

    #[test]
    fn bootstrap_limits_only_available_list() {
        let msgs = bootstrap(&page_template(), MediaType::Tv, Some(12));

        assert!(matches!(msgs.first(), Some(Msg::FaviconInstalled { .. })));
        assert!(msgs.contains(&Msg::ListMounted {
            kind: ListKind::Available,
            media_type: MediaType::Tv,
            limit: Some(12),
        }));
        assert!(msgs.contains(&Msg::ListMounted {
            kind: ListKind::Recent,
            media_type: MediaType::Tv,
            limit: None,
        }));
    }
}
