use serde_json::json;
use slimflix_core::{update, AppState, Effect, ListKind, ListOutcome, MediaType, Msg};

fn mount(state: AppState, kind: ListKind, limit: Option<u32>) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::ListMounted {
            kind,
            media_type: MediaType::Tv,
            limit,
        },
    )
}

#[test]
fn mount_fetches_once_with_loading_set() {
    let (mut state, effects) = mount(AppState::new(), ListKind::Available, Some(12));

    assert_eq!(
        effects,
        vec![Effect::FetchList {
            kind: ListKind::Available,
            token: 1,
            media_type: MediaType::Tv,
            limit: Some(12),
        }]
    );
    assert!(state.list(ListKind::Available).is_loading());
    assert!(!state.list(ListKind::Recent).is_loading());
    assert!(state.consume_dirty());

    let (state, effects) = mount(state, ListKind::Available, Some(12));
    assert!(effects.is_empty());
    assert!(state.list(ListKind::Available).is_loading());
}

#[test]
fn list_populates_after_settlement() {
    let (state, _) = mount(AppState::new(), ListKind::Recent, None);
    let (state, _) = update(
        state,
        Msg::ListSettled {
            kind: ListKind::Recent,
            token: 1,
            outcome: ListOutcome::Items(vec![json!({"title": "Severance", "year": 2022})]),
        },
    );

    let view = state.view();
    let recent = view.list(ListKind::Recent).expect("recent list view");
    assert!(!recent.loading);
    assert_eq!(recent.results, vec!["Severance (2022)"]);
    assert_eq!(recent.media_type, MediaType::Tv);
}

#[test]
fn backend_error_yields_empty_list_and_clears_loading() {
    let (state, _) = mount(AppState::new(), ListKind::Available, Some(5));
    let (state, _) = update(
        state,
        Msg::ListSettled {
            kind: ListKind::Available,
            token: 1,
            outcome: ListOutcome::BackendError("Jackett not configured".to_string()),
        },
    );

    assert!(state.list(ListKind::Available).results().is_empty());
    assert!(!state.list(ListKind::Available).is_loading());
}

#[test]
fn transport_failure_clears_loading() {
    let (state, _) = mount(AppState::new(), ListKind::Available, None);
    let (state, _) = update(
        state,
        Msg::ListSettled {
            kind: ListKind::Available,
            token: 1,
            outcome: ListOutcome::Failed("timeout".to_string()),
        },
    );

    assert!(state.list(ListKind::Available).results().is_empty());
    assert!(!state.list(ListKind::Available).is_loading());
}

#[test]
fn widgets_do_not_share_state() {
    let (state, _) = mount(AppState::new(), ListKind::Available, None);
    let (state, _) = mount(state, ListKind::Recent, None);

    let (state, _) = update(
        state,
        Msg::ListSettled {
            kind: ListKind::Recent,
            token: 1,
            outcome: ListOutcome::Items(vec![json!({"title": "Andor"})]),
        },
    );

    assert!(state.list(ListKind::Available).is_loading());
    assert!(state.list(ListKind::Available).results().is_empty());
    assert_eq!(state.list(ListKind::Recent).results().len(), 1);
}

#[test]
fn settlement_for_unmounted_list_is_ignored() {
    let settled = Msg::ListSettled {
        kind: ListKind::Recent,
        token: 1,
        outcome: ListOutcome::Items(vec![json!({"title": "Andor"})]),
    };
    assert_eq!(
        AppState::new().stale_settlement(&settled),
        Some(("jackett_recent", 1))
    );

    let (mut state, effects) = update(AppState::new(), settled);

    assert!(effects.is_empty());
    assert!(state.list(ListKind::Recent).results().is_empty());
    assert!(!state.consume_dirty());
}
