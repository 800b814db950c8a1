use slimflix_core::{update, AppState, Msg, SettingsForm};

#[test]
fn click_on_unbound_toggle_is_noop() {
    let state = AppState::new();
    let (mut next, effects) = update(
        state.clone(),
        Msg::ToggleClicked {
            target: "season-9".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
    assert_eq!(state, next);
}

#[test]
fn unknown_settings_field_is_ignored() {
    let state = AppState::new();
    let (mut next, effects) = update(
        state.clone(),
        Msg::FieldChanged {
            form: SettingsForm::Jackett,
            field: "qbittorrent_pass".to_string(),
            value: "secret".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
    assert_eq!(state, next);
}
