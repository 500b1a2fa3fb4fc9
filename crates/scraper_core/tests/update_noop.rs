use scraper_core::{update, AppState, Msg};

#[test]
fn dismissing_unknown_notification_is_noop() {
    let state = AppState::new();
    let (mut next, effects) = update(state.clone(), Msg::NotificationDismissed(42));

    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
    assert_eq!(state, next);
}

#[test]
fn editing_to_the_same_url_does_not_dirty_state() {
    let (mut state, _) = update(
        AppState::new(),
        Msg::ChannelUrlChanged("https://youtube.com/@test".to_string()),
    );
    assert!(state.consume_dirty());

    let (mut next, effects) = update(
        state,
        Msg::ChannelUrlChanged("https://youtube.com/@test".to_string()),
    );
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}
