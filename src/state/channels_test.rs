use super::*;

#[test]
fn default_state_is_empty_and_idle() {
    let state = ChannelsState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert_eq!(state.error, None);
}
