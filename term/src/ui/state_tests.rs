use super::*;

#[test]
fn starts_running_with_unknown_size() {
    let state = UiState::default();
    assert_eq!(state.mode, Mode::Running);
    assert_eq!(state.height, 0);
    assert_eq!(state.width, 0);
    assert!(state.error.is_none());
    assert!(!state.is_quitting());
}

#[test]
fn keeps_only_latest_error() {
    let mut state = UiState::default();
    state.set_error("first".to_string());
    state.set_error("second".to_string());
    assert_eq!(state.error.as_deref(), Some("second"));
}

#[test]
fn dismisses_error_once() {
    let mut state = UiState::default();
    state.set_error("oops".to_string());
    assert!(state.dismiss_error());
    assert!(!state.dismiss_error());
    assert!(state.error.is_none());
}

#[test]
fn quits() {
    let mut state = UiState::default();
    state.quit();
    assert!(state.is_quitting());
    assert_eq!(state.mode.to_string(), "Quitting");
}
