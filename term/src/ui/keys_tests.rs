use super::*;

fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

#[test]
fn names_plain_characters() {
    assert_eq!(key_name(&key(KeyCode::Char('q'), KeyModifiers::NONE)), "q");
    assert_eq!(key_name(&key(KeyCode::Char('?'), KeyModifiers::SHIFT)), "?");
    assert_eq!(key_name(&key(KeyCode::Char(' '), KeyModifiers::NONE)), "space");
}

#[test]
fn names_modified_keys() {
    assert_eq!(
        key_name(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        "ctrl+c"
    );
    assert_eq!(
        key_name(&key(KeyCode::Char('x'), KeyModifiers::CONTROL | KeyModifiers::ALT)),
        "ctrl+alt+x"
    );
}

#[test]
fn names_special_keys() {
    assert_eq!(key_name(&key(KeyCode::Up, KeyModifiers::NONE)), "up");
    assert_eq!(key_name(&key(KeyCode::Down, KeyModifiers::NONE)), "down");
    assert_eq!(key_name(&key(KeyCode::Enter, KeyModifiers::NONE)), "enter");
    assert_eq!(key_name(&key(KeyCode::BackTab, KeyModifiers::SHIFT)), "shift+tab");
    assert_eq!(key_name(&key(KeyCode::F(5), KeyModifiers::NONE)), "f5");
}

#[test]
fn matches_any_bound_sequence() {
    let keys = AppKeyMap::default();

    assert!(keys.quit.matches(&key(KeyCode::Char('q'), KeyModifiers::NONE)));
    assert!(keys.quit.matches(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(!keys.quit.matches(&key(KeyCode::Char('c'), KeyModifiers::NONE)));
    assert!(keys.help.matches(&key(KeyCode::Char('?'), KeyModifiers::SHIFT)));
}

#[test]
fn config_bindings_cover_arrows_and_letters() {
    let keys = ConfigKeyMap::default();

    assert!(keys.up.matches(&key(KeyCode::Up, KeyModifiers::NONE)));
    assert!(keys.up.matches(&key(KeyCode::Char('k'), KeyModifiers::NONE)));
    assert!(keys.down.matches(&key(KeyCode::Char('j'), KeyModifiers::NONE)));
    assert!(keys.link.matches(&key(KeyCode::Enter, KeyModifiers::NONE)));
    assert!(keys.unlink.matches(&key(KeyCode::Char('u'), KeyModifiers::NONE)));
    assert!(keys.refresh.matches(&key(KeyCode::Char('r'), KeyModifiers::NONE)));
    assert_eq!(keys.up.help_key(), "↑/k");
    assert_eq!(keys.up.help_desc(), "up");
}
