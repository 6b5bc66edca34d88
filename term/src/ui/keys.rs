//! Key bindings and key name decoding.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Literal key sequences bound to a single action, with the text shown for
/// it in help.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    keys: &'static [&'static str],
    help_key: &'static str,
    help_desc: &'static str,
}

impl KeyBinding {
    pub const fn new(
        keys: &'static [&'static str],
        help_key: &'static str,
        help_desc: &'static str,
    ) -> Self {
        Self {
            keys,
            help_key,
            help_desc,
        }
    }

    pub fn help_key(&self) -> &str {
        self.help_key
    }

    pub fn help_desc(&self) -> &str {
        self.help_desc
    }

    /// Reports whether the pressed key is one of this binding's sequences.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let name = key_name(key);
        self.keys.iter().any(|k| *k == name)
    }
}

/// Bindings handled by the application controller itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppKeyMap {
    pub quit: KeyBinding,
    pub help: KeyBinding,
}

impl Default for AppKeyMap {
    fn default() -> Self {
        Self {
            quit: KeyBinding::new(&["q", "ctrl+c"], "q", "quit"),
            help: KeyBinding::new(&["?"], "?", "toggle help"),
        }
    }
}

/// Bindings owned by the dotfile configuration model. The controller only
/// displays these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigKeyMap {
    pub up: KeyBinding,
    pub down: KeyBinding,
    pub refresh: KeyBinding,
    pub link: KeyBinding,
    pub unlink: KeyBinding,
}

impl Default for ConfigKeyMap {
    fn default() -> Self {
        Self {
            up: KeyBinding::new(&["up", "k"], "↑/k", "up"),
            down: KeyBinding::new(&["down", "j"], "↓/j", "down"),
            refresh: KeyBinding::new(&["r"], "r", "refresh"),
            link: KeyBinding::new(&["l", "enter"], "l", "link"),
            unlink: KeyBinding::new(&["u", "backspace"], "u", "unlink"),
        }
    }
}

/// Decodes a key event into the name used by key bindings, e.g. `q`,
/// `ctrl+c`, `up` or `enter`.
pub fn key_name(key: &KeyEvent) -> String {
    let code = match key.code {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::BackTab => "shift+tab".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Insert => "insert".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pgup".to_string(),
        KeyCode::PageDown => "pgdown".to_string(),
        KeyCode::F(n) => format!("f{n}"),
        _ => "unknown".to_string(),
    };

    let mut name = String::new();

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        name.push_str("ctrl+");
    }

    if key.modifiers.contains(KeyModifiers::ALT) {
        name.push_str("alt+");
    }

    name.push_str(&code);
    name
}

#[cfg(test)]
#[path = "./keys_tests.rs"]
mod tests;
