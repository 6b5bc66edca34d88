//! Top level UI state owned by the application controller.

use strum::Display;

/// Lifecycle of the application. `Quitting` is terminal.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Display)]
pub enum Mode {
    #[default]
    Running,
    Quitting,
}

/// Transient UI state: terminal dimensions, the one pending error and the
/// lifecycle mode.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct UiState {
    /// Last observed terminal row count (0 until the first resize)
    pub height: u16,
    /// Last observed terminal column count, used to align the banner and
    /// fit the help text
    pub width: u16,
    /// Most recent collaborator failure, if not yet dismissed
    pub error: Option<String>,
    pub mode: Mode,
}

impl UiState {
    pub fn is_quitting(&self) -> bool {
        self.mode == Mode::Quitting
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Stores a failure, replacing any that has not been dismissed.
    pub fn set_error(&mut self, error: String) {
        if let Some(prev) = self.error.replace(error) {
            log::debug!("overwriting undismissed error: {prev}");
        }
    }

    /// Clears the pending error. Returns true if there was one.
    pub fn dismiss_error(&mut self) -> bool {
        self.error.take().is_some()
    }

    pub fn quit(&mut self) {
        log::debug!("mode transition: {} -> {}", self.mode, Mode::Quitting);
        self.mode = Mode::Quitting;
    }
}

#[cfg(test)]
#[path = "./state_tests.rs"]
mod tests;
