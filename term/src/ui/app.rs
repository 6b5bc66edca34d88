//! Application controller: the top level update/view state machine.

use log::*;

use crate::{
    events::types::{Command, Message},
    ui::{
        help::{HelpView, KeyMap},
        keys::{AppKeyMap, KeyBinding},
        layout,
        model::traits::ConfigModel,
        state::UiState,
    },
};

/// Owns the UI state, the controller's own key bindings, the help renderer
/// and the configuration model every other message is forwarded to.
pub struct App<M: ConfigModel> {
    state: UiState,
    keys: AppKeyMap,
    help: HelpView,
    config: M,
}

impl<M: ConfigModel> App<M> {
    pub fn new(keys: AppKeyMap, help: HelpView, config: M) -> Self {
        Self {
            state: UiState::default(),
            keys,
            help,
            config,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn init(&mut self) -> Option<Command> {
        self.config.init()
    }

    /// Processes one message and returns the follow-up command, if any.
    pub fn update(&mut self, msg: Message) -> Option<Command> {
        if self.state.is_quitting() {
            // failures still land so they can be reported as fatal
            match msg {
                Message::Failure(err) => {
                    warn!("failure received while quitting: {err}");
                    self.state.set_error(err);
                }
                other => debug!("dropping message received while quitting: {other:?}"),
            }
            return None;
        }

        match msg {
            Message::Failure(err) => {
                warn!("collaborator failure: {err}");
                self.state.set_error(err);
                return None;
            }
            Message::Resize { width, height } => {
                self.state.resize(width, height);
            }
            Message::Key(ref key) => {
                if self.state.dismiss_error() {
                    debug!("error dismissed by key press");
                }

                if self.keys.quit.matches(key) {
                    self.state.quit();
                    return Some(Command::Quit);
                }

                if self.keys.help.matches(key) {
                    self.help.toggle();
                }
            }
            Message::Config(_) => {}
        }

        self.config.update(msg)
    }

    /// Renders the full frame. Pure: calling it twice without an update in
    /// between returns identical output.
    pub fn view(&self) -> String {
        if self.state.is_quitting() {
            return layout::quitting_frame(&self.state);
        }

        let config_view = self.config.view();
        let help_view = self.help.view(self, self.state.width);
        layout::running_frame(&self.state, &config_view, &help_view)
    }
}

impl<M: ConfigModel> KeyMap for App<M> {
    fn short_help(&self) -> Vec<&KeyBinding> {
        let config = self.config.keys();
        vec![
            &self.keys.quit,
            &config.up,
            &config.down,
            &config.refresh,
            &config.link,
            &config.unlink,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&KeyBinding>> {
        let config = self.config.keys();
        vec![
            vec![&self.keys.quit, &self.keys.help],
            vec![&config.refresh],
            vec![&config.link, &config.unlink],
        ]
    }
}

#[cfg(test)]
#[path = "./app_tests.rs"]
mod tests;
