//! Dotfile list model: navigation, refresh, link and unlink.

use homegoing_lib::dotfile::Dotfile;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

use crate::{
    events::types::{Command, ConfigMessage, Message},
    ui::{keys::ConfigKeyMap, model::traits::ConfigModel},
};

const SELECTED_MARKER: &str = ">";

/// Progress of the most recent manifest load.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
enum LoadState {
    #[default]
    Idle,
    Loading,
    Failed,
}

/// Lists the dotfiles from a manifest and requests links/unlinks for the
/// selected entry.
pub struct DotConfigModel {
    manifest: PathBuf,
    keys: ConfigKeyMap,
    dotfiles: Vec<Dotfile>,
    cursor: usize,
    load_state: LoadState,
}

impl DotConfigModel {
    pub fn new(manifest: PathBuf) -> Self {
        Self {
            manifest,
            keys: ConfigKeyMap::default(),
            dotfiles: Vec::new(),
            cursor: 0,
            load_state: LoadState::Idle,
        }
    }

    pub fn selected(&self) -> Option<&Dotfile> {
        self.dotfiles.get(self.cursor)
    }

    fn load(&mut self) -> Option<Command> {
        self.load_state = LoadState::Loading;
        Some(Command::Load(self.manifest.clone()))
    }

    fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn move_down(&mut self) {
        if self.cursor + 1 < self.dotfiles.len() {
            self.cursor += 1;
        }
    }

    fn set_dotfiles(&mut self, dotfiles: Vec<Dotfile>) {
        self.dotfiles = dotfiles;
        self.load_state = LoadState::Idle;
        self.cursor = self.cursor.min(self.dotfiles.len().saturating_sub(1));
    }

    fn replace_dotfile(&mut self, dotfile: Dotfile) {
        match self.dotfiles.iter_mut().find(|d| d.name == dotfile.name) {
            Some(existing) => *existing = dotfile,
            None => log::warn!("received update for unknown dotfile {}", dotfile.name),
        }
    }
}

impl ConfigModel for DotConfigModel {
    fn init(&mut self) -> Option<Command> {
        self.load()
    }

    fn update(&mut self, msg: Message) -> Option<Command> {
        match msg {
            Message::Key(key) => {
                if self.keys.up.matches(&key) {
                    self.move_up();
                } else if self.keys.down.matches(&key) {
                    self.move_down();
                } else if self.keys.refresh.matches(&key) {
                    return self.load();
                } else if self.keys.link.matches(&key) {
                    return self.selected().cloned().map(Command::Link);
                } else if self.keys.unlink.matches(&key) {
                    return self.selected().cloned().map(Command::Unlink);
                }
                None
            }
            Message::Config(ConfigMessage::Loaded(dotfiles)) => {
                self.set_dotfiles(dotfiles);
                None
            }
            Message::Config(ConfigMessage::LoadFailed) => {
                // keep whatever was listed before
                self.load_state = LoadState::Failed;
                None
            }
            Message::Config(ConfigMessage::Updated(dotfile)) => {
                self.replace_dotfile(dotfile);
                None
            }
            Message::Resize { .. } | Message::Failure(_) => None,
        }
    }

    fn view(&self) -> String {
        if self.dotfiles.is_empty() {
            return match self.load_state {
                LoadState::Loading => "Loading dotfiles...\n".to_string(),
                LoadState::Failed => format!(
                    "Unable to load dotfiles from {}\n",
                    self.manifest.display()
                ),
                LoadState::Idle => format!(
                    "No dotfiles found in {}\n",
                    self.manifest.display()
                ),
            };
        }

        let name_width = self
            .dotfiles
            .iter()
            .map(|d| d.name.width())
            .max()
            .unwrap_or(0);

        self.dotfiles
            .iter()
            .enumerate()
            .map(|(i, dotfile)| {
                let marker = if i == self.cursor { SELECTED_MARKER } else { " " };
                let fill = name_width - dotfile.name.width();
                format!(
                    "{marker} {}{}  [{}] {}\n",
                    dotfile.name,
                    " ".repeat(fill),
                    dotfile.status,
                    dotfile.target.display()
                )
            })
            .collect()
    }

    fn keys(&self) -> &ConfigKeyMap {
        &self.keys
    }
}

#[cfg(test)]
#[path = "./dotconfig_tests.rs"]
mod tests;
