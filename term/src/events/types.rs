//! Message and command type definitions.

use std::{fmt::Display, path::PathBuf};

use homegoing_lib::dotfile::Dotfile;
use ratatui::crossterm::event::KeyEvent;

/// Results produced by the dotfile configuration model's commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigMessage {
    /// The manifest was (re)loaded
    Loaded(Vec<Dotfile>),
    /// The manifest could not be loaded. The error itself travels as a
    /// separate `Message::Failure`
    LoadFailed,
    /// A single dotfile changed after a link or unlink
    Updated(Dotfile),
}

/// Everything the application reacts to, one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Terminal was resized to the given dimensions
    Resize { width: u16, height: u16 },
    /// A key was pressed
    Key(KeyEvent),
    /// Any collaborator reported a failure
    Failure(String),
    /// Domain message for the configuration model
    Config(ConfigMessage),
}

/// Side effects requested by the application and executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Load(PathBuf),
    Link(Dotfile),
    Unlink(Dotfile),
}

impl Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Quit => write!(f, "quit"),
            Command::Load(path) => write!(f, "load {}", path.display()),
            Command::Link(dotfile) => write!(f, "link {}", dotfile.name),
            Command::Unlink(dotfile) => write!(f, "unlink {}", dotfile.name),
        }
    }
}

#[cfg(test)]
#[path = "./types_tests.rs"]
mod tests;
