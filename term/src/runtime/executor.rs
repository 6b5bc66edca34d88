//! Executes commands off the UI thread and redelivers their results as
//! messages.

use homegoing_lib::linker::Linker;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread::{self, JoinHandle},
};

use crate::events::types::{Command, ConfigMessage, Message};

/// Runs file system work requested by the application.
pub struct CommandExecutor {
    linker: Box<dyn Linker>,
}

impl CommandExecutor {
    pub fn new(linker: Box<dyn Linker>) -> Self {
        Self { linker }
    }

    /// Executes a single command and returns the messages carrying its
    /// result. `Quit` is handled by the runtime and produces nothing.
    pub fn execute(&self, cmd: Command) -> Vec<Message> {
        log::debug!("executing command: {cmd}");

        match cmd {
            Command::Quit => vec![],
            Command::Load(path) => match homegoing_lib::load_dotfiles(&path) {
                Ok(dotfiles) => {
                    vec![Message::Config(ConfigMessage::Loaded(dotfiles))]
                }
                // the model also needs to hear about it to stop loading
                Err(e) => vec![
                    Message::Failure(e.to_string()),
                    Message::Config(ConfigMessage::LoadFailed),
                ],
            },
            Command::Link(dotfile) => {
                let msg = match self.linker.link(&dotfile) {
                    Ok(()) => Message::Config(ConfigMessage::Updated(
                        dotfile.refreshed(),
                    )),
                    Err(e) => Message::Failure(e.to_string()),
                };
                vec![msg]
            }
            Command::Unlink(dotfile) => {
                let msg = match self.linker.unlink(&dotfile) {
                    Ok(()) => Message::Config(ConfigMessage::Updated(
                        dotfile.refreshed(),
                    )),
                    Err(e) => Message::Failure(e.to_string()),
                };
                vec![msg]
            }
        }
    }

    /// Blocks processing commands until the command channel closes or the
    /// message receiver goes away.
    pub fn process_commands(&self, rx: Receiver<Command>, tx: Sender<Message>) {
        while let Ok(cmd) = rx.recv() {
            for msg in self.execute(cmd) {
                if tx.send(msg).is_err() {
                    log::debug!("message receiver dropped, stopping executor");
                    return;
                }
            }
        }
        log::debug!("command channel closed, stopping executor");
    }
}

/// Starts the executor on its own thread.
pub fn spawn(
    executor: CommandExecutor,
    rx: Receiver<Command>,
    tx: Sender<Message>,
) -> JoinHandle<()> {
    thread::spawn(move || executor.process_commands(rx, tx))
}

#[cfg(test)]
#[path = "./executor_tests.rs"]
mod tests;
