//! Terminal setup/teardown and translation of terminal events into
//! messages.

use color_eyre::eyre::{Context, Result};
use ratatui::crossterm::{
    event::{Event as CrossTermEvent, KeyEventKind},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use std::io;

use crate::events::types::Message;

/// Puts the terminal in raw mode on the alternate screen.
pub fn enter() -> Result<()> {
    enable_raw_mode().wrap_err("failed to enter raw mode")?;
    execute!(io::stdout(), EnterAlternateScreen)
        .wrap_err("failed to enter alternate screen")?;
    Ok(())
}

/// Undoes [`enter`].
pub fn restore() -> Result<()> {
    disable_raw_mode().wrap_err("failed to disable raw mode")?;
    execute!(io::stdout(), LeaveAlternateScreen)
        .wrap_err("failed to leave alternate screen")?;
    Ok(())
}

/// Maps the terminal events the application cares about to messages. Key
/// releases and repeats, mouse and focus events are dropped.
pub fn translate_event(evt: CrossTermEvent) -> Option<Message> {
    match evt {
        CrossTermEvent::Key(key) if key.kind == KeyEventKind::Press => {
            Some(Message::Key(key))
        }
        CrossTermEvent::Resize(width, height) => {
            Some(Message::Resize { width, height })
        }
        _ => None,
    }
}

/// Reads one terminal event if `poll` reports one is ready and translates
/// it. Errors from either the poll or the read are returned.
pub fn next_input(
    poll: impl FnOnce() -> io::Result<bool>,
    read: impl FnOnce() -> io::Result<CrossTermEvent>,
) -> Result<Option<Message>> {
    if !poll().wrap_err("failed to poll terminal events")? {
        return Ok(None);
    }
    let evt = read().wrap_err("failed to read terminal event")?;
    Ok(translate_event(evt))
}

#[cfg(test)]
#[path = "./terminal_tests.rs"]
mod tests;
