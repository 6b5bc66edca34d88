//! Main event loop driving the application controller.

use color_eyre::eyre::{Result, eyre};
use core::time;
use ratatui::{
    Terminal,
    crossterm::event,
    prelude::Backend,
    style::{Color, Style},
    text::Text,
    widgets::Paragraph,
};
use std::sync::mpsc::{Receiver, Sender};

use crate::{
    events::types::{Command, Message},
    runtime::terminal::next_input,
    ui::{app::App, model::traits::ConfigModel},
};

/// How long to wait for terminal input before checking for command results.
const POLL_INTERVAL: time::Duration = time::Duration::from_millis(60);

/// Delivers messages to the application one at a time, draws every frame
/// and hands commands to the executor.
pub struct Program<M: ConfigModel, B: Backend> {
    app: App<M>,
    terminal: Terminal<B>,
    commands: Sender<Command>,
    messages: Receiver<Message>,
}

impl<M: ConfigModel, B: Backend> Program<M, B> {
    pub fn new(
        app: App<M>,
        terminal: Terminal<B>,
        commands: Sender<Command>,
        messages: Receiver<Message>,
    ) -> Self {
        Self {
            app,
            terminal,
            commands,
            messages,
        }
    }

    /// Runs until the application quits and returns the final frame.
    pub fn run(mut self) -> Result<String> {
        self.start()?;

        loop {
            self.draw()?;

            if self.app.state().is_quitting() {
                break;
            }

            self.drain_messages()?;

            // Use poll here so we don't block the thread, this will allow
            // command results to be rendered as they arrive
            if let Some(msg) = next_input(
                || event::poll(POLL_INTERVAL),
                event::read,
            )? {
                self.handle(msg)?;
            }
        }

        // results already queued may carry a failure worth reporting
        self.drain_messages()?;

        Ok(self.app.view())
    }

    fn start(&mut self) -> Result<()> {
        let cmd = self.app.init();
        self.dispatch(cmd)?;

        let size = self
            .terminal
            .size()
            .map_err(|e| eyre!("failed to get terminal size: {}", e))?;

        self.handle(Message::Resize {
            width: size.width,
            height: size.height,
        })
    }

    fn handle(&mut self, msg: Message) -> Result<()> {
        let cmd = self.app.update(msg);
        self.dispatch(cmd)
    }

    fn dispatch(&self, cmd: Option<Command>) -> Result<()> {
        match cmd {
            None => Ok(()),
            Some(Command::Quit) => {
                log::info!("quit requested");
                Ok(())
            }
            Some(cmd) => self.commands.send(cmd).map_err(|e| {
                eyre!("failed to send command to executor: {}", e)
            }),
        }
    }

    fn drain_messages(&mut self) -> Result<()> {
        while let Ok(msg) = self.messages.try_recv() {
            self.handle(msg)?;
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let frame = self.app.view();
        self.terminal
            .draw(|f| f.render_widget(frame_widget(&frame), f.area()))
            .map_err(|e| eyre!("failed to render: {}", e))?;
        Ok(())
    }
}

/// Wraps a frame for drawing, dimming the version banner line.
pub fn frame_widget(frame: &str) -> Paragraph<'_> {
    let mut text = Text::raw(frame);
    if let Some(banner) = text.lines.first_mut() {
        banner.style = Style::new().fg(Color::DarkGray);
    }
    Paragraph::new(text)
}

#[cfg(test)]
#[path = "./program_tests.rs"]
mod tests;
