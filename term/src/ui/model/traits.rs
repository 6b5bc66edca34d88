#[cfg(test)]
use mockall::automock;

use crate::{
    events::types::{Command, Message},
    ui::keys::ConfigKeyMap,
};

/// Domain model driven by the application controller. Implementations must
/// never block: slow work is returned as a [`Command`] and its result comes
/// back later as a [`Message`].
#[cfg_attr(test, automock)]
pub trait ConfigModel {
    /// Called once at startup.
    fn init(&mut self) -> Option<Command>;
    /// Processes a single forwarded message.
    fn update(&mut self, msg: Message) -> Option<Command>;
    /// Renders the current state. Must not mutate anything.
    fn view(&self) -> String;
    /// Bindings the model reacts to, for display in help.
    fn keys(&self) -> &ConfigKeyMap;
}
