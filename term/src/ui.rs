//! Application controller, help text, layout and the dotfile model.

pub mod app;
pub mod help;
pub mod keys;
pub mod layout;
pub mod model;
pub mod state;
