//! Hosting runtime: terminal lifecycle, the event loop and the command
//! executor thread.

pub mod executor;
pub mod program;
pub mod terminal;
