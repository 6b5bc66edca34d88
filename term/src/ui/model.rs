//! The configuration model the controller delegates domain messages to.

pub mod dotconfig;
pub mod traits;
