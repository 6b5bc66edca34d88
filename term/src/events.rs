//! Messages delivered to the application and commands it hands back.

pub mod types;
