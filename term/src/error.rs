use std::any::Any;

use color_eyre::eyre::{Report, eyre};

/// Converts the payload of a panicked thread into a report.
pub fn report_from_thread_panic(e: Box<dyn Any + Send>) -> Report {
    let reason = e
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| e.downcast_ref::<String>().cloned());

    match reason {
        Some(reason) => eyre!("thread panicked: {reason}"),
        None => eyre!("thread panicked for unknown reason"),
    }
}

#[cfg(test)]
#[path = "./error_tests.rs"]
mod tests;
