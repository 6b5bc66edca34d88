//! Composes the full frame from the banner, config view, error block and
//! help text.
//!
//! Region heights are measured by counting line breaks in the rendered
//! text, so lines that soft-wrap on a narrow terminal are not accounted
//! for and the help region can be pushed off screen.

use unicode_width::UnicodeWidthStr;

use crate::ui::state::UiState;

pub const VERSION_BANNER: &str =
    concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"));

/// Spacing kept free between sections when computing padding.
const RESERVED_LINES: usize = 2;

/// Banner right-aligned to `width` columns.
pub fn version_banner(width: u16) -> String {
    let fill = usize::from(width).saturating_sub(VERSION_BANNER.width());
    format!("{}{VERSION_BANNER}", " ".repeat(fill))
}

pub fn line_count(text: &str) -> usize {
    text.matches('\n').count()
}

/// Blank lines needed to push the help region to the bottom of a terminal
/// `height` rows tall.
pub fn padding(height: u16, regions: &[&str]) -> usize {
    let used = regions.iter().map(|r| line_count(r)).sum::<usize>();
    usize::from(height).saturating_sub(used + RESERVED_LINES)
}

/// Frame shown once the application is quitting: the fatal error if there
/// is one, nothing otherwise.
pub fn quitting_frame(state: &UiState) -> String {
    match &state.error {
        Some(err) => format!(
            "{}\nA fatal error occurred: {err}",
            version_banner(state.width)
        ),
        None => String::new(),
    }
}

/// Frame shown while running: banner, config view, inline error, padding,
/// help.
pub fn running_frame(
    state: &UiState,
    config_view: &str,
    help_view: &str,
) -> String {
    let banner = version_banner(state.width);
    let error_block = state
        .error
        .as_ref()
        .map(|err| format!("  An error has occurred:\n  {err}"))
        .unwrap_or_default();

    let padding = padding(
        state.height,
        &[&banner, config_view, help_view, &error_block],
    );

    let mut frame = String::with_capacity(
        banner.len()
            + config_view.len()
            + error_block.len()
            + padding
            + help_view.len()
            + 1,
    );
    frame.push_str(&banner);
    frame.push('\n');
    frame.push_str(config_view);
    frame.push_str(&error_block);
    frame.push_str(&"\n".repeat(padding));
    frame.push_str(help_view);
    frame
}

#[cfg(test)]
#[path = "./layout_tests.rs"]
mod tests;
