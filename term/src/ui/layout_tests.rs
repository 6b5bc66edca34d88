use crate::ui::state::Mode;

use super::*;

fn state(width: u16, height: u16, error: Option<&str>) -> UiState {
    UiState {
        width,
        height,
        error: error.map(str::to_string),
        mode: Mode::Running,
    }
}

#[test]
fn right_aligns_banner() {
    let banner = version_banner(80);
    assert_eq!(banner.width(), 80);
    assert!(banner.ends_with(VERSION_BANNER));
    assert!(banner.starts_with(' '));
}

#[test]
fn leaves_banner_alone_when_too_narrow() {
    assert_eq!(version_banner(0), VERSION_BANNER);
    assert_eq!(version_banner(3), VERSION_BANNER);
}

#[test]
fn banner_names_crate_version() {
    assert_eq!(VERSION_BANNER, format!("homegoing v{}", env!("CARGO_PKG_VERSION")));
}

#[test]
fn counts_line_breaks() {
    assert_eq!(line_count(""), 0);
    assert_eq!(line_count("one"), 0);
    assert_eq!(line_count("one\ntwo\n"), 2);
}

#[test]
fn pads_to_fill_height() {
    assert_eq!(padding(20, &["", "a\nb\n", "help"]), 16);
}

#[test]
fn padding_clamps_at_zero() {
    assert_eq!(padding(3, &["a\nb\nc\nd\n"]), 0);
    assert_eq!(padding(0, &[]), 0);
}

#[test]
fn composes_running_frame() {
    let state = state(40, 10, None);

    let frame = running_frame(&state, "config\n", "help");

    let expected = format!(
        "{}\nconfig\n{}help",
        version_banner(40),
        "\n".repeat(10 - 1 - 2)
    );
    assert_eq!(frame, expected);
    assert_eq!(line_count(&frame), 9);
}

#[test]
fn appends_error_block_after_config_view() {
    let state = state(40, 10, Some("disk unreadable"));

    let frame = running_frame(&state, "config\n", "help");

    assert!(frame.contains("config\n  An error has occurred:\n  disk unreadable\n"));
    // one line less padding for the error block
    assert_eq!(line_count(&frame), 9);
    assert!(frame.ends_with("help"));
}

#[test]
fn quitting_frame_is_empty_without_error() {
    let mut state = state(40, 10, None);
    state.mode = Mode::Quitting;
    assert_eq!(quitting_frame(&state), "");
}

#[test]
fn quitting_frame_shows_fatal_error() {
    let mut state = state(40, 10, Some("boom"));
    state.mode = Mode::Quitting;
    assert_eq!(
        quitting_frame(&state),
        format!("{}\nA fatal error occurred: boom", version_banner(40))
    );
}
