use color_eyre::eyre::WrapErr;
use std::thread;

use super::*;

#[test]
fn test_report_from_str_panic() {
    let payload = thread::spawn(|| panic!("boom")).join().unwrap_err();
    let report = report_from_thread_panic(payload);
    assert_eq!(report.to_string(), "thread panicked: boom");
}

#[test]
fn test_report_from_string_panic() {
    let name = "link";
    let payload = thread::spawn(move || panic!("failed {name}"))
        .join()
        .unwrap_err();
    let report = report_from_thread_panic(payload);
    assert_eq!(report.to_string(), "thread panicked: failed link");
}

#[test]
fn test_report_from_unknown_panic() {
    let report = report_from_thread_panic(Box::new(42_u8));
    assert_eq!(
        report.to_string(),
        "thread panicked for unknown reason"
    );
}

#[test]
fn test_report_takes_context_from_caller() {
    let payload = thread::spawn(|| panic!("boom")).join().unwrap_err();
    let report = Err::<(), _>(payload)
        .map_err(report_from_thread_panic)
        .wrap_err("command executor stopped unexpectedly")
        .unwrap_err();

    assert_eq!(report.to_string(), "command executor stopped unexpectedly");
    assert_eq!(
        report.chain().nth(1).map(|e| e.to_string()),
        Some("thread panicked: boom".to_string())
    );
}
