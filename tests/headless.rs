//! Drives the headless command loop over in-memory input and output

use std::io::Cursor;

use ecoschoolia::headless::drive;
use ecoschoolia_app::{Screen, Settings};
use ecoschoolia_core::{Tab, ViewMode};
use serde_json::Value;

fn run(settings: Settings, input: &str) -> (ecoschoolia_app::AppState, Vec<Value>) {
    let mut out = Vec::new();
    let state = drive(settings, Cursor::new(input.to_string()), &mut out).unwrap();
    let events = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    (state, events)
}

fn commands(lines: &[&str]) -> String {
    lines.join("\n")
}

#[test]
fn test_ready_is_first_event() {
    let (_, events) = run(Settings::default(), "");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["event"], "ready");
    assert_eq!(events[0]["view"], "learner");
    assert_eq!(events[0]["tabs"].as_array().unwrap().len(), 5);
}

#[test]
fn test_catalog_command() {
    let (_, events) = run(Settings::default(), r#"{"command":"catalog"}"#);
    let catalog = &events[1]["catalog"];

    assert_eq!(events[1]["event"], "catalog");
    assert_eq!(catalog["learner"]["name"], "Amani");
    assert_eq!(catalog["recommended"].as_array().unwrap().len(), 3);
    assert_eq!(catalog["assignments"][1]["status"], "Not started");
    assert_eq!(catalog["stats"][0]["value"], "92%");
}

#[test]
fn test_teacher_view_then_back_resets_tab() {
    let input = commands(&[
        r#"{"command":"select_tab","tab":"assignments"}"#,
        r#"{"command":"set_view","view":"teacher"}"#,
        r#"{"command":"set_view","view":"learner"}"#,
    ]);
    let (state, events) = run(Settings::default(), &input);

    assert_eq!(events[1]["active_tab"], "assignments");
    assert_eq!(events[2]["view"], "teacher");
    assert!(events[2]["active_tab"].is_null());
    assert_eq!(events[2]["screen"], "teacher_dashboard");
    assert_eq!(events[3]["active_tab"], "home");
    assert_eq!(state.screen(), Screen::Learner(Tab::Home));
}

#[test]
fn test_tab_selection_rejected_in_teacher_view() {
    let input = commands(&[
        r#"{"command":"set_view","view":"teacher"}"#,
        r#"{"command":"select_tab","tab":"profile"}"#,
        r#"{"command":"state"}"#,
    ]);
    let (state, events) = run(Settings::default(), &input);

    assert_eq!(events[2]["event"], "error");
    assert_eq!(events[3]["screen"], "teacher_dashboard");
    assert_eq!(state.view_mode(), ViewMode::Teacher);
}

#[test]
fn test_disabled_tab_rejected() {
    let mut settings = Settings::default();
    settings.shell.show_cbcflix = false;
    let input = commands(&[
        r#"{"command":"select_tab","tab":"cbcflix"}"#,
        r#"{"command":"state"}"#,
    ]);
    let (state, events) = run(settings, &input);

    assert_eq!(events[0]["tabs"].as_array().unwrap().len(), 4);
    assert_eq!(events[1]["event"], "error");
    assert_eq!(events[2]["active_tab"], "home");
    assert_eq!(state.active_tab(), Some(Tab::Home));
}

#[test]
fn test_bad_input_is_not_fatal() {
    let input = commands(&[
        "not json",
        r#"{"command":"select_tab","tab":"library"}"#,
        r#"{"command":"state"}"#,
    ]);
    let (_, events) = run(Settings::default(), &input);

    assert_eq!(events[1]["event"], "error");
    assert_eq!(events[2]["event"], "error");
    assert_eq!(events[3]["event"], "state");
}

#[test]
fn test_quit_stops_reading() {
    let input = commands(&[
        r#"{"command":"quit"}"#,
        r#"{"command":"select_tab","tab":"profile"}"#,
    ]);
    let (state, events) = run(Settings::default(), &input);

    assert!(state.should_quit());
    assert_eq!(state.active_tab(), Some(Tab::Home));
    assert_eq!(events.len(), 1);
}
