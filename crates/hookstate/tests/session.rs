// End-to-end tests for the terminal session, fed from in-memory input.

use std::io::Cursor;

use hookstate::Session;
use hookstate_core::HistoryConfig;

fn run_script(capacity: usize, script: &str) -> Vec<String> {
    let mut session =
        Session::new(1, &HistoryConfig::with_capacity(capacity), false).expect("session");
    let mut out = Vec::new();
    session.run(Cursor::new(script), &mut out).expect("run");
    String::from_utf8(out)
        .expect("utf8")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_capacity_walkthrough() {
    let lines = run_script(3, "set 2\nset 3\nset 4\nback\nset 9\n");
    assert_eq!(
        lines,
        vec![
            "value=1 pointer=0 history=[1]",
            "value=2 pointer=1 history=[1, 2]",
            "value=3 pointer=2 history=[1, 2, 3]",
            "value=4 pointer=2 history=[2, 3, 4]",
            "value=3 pointer=1 history=[2, 3, 4]",
            "value=9 pointer=2 history=[2, 3, 9]",
        ]
    );
}

#[test]
fn test_bad_commands_do_not_stop_session() {
    let lines = run_script(10, "jump\ngo x\n\ninc\n");
    assert_eq!(
        lines,
        vec![
            "value=1 pointer=0 history=[1]",
            "error: unknown command `jump`, try `help`",
            "error: invalid number `x`",
            "value=2 pointer=1 history=[1, 2]",
        ]
    );
}

#[test]
fn test_quit_stops_reading() {
    let lines = run_script(10, "inc\nquit\ninc\n");
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "value=2 pointer=1 history=[1, 2]");
}

#[test]
fn test_go_out_of_range_is_silent() {
    let lines = run_script(10, "double\ngo 5\ngo 0\n");
    assert_eq!(
        lines[2..],
        [
            "value=2 pointer=1 history=[1, 2]",
            "value=1 pointer=0 history=[1, 2]",
        ]
    );
}

#[test]
fn test_help_lists_commands() {
    let lines = run_script(10, "help\n");
    assert!(lines.iter().any(|l| l.trim_start().starts_with("go <index>")));
}

#[test]
fn test_toggle_shows_previous() {
    let lines = run_script(10, "toggle\ninc\n");
    assert_eq!(lines[1], "value=1 pointer=0 history=[1] previous=-");
    assert_eq!(lines[2], "value=2 pointer=1 history=[1, 2] previous=1");
}

#[test]
fn test_increment_at_max_prints_note() {
    let script = format!("set {}\ninc\n", i64::MAX);
    let lines = run_script(10, &script);
    let max = i64::MAX;
    assert_eq!(
        lines[2..],
        [
            "note: value is already at the i64 limit".to_string(),
            format!("value={max} pointer=1 history=[1, {max}]"),
        ]
    );
}
