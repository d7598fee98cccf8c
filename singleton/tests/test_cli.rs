//! End-to-end run of the `singleton` binary.

use std::process::Command;

fn run_binary() -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_singleton"))
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch the singleton binary")
}

#[test]
fn exits_successfully() {
    let output = run_binary();
    assert!(output.status.success(), "status: {:?}", output.status);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn prints_the_expected_counter_sequence() {
    let output = run_binary();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let values: Vec<u64> = stdout
        .lines()
        .filter_map(|line| line.rsplit_once(" = "))
        .map(|(_, v)| v.parse().unwrap())
        .collect();

    let mut expected = vec![0, 1, 1];
    expected.extend(0..10);
    expected.push(10);
    assert_eq!(values, expected);
}

#[test]
fn second_handle_line_and_banner_are_in_place() {
    let output = run_binary();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines[2], "handle_2.counter = 1");
    assert_eq!(lines[3], singleton::demo::BANNER);
    assert_eq!(lines.last().copied(), Some("handle_1.counter = 10"));
}

#[test]
fn nothing_is_logged_by_default() {
    let output = run_binary();
    assert!(output.stderr.is_empty(), "unexpected stderr output");
}
