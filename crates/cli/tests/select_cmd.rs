//! CLI tests for the `argvee select` and `argvee match` subcommands.

use std::process::Command;

use assert_cmd::cargo;

fn argvee_cmd() -> Command {
    Command::new(cargo::cargo_bin!("argvee"))
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("valid json")
}

const SERVER_ARGS: [&str; 6] = ["serve", "-p", "8080", "--host", "localhost", "-v"];

#[test]
fn select_mixed_converts_numbers() {
    let output = argvee_cmd()
        .args(["--output", "json", "select", "-k", "p", "-k", "host", "--"])
        .args(SERVER_ARGS)
        .output()
        .expect("run select command");

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json[0], 8080.0);
    assert_eq!(json[1], "localhost");
}

#[test]
fn select_string_keeps_text() {
    let output = argvee_cmd()
        .args(["--output", "json", "select", "--as", "string", "-k", "p", "--"])
        .args(SERVER_ARGS)
        .output()
        .expect("run select command");

    assert!(output.status.success());
    assert_eq!(stdout_json(&output), serde_json::json!(["8080"]));
}

#[test]
fn select_number_drops_text() {
    let output = argvee_cmd()
        .args([
            "--output", "json", "select", "--as", "number", "-k", "host", "-k", "p", "--",
        ])
        .args(SERVER_ARGS)
        .output()
        .expect("run select command");

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json.as_array().map(Vec::len), Some(1));
    assert_eq!(json[0], 8080.0);
}

#[test]
fn select_missing_key_is_empty() {
    let output = argvee_cmd()
        .args(["--output", "json", "select", "-k", "missing", "--"])
        .args(SERVER_ARGS)
        .output()
        .expect("run select command");

    assert!(output.status.success());
    assert_eq!(stdout_json(&output), serde_json::json!([]));
}

#[test]
fn match_mode_succeeds() {
    let output = argvee_cmd()
        .args([
            "--output", "json", "match", "--field", "modes", "-k", "v", "-k", "verbose", "--",
        ])
        .args(SERVER_ARGS)
        .output()
        .expect("run match command");

    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["matched"], true);
}

#[test]
fn match_command_miss_exits_nonzero() {
    let output = argvee_cmd()
        .args([
            "--output", "json", "match", "--field", "commands", "-k", "build", "--",
        ])
        .args(SERVER_ARGS)
        .output()
        .expect("run match command");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_json(&output)["matched"], false);
}
