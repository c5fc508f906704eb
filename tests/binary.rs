use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_binary(input: Option<&str>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_usersapp"));
    cmd.env("NO_COLOR", "1")
        .env("USERSAPP_TIMING", "0")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    match input {
        Some(_) => cmd.stdin(Stdio::piped()),
        None => cmd.stdin(Stdio::null()),
    };
    let mut child = cmd.spawn().unwrap();
    if let Some(text) = input {
        let mut stdin = child.stdin.take().unwrap();
        stdin.write_all(text.as_bytes()).unwrap();
    }
    child.wait_with_output().unwrap()
}

#[test]
fn piped_actions_are_processed() {
    let output = run_binary(Some("add\nJan\n20\nlist\nquit\n"));
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✔ User created."));
    assert!(stdout.contains("Jan"));
    assert!(stdout.ends_with("ℹ Goodbye.\n"));
}

#[test]
fn closed_stdin_ends_session() {
    let output = run_binary(None);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Welcome to the UsersApp!"));
    assert_eq!(stdout.matches("How can I help you?").count(), 1);
}

#[test]
fn input_ending_mid_add_exits_cleanly() {
    let output = run_binary(Some("add\nJan\n"));
    assert!(output.status.success());
    assert!(!String::from_utf8_lossy(&output.stdout).contains("User created."));
}
