// Toolbox - tests/e2e_assistant.rs
//
// End-to-end tests for the contact assistant: a scripted session through
// the library REPL, and the compiled `assistant` binary fed over a pipe.

use std::io::{Cursor, Write};
use std::process::{Command, Stdio};
use toolbox::app::repl::{Repl, ReplOptions, ReplState};

fn scripted(script: &str) -> (Repl, Vec<String>) {
    let mut repl = Repl::new(ReplOptions {
        prompt: String::new(),
        greeting: false,
    });
    let mut out = Vec::new();
    repl.run(&mut Cursor::new(script.as_bytes().to_vec()), &mut out);
    let lines = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    (repl, lines)
}

#[test]
fn e2e_full_session() {
    let (repl, lines) = scripted(
        "\
hello
all
add Alice 123
add Bob +3800000
phone Alice
phone Bob
change Alice 999
change Carol 1
add Dave abc
all
exit
",
    );

    assert_eq!(
        lines,
        vec![
            "How can I help you?",
            "No contacts available.",
            "Contact Alice added.",
            "Contact Bob added.",
            "Alice: 123",
            "Bob: +3800000",
            "Contact Alice updated.",
            "Contact not found.",
            "Invalid phone number. Use only digits, optionally starting with +.",
            "1. Alice: 999",
            "2. Bob: +3800000",
            "Good bye!",
        ]
    );
    assert_eq!(repl.state(), ReplState::Terminated);
    assert_eq!(repl.store().len(), 2);
}

#[test]
fn e2e_wrong_arity_messages() {
    let (_, lines) = scripted("add Alice\nchange Alice 1 2\nphone a b\nclose\n");
    assert_eq!(
        lines,
        vec![
            "Give me name and phone please.",
            "Give me name and phone please.",
            "Enter correct user name.",
            "Good bye!",
        ]
    );
}

#[test]
fn e2e_unknown_command_lists_help_and_continues() {
    let (repl, lines) = scripted("fly away\nhello\n");
    assert_eq!(lines[0], "Invalid command. Available commands:");
    assert!(lines.iter().any(|l| l.contains("add <name> <phone>")));
    assert!(lines.iter().any(|l| l == "How can I help you?"));
    // End of input ends the session like `exit`.
    assert_eq!(lines.last().map(String::as_str), Some("Good bye!"));
    assert_eq!(repl.state(), ReplState::Terminated);
}

#[test]
fn e2e_binary_session_over_pipe() {
    let dir = tempfile::tempdir().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_assistant"))
        .arg("--config")
        .arg(dir.path().join("config.toml"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn assistant");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"add Bob +3800000\nphone Bob\nexit\n")
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Welcome to the assistant bot!\n"));
    assert!(stdout.contains("Enter a command: Contact Bob added."));
    assert!(stdout.contains("Bob: +3800000"));
    assert!(stdout.trim_end().ends_with("Good bye!"));
}

#[test]
fn e2e_binary_eof_exits_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_assistant"))
        .arg("--config")
        .arg(dir.path().join("config.toml"))
        .stdin(Stdio::null())
        .output()
        .expect("failed to run assistant");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Good bye!"));
}
