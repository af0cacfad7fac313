/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary and verify command-line behavior
mod common;

use assert_cmd::Command;
use common::{ChatFileBuilder, RecordBuilder, read, twelve_chats_with_three_empty};
use predicates::prelude::*;

fn chat_scribe() -> Command {
    Command::new(env!("CARGO_BIN_EXE_chat-scribe"))
}

#[test]
fn test_cli_help_flag() {
    chat_scribe()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("convert them to Markdown"))
        .stdout(predicate::str::contains("--remove-empty"))
        .stdout(predicate::str::contains("--output"));
}

#[test]
fn test_cli_version_flag() {
    chat_scribe().arg("--version").assert().success().stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_cli_missing_input_argument() {
    chat_scribe().assert().failure().stderr(predicate::str::contains("<INPUT>"));
}

#[test]
fn test_cli_unknown_option() {
    chat_scribe().args(["--bogus", "chats.json"]).assert().failure();
}

#[test]
fn test_cli_nonexistent_input_file() {
    let dir = tempfile::TempDir::new().unwrap();
    chat_scribe()
        .arg(dir.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open chat file"));
}

#[test]
fn test_cli_invalid_json() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "[{\"id\": ").unwrap();

    chat_scribe()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON in chat file"));
    assert!(!dir.path().join("broken.md").exists());
}

#[test]
fn test_cli_non_array_json() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("object.json");
    std::fs::write(&path, r#"{"chats": []}"#).unwrap();

    chat_scribe()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expected a JSON array of chats"));
}

#[test]
fn test_cli_remove_empty_creates_backup() {
    let (dir, path) = twelve_chats_with_three_empty();
    let original = read(&path);

    chat_scribe()
        .args(["-r"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 12 chats successfully."))
        .stdout(predicate::str::contains("Removed 3 empty chats from the data."))
        .stdout(predicate::str::contains("Modified JSON saved with 9 chats."));

    assert_eq!(read(&dir.path().join("chats.json.backup")), original);
    let rewritten: serde_json::Value = serde_json::from_str(&read(&path)).unwrap();
    assert_eq!(rewritten.as_array().unwrap().len(), 9);
    assert!(!dir.path().join("chats.md").exists());
}

#[test]
fn test_cli_remove_empty_nothing_to_do() {
    let (dir, path) = ChatFileBuilder::new()
        .with_chat(RecordBuilder::new("2024-01-01T00:00:00Z").human_only("hi"))
        .build();

    chat_scribe()
        .arg("--remove-empty")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No empty chats found to remove."));
    assert!(!dir.path().join("chats.json.backup").exists());
}

#[test]
fn test_cli_interactive_export() {
    let (dir, path) = twelve_chats_with_three_empty();

    // chats 2 and 5, default filename, timestamps yes, model info yes, keep thinking
    chat_scribe()
        .arg(&path)
        .write_stdin("2,5\n\n\n\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hidden 3 empty chats."))
        .stdout(predicate::str::contains("Selected 2 chats for export."))
        .stdout(predicate::str::contains("Conversion complete! Markdown file saved to:"));

    let doc = read(&dir.path().join("chats.md"));
    assert!(doc.starts_with("# Cody Chat Exports\n\n"));
    assert!(doc.contains("Question number 2"));
    assert!(doc.contains("Question number 5"));
    assert!(doc.contains("### Assistant: (claude-3-sonnet)"));
    assert_eq!(doc.matches("## Chat ").count(), 2);
}

#[test]
fn test_cli_output_flag_and_non_interactive_options() {
    let (dir, path) = twelve_chats_with_three_empty();
    let output = dir.path().join("custom.md");

    chat_scribe()
        .arg("-o")
        .arg(&output)
        .args(["--thinking", "remove", "--no-timestamps", "--no-model-info"])
        .arg(&path)
        .write_stdin("all\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected 12 chats for export."))
        .stdout(predicate::str::contains("Include timestamps?").not());

    let doc = read(&output);
    assert_eq!(doc.matches("## Chat ").count(), 12);
    assert!(doc.contains("## Chat 1\n\n"));
    assert!(!doc.contains("claude-3-sonnet"));
}

#[test]
fn test_cli_quit_without_selection() {
    let (dir, path) = twelve_chats_with_three_empty();

    chat_scribe()
        .arg(&path)
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No chats selected. Exiting."));
    assert!(!dir.path().join("chats.md").exists());
}

#[test]
fn test_cli_closed_stdin_exits_cleanly() {
    let (_dir, path) = twelve_chats_with_three_empty();

    chat_scribe()
        .arg(&path)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("No chats selected. Exiting."));
}

#[test]
fn test_cli_debug_logging_goes_to_stderr() {
    let (_dir, path) = twelve_chats_with_three_empty();

    chat_scribe()
        .env("CHAT_SCRIBE_LOG", "debug")
        .arg(&path)
        .write_stdin("q\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("read chat file"))
        .stdout(predicate::str::contains("read chat file").not());
}
