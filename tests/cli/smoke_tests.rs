use std::io;
use std::path::Path;
use std::process;

use assert_cmd::Command;
use assert_cmd::assert::OutputAssertExt;
use mcp_shared_memory::{CLI_NAME, PACKAGE_NAME, VERSION};
use predicates::prelude::*;
use serde_json::{Value, json};

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mcp-shared-memory"))
}

#[test]
fn binary_is_named_after_cli_name() {
    let path = Path::new(env!("CARGO_BIN_EXE_mcp-shared-memory"));
    assert_eq!(path.file_stem().and_then(|s| s.to_str()), Some(CLI_NAME));
}

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(CLI_NAME));
}

#[test]
fn shows_version() {
    bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{CLI_NAME} {VERSION}\n")));
}

#[test]
fn prints_identity_json() {
    let output = bin().assert().success().get_output().stdout.clone();
    let value: Value = serde_json::from_slice(&output).expect("stdout is JSON");
    assert_eq!(
        value,
        json!({ "version": VERSION, "packageName": PACKAGE_NAME, "cliName": CLI_NAME })
    );
}

#[test]
fn logs_stay_off_stdout() {
    bin()
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{").and(predicate::str::ends_with("}\n")))
        .stderr(predicate::str::contains("starting mcp-shared-memory 0.1.0"));
}

#[test]
fn rejects_unknown_arguments() {
    bin()
        .arg("--listen")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--listen"));
}

#[test]
fn broken_pipe_exits_with_failure() {
    let (reader, writer) = io::pipe().expect("create pipe");
    drop(reader);

    process::Command::new(env!("CARGO_BIN_EXE_mcp-shared-memory"))
        .stdout(writer)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Application Error: printing identity"))
        .stderr(predicate::str::contains("Failed to write identity"));
}

/// A closed stdout descriptor swallows the output without an error, so the run succeeds.
#[cfg(unix)]
#[test]
fn closed_stdout_descriptor_exits_cleanly() {
    use std::fs::File;
    use std::os::fd::FromRawFd;
    use std::os::unix::process::CommandExt;

    let mut cmd = process::Command::new(env!("CARGO_BIN_EXE_mcp-shared-memory"));
    // SAFETY: runs in the forked child after stdio setup; closing fd 1 only touches the child.
    unsafe {
        cmd.pre_exec(|| {
            drop(File::from_raw_fd(1));
            Ok(())
        });
    }

    cmd.assert().success().stderr(predicate::str::is_empty());
}
