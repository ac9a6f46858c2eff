// tests/cli.rs
//
// Drives the `shexec` binary, which is the one place where `exit` really
// terminates the process.
mod common;
use crate::common::{Scratch, init_tracing};

use std::error::Error;
use std::process::{Command as Process, Output};

type TestResult = Result<(), Box<dyn Error>>;

fn shexec(args: &[&str]) -> std::io::Result<Output> {
    Process::new(env!("CARGO_BIN_EXE_shexec")).args(args).output()
}

#[test]
fn exit_builtin_sets_the_process_status() -> TestResult {
    init_tracing();

    assert_eq!(shexec(&["--", "exit", "7"])?.status.code(), Some(7));
    assert_eq!(shexec(&["--", "exit"])?.status.code(), Some(0));
    assert_eq!(shexec(&["--", "exit", "abc"])?.status.code(), Some(0));

    Ok(())
}

#[test]
fn command_with_redirect_flags() -> TestResult {
    init_tracing();
    let scratch = Scratch::new();
    scratch.write("in.txt", "abc");
    let input = scratch.path("in.txt");
    let output = scratch.path("out.txt");

    let out = shexec(&[
        "--stdin",
        input.to_str().ok_or("non-utf8 path")?,
        "--stdout",
        output.to_str().ok_or("non-utf8 path")?,
        "--",
        "wc",
        "-c",
    ])?;
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(scratch.read("out.txt").trim(), "3");

    Ok(())
}

#[test]
fn child_status_becomes_process_status() -> TestResult {
    init_tracing();

    assert_eq!(shexec(&["sh", "-c", "exit 4"])?.status.code(), Some(4));

    Ok(())
}

#[test]
fn unknown_program_diagnostic_goes_to_stderr() -> TestResult {
    init_tracing();

    let out = shexec(&["shexec-nope-nope"])?;
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&out.stderr),
        "shexec-nope-nope: No such file or directory\n"
    );

    Ok(())
}

#[test]
fn pipeline_file_runs_all_stages() -> TestResult {
    init_tracing();
    let scratch = Scratch::new();
    let out_path = scratch.path("out.txt");
    let toml = format!(
        "[[stage]]\nargv = [\"echo\", \"hello\"]\n\n[[stage]]\nargv = [\"wc\", \"-c\"]\nstdout = {:?}\n",
        out_path.to_str().ok_or("non-utf8 path")?
    );
    let file = scratch.write("pipe.toml", toml);

    let out = shexec(&["--file", file.to_str().ok_or("non-utf8 path")?])?;
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(scratch.read("out.txt").trim(), "6");

    Ok(())
}

#[test]
fn dry_run_prints_without_executing() -> TestResult {
    init_tracing();
    let scratch = Scratch::new();
    let target = scratch.path("never.txt");

    let out = shexec(&[
        "--dry-run",
        "--stdout",
        target.to_str().ok_or("non-utf8 path")?,
        "--",
        "echo",
        "hi",
    ])?;
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout)?;
    assert!(stdout.contains("shexec dry-run"));
    assert!(stdout.contains("0: echo hi"));
    assert!(!scratch.exists("never.txt"));

    Ok(())
}

#[test]
fn nothing_to_run_is_an_error() -> TestResult {
    init_tracing();

    let out = shexec(&[])?;
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("nothing to execute"));

    Ok(())
}
