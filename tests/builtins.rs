// tests/builtins.rs
//
// Exercises the builtins against the real process working directory.
// Everything lives in one test because `cd` mutates process-wide state.
mod common;
use crate::common::{Scratch, init_tracing};

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use shexec::command::Command;
use shexec::exec::Shell;
use shexec::types::{EXIT_FAILURE, EXIT_SUCCESS, Outcome};
use shexec::workdir::{MemoryWorkingDir, ProcessWorkingDir, WorkingDir};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn cd_changes_the_directory_children_start_in() -> TestResult {
    init_tracing();
    let scratch = Scratch::new();
    let root = fs::canonicalize(scratch.path(""))?;
    fs::create_dir(root.join("project"))?;

    let mut shell = Shell::new();

    // Absolute.
    let outcome = shell.execute(&Command::new(["cd", root.to_str().ok_or("non-utf8 tmp")?]))?;
    assert_eq!(outcome, Outcome::Continue(EXIT_SUCCESS));
    assert_eq!(ProcessWorkingDir.current()?, root);

    // Relative, resolved against the current directory.
    let outcome = shell.execute(&Command::new(["cd", "project"]))?;
    assert_eq!(outcome, Outcome::Continue(EXIT_SUCCESS));
    assert_eq!(ProcessWorkingDir.current()?, root.join("project"));

    // Children inherit the new directory.
    let pwd = root.join("pwd.txt");
    shell.execute(&Command::new(["pwd"]).stdout_to(&pwd))?;
    assert_eq!(PathBuf::from(fs::read_to_string(&pwd)?.trim_end()), root.join("project"));

    // Missing argument and missing directory: failure status, shell intact.
    let outcome = shell.execute(&Command::new(["cd"]))?;
    assert_eq!(outcome, Outcome::Continue(EXIT_FAILURE));
    let outcome = shell.execute(&Command::new(["cd", "no-such-dir"]))?;
    assert_eq!(outcome, Outcome::Continue(EXIT_FAILURE));
    assert_eq!(ProcessWorkingDir.current()?, root.join("project"));

    // Leave the temp dir before it is removed.
    shell.execute(&Command::new(["cd", "/"]))?;
    Ok(())
}

#[test]
fn exit_is_reported_not_performed() -> TestResult {
    init_tracing();
    let mut shell = Shell::with_working_dir(MemoryWorkingDir::new("/"));

    assert_eq!(shell.execute(&Command::new(["exit", "7"]))?, Outcome::Exit(7));
    assert_eq!(shell.execute(&Command::new(["exit"]))?, Outcome::Exit(0));
    assert_eq!(shell.execute(&Command::new(["exit", "abc"]))?, Outcome::Exit(0));

    Ok(())
}

#[test]
fn memory_backed_shell_tracks_cd_without_touching_the_process() -> TestResult {
    init_tracing();
    let mut shell = Shell::with_working_dir(
        MemoryWorkingDir::new("/home/user").with_dir("/home/user/project"),
    );

    shell.execute(&Command::new(["cd", "project"]))?;
    assert_eq!(shell.working_dir().current()?, PathBuf::from("/home/user/project"));

    shell.execute(&Command::new(["cd", "/tmp"]))?;
    assert_eq!(shell.working_dir().current()?, PathBuf::from("/home/user/project"));

    Ok(())
}
