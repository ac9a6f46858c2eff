#![allow(dead_code)]

pub use shexec_test_utils::init_tracing;
pub use shexec_test_utils::scratch::Scratch;

use shexec::command::Command;
use shexec::exec::Shell;
use shexec::types::Outcome;

/// Execute `cmd` with a fresh process-backed shell.
pub fn execute(cmd: &Command) -> Outcome {
    Shell::new().execute(cmd).expect("command should dispatch")
}
