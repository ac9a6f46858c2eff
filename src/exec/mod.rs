// src/exec/mod.rs

//! Command execution.
//!
//! - [`launcher`] turns a stage into a running program inside a child
//!   (redirections + `execvp`).
//! - [`pipeline`] connects a stage to the rest of its chain with a pipe and
//!   two children.
//! - [`reap`] waits for children and classifies how they ended.
//! - [`fd`] holds the descriptor juggling both of them share.
//!
//! [`Shell`] is the entry point: builtins run in-process, a plain command is
//! forked and waited for, and a piped command goes to the coordinator.

pub mod fd;
pub mod launcher;
pub mod pipeline;
pub mod reap;

use std::io::Write;

use nix::unistd::{ForkResult, fork};
use tracing::{debug, info};

use crate::builtin::Builtin;
use crate::command::Command;
use crate::errors::{Result, ShellError};
use crate::types::{EXIT_FAILURE, ExitCode, Outcome};
use crate::workdir::{ProcessWorkingDir, WorkingDir};

pub use launcher::{LaunchPlan, Redirect, StdStream};
pub use reap::Reaped;

/// Executes commands on behalf of one shell instance.
///
/// The working directory is explicit state owned by the shell, so several
/// shells (e.g. in tests) don't share it implicitly.
#[derive(Debug, Default)]
pub struct Shell<W: WorkingDir = ProcessWorkingDir> {
    cwd: W,
}

impl Shell<ProcessWorkingDir> {
    pub fn new() -> Self {
        Self::with_working_dir(ProcessWorkingDir)
    }
}

impl<W: WorkingDir> Shell<W> {
    pub fn with_working_dir(cwd: W) -> Self {
        Self { cwd }
    }

    pub fn working_dir(&self) -> &W {
        &self.cwd
    }

    /// Execute one command line (possibly a pipeline).
    ///
    /// `Ok(Outcome::Exit(_))` means the `exit` builtin ran; the caller decides
    /// when to actually terminate.
    pub fn execute(&mut self, cmd: &Command) -> Result<Outcome> {
        if cmd.argv.is_empty() {
            return Err(ShellError::InvalidCommand("empty argv".to_string()));
        }

        if let Some(builtin) = Builtin::lookup(cmd.program()) {
            return Ok(builtin.run(cmd.args(), &mut self.cwd));
        }

        let code = match cmd.pipe_to {
            None => self.run_simple(cmd)?,
            Some(_) => pipeline::run_pipeline(self, cmd)?,
        };
        Ok(Outcome::Continue(code))
    }

    /// Fork once, launch in the child, wait in the parent.
    fn run_simple(&mut self, cmd: &Command) -> Result<ExitCode> {
        let plan = LaunchPlan::prepare(cmd)?;

        // SAFETY: the child only applies redirections and execs or exits.
        let child = match unsafe { fork() }.map_err(ShellError::sys("fork"))? {
            ForkResult::Child => plan.launch(),
            ForkResult::Parent { child } => child,
        };
        info!(pid = %child, program = %cmd.program(), "command started");

        let reaped = reap::wait_one(child)?;
        debug!(pid = %child, termination = ?reaped.termination, "command finished");
        Ok(reaped.termination.code())
    }
}

/// Print a diagnostic for a failure inside a child.
///
/// Writes straight to the stderr descriptor so nothing is buffered or
/// captured in the child's copy of the parent's memory.
pub(crate) fn report(err: &ShellError) {
    let _ = writeln!(std::io::stderr(), "{err}");
}

/// Leave a forked child without running the parent's exit handlers or
/// flushing its inherited buffers.
pub(crate) fn exit_child(code: ExitCode) -> ! {
    // SAFETY: `_exit` is async-signal-safe and never returns.
    unsafe { nix::libc::_exit(code) }
}

/// Report `err` and terminate the child with `EXIT_FAILURE`.
pub(crate) fn die(err: &ShellError) -> ! {
    report(err);
    exit_child(EXIT_FAILURE)
}
