// src/exec/pipeline.rs

//! Pipeline coordinator.
//!
//! One invocation handles one `|`: a pipe, a producer child running the
//! current stage, and a consumer child that re-enters the dispatcher for the
//! rest of the chain. Longer pipelines therefore become a chain of
//! coordinators, each owning exactly one pipe and two children.
//!
//! Descriptor ownership after the forks:
//! - producer: write end on stdout, read end closed
//! - consumer: read end on stdin, write end closed
//! - coordinator: both ends closed before waiting

use nix::fcntl::OFlag;
use nix::libc::{STDIN_FILENO, STDOUT_FILENO};
use nix::unistd::{ForkResult, fork, pipe2};
use std::os::fd::OwnedFd;
use tracing::{debug, info, warn};

use super::fd::{attach_pipe_end, close_owned};
use super::launcher::LaunchPlan;
use super::reap;
use super::{Shell, die, exit_child, report};
use crate::command::Command;
use crate::errors::{Result, ShellError};
use crate::types::{EXIT_FAILURE, EXIT_SUCCESS, ExitCode};
use crate::workdir::WorkingDir;

/// Run `cmd | rest-of-chain` and wait for both sides.
///
/// Returns `EXIT_SUCCESS` when both children exited normally with status 0,
/// `EXIT_FAILURE` otherwise. Fork and pipe failures are returned as errors.
pub fn run_pipeline<W: WorkingDir>(shell: &mut Shell<W>, cmd: &Command) -> Result<ExitCode> {
    let next = cmd.pipe_to.as_deref().ok_or_else(|| {
        ShellError::InvalidCommand("pipeline stage without a successor".to_string())
    })?;
    let plan = LaunchPlan::prepare(cmd)?;

    let (read_end, write_end) = pipe2(OFlag::O_CLOEXEC).map_err(ShellError::sys("pipe"))?;
    debug!(producer = %cmd.program(), consumer = %next.program(), "pipe created");

    // SAFETY: the child only rewires descriptors and then execs or exits.
    let producer = match unsafe { fork() } {
        Ok(ForkResult::Child) => producer_child(plan, read_end, write_end),
        Ok(ForkResult::Parent { child }) => child,
        Err(errno) => return Err(ShellError::sys("fork")(errno)),
    };

    // SAFETY: the child rewires stdin and re-enters the dispatcher, which
    // only forks, execs and waits.
    let consumer = match unsafe { fork() } {
        Ok(ForkResult::Child) => consumer_child(shell, next, read_end, write_end),
        Ok(ForkResult::Parent { child }) => child,
        Err(errno) => {
            // Closing our ends lets the producer see a broken pipe and finish.
            drop(read_end);
            drop(write_end);
            reap::wait_one(producer)?;
            return Err(ShellError::sys("fork")(errno));
        }
    };
    info!(%producer, %consumer, "pipeline stages started");

    let closed_read = close_owned(read_end);
    let closed_write = close_owned(write_end);

    let reaped = reap::wait_for(&[producer, consumer])?;
    closed_read?;
    closed_write?;

    let failed: Vec<_> = reaped
        .iter()
        .filter(|r| !r.termination.success())
        .collect();
    if failed.is_empty() {
        Ok(EXIT_SUCCESS)
    } else {
        warn!(?failed, "pipeline stage did not succeed");
        Ok(EXIT_FAILURE)
    }
}

/// Producer side: stdout becomes the write end, then launch this stage.
fn producer_child(plan: LaunchPlan, read_end: OwnedFd, write_end: OwnedFd) -> ! {
    if let Err(err) = attach_pipe_end(write_end, read_end, STDOUT_FILENO) {
        die(&err);
    }
    plan.launch()
}

/// Consumer side: stdin becomes the read end, then dispatch the rest.
fn consumer_child<W: WorkingDir>(
    shell: &mut Shell<W>,
    next: &Command,
    read_end: OwnedFd,
    write_end: OwnedFd,
) -> ! {
    if let Err(err) = attach_pipe_end(read_end, write_end, STDIN_FILENO) {
        die(&err);
    }

    let code = match shell.execute(next) {
        Ok(outcome) => outcome.code(),
        Err(err) => {
            report(&err);
            EXIT_FAILURE
        }
    };
    exit_child(code)
}
