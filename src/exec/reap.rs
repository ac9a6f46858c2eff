// src/exec/reap.rs

//! Waiting for children.
//!
//! We only ever wait on pids we forked ourselves, so an embedding program's
//! other children are never reaped by accident. Each pid is reaped exactly
//! once: the loop for a pid ends on its first termination event.

use nix::errno::Errno;
use nix::sys::wait::{WaitPidFlag, WaitStatus, waitpid};
use nix::unistd::Pid;
use tracing::{debug, trace};

use crate::errors::{Result, ShellError};
use crate::types::Termination;

/// A child that has been waited for and is gone from the process table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reaped {
    pub pid: Pid,
    pub termination: Termination,
}

/// Block until every pid in `pids` has terminated.
///
/// Stop and continue notifications are logged but do not end the wait.
/// A child killed by a signal counts as terminated (with failure).
pub fn wait_for(pids: &[Pid]) -> Result<Vec<Reaped>> {
    let mut reaped = Vec::with_capacity(pids.len());
    for &pid in pids {
        reaped.push(wait_one(pid)?);
    }
    debug!(completed = reaped.len(), "children reaped");
    Ok(reaped)
}

/// Block until `pid` terminates.
pub fn wait_one(pid: Pid) -> Result<Reaped> {
    let flags = WaitPidFlag::WUNTRACED | WaitPidFlag::WCONTINUED;

    loop {
        match waitpid(pid, Some(flags)) {
            Ok(WaitStatus::Exited(pid, code)) => {
                debug!(%pid, code, "child exited");
                return Ok(Reaped {
                    pid,
                    termination: Termination::Exited(code),
                });
            }
            Ok(WaitStatus::Signaled(pid, signal, core_dumped)) => {
                debug!(%pid, ?signal, core_dumped, "child killed by signal");
                return Ok(Reaped {
                    pid,
                    termination: Termination::Signaled(signal),
                });
            }
            Ok(WaitStatus::Stopped(pid, signal)) => {
                debug!(%pid, ?signal, "child stopped; still waiting");
            }
            Ok(WaitStatus::Continued(pid)) => {
                debug!(%pid, "child continued");
            }
            Ok(other) => {
                trace!(?other, "ignoring wait status");
            }
            Err(Errno::EINTR) => {}
            Err(errno) => return Err(ShellError::sys("waitpid")(errno)),
        }
    }
}
