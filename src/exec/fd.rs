// src/exec/fd.rs

//! Small descriptor helpers shared by the launcher and the pipeline
//! coordinator. Every close is checked; a failed close is reported like any
//! other setup failure.

use std::os::fd::{AsRawFd, IntoRawFd, OwnedFd, RawFd};

use nix::errno::Errno;
use nix::fcntl::{FcntlArg, FdFlag, fcntl};
use nix::unistd::{close, dup2};

use crate::errors::{Result, ShellError};

/// Close an owned descriptor, surfacing the error instead of swallowing it
/// the way `Drop` would.
pub fn close_owned(fd: OwnedFd) -> Result<()> {
    close(fd.into_raw_fd()).map_err(ShellError::sys("close"))
}

/// Close one of the standard slots. A slot that is already closed is fine.
pub fn close_slot(slot: RawFd) -> Result<()> {
    match close(slot) {
        Ok(()) | Err(Errno::EBADF) => Ok(()),
        Err(errno) => Err(ShellError::sys("close")(errno)),
    }
}

/// Make `fd` survive `exec` (undo `O_CLOEXEC`).
pub fn clear_cloexec(fd: RawFd) -> Result<()> {
    fcntl(fd, FcntlArg::F_SETFD(FdFlag::empty()))
        .map(drop)
        .map_err(ShellError::sys("fcntl"))
}

/// Move `fd` onto `slot`: duplicate, then close the original.
///
/// If `fd` already *is* the slot (possible when the slot was closed before
/// the descriptor was created) it is kept and only its close-on-exec flag is
/// cleared.
pub fn move_to_slot(fd: RawFd, slot: RawFd) -> Result<()> {
    if fd == slot {
        return clear_cloexec(slot);
    }
    if let Err(errno) = dup2(fd, slot) {
        let _ = close(fd);
        return Err(ShellError::sys("dup2")(errno));
    }
    close(fd).map_err(ShellError::sys("close"))
}

/// Wire one end of a pipe onto a standard slot in a pipeline child.
///
/// `discard` (the end this process must not hold) is closed first, then the
/// inherited slot, then `keep` is moved onto the slot.
pub fn attach_pipe_end(keep: OwnedFd, discard: OwnedFd, slot: RawFd) -> Result<()> {
    close_owned(discard)?;
    if keep.as_raw_fd() != slot {
        close_slot(slot)?;
    }
    move_to_slot(keep.into_raw_fd(), slot)
}
