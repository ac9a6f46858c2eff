// src/types.rs

//! Status vocabulary shared by the dispatcher, the launcher and the
//! pipeline coordinator.

use nix::sys::signal::Signal;

/// Process exit status as seen by the shell.
pub type ExitCode = i32;

pub const EXIT_SUCCESS: ExitCode = 0;
pub const EXIT_FAILURE: ExitCode = 1;

/// Result of dispatching one command line.
///
/// - `Continue`: the command ran (or failed) and the shell keeps going with
///   the given status.
/// - `Exit`: the `exit` builtin asked for the whole shell to terminate with
///   the given status. Only the outermost caller acts on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue(ExitCode),
    Exit(ExitCode),
}

impl Outcome {
    /// Status carried by either variant.
    pub fn code(self) -> ExitCode {
        match self {
            Outcome::Continue(code) | Outcome::Exit(code) => code,
        }
    }
}

/// How a reaped child went away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Normal exit with the given status.
    Exited(i32),
    /// Killed by a signal.
    Signaled(Signal),
}

impl Termination {
    /// Shell-style status: the exit code, or `128 + signo` for signals.
    pub fn code(self) -> ExitCode {
        match self {
            Termination::Exited(code) => code,
            Termination::Signaled(sig) => 128 + sig as i32,
        }
    }

    pub fn success(self) -> bool {
        matches!(self, Termination::Exited(0))
    }
}
