// src/exec/launcher.rs

//! Process launcher: set up redirections and replace the process image.
//!
//! A [`LaunchPlan`] is built in the parent *before* forking, so every
//! fallible conversion (C strings, empty argv) happens where errors can
//! still be returned normally. [`LaunchPlan::launch`] is then the only thing
//! the child runs; it never returns.

use std::ffi::CString;
use std::os::fd::RawFd;
use std::path::PathBuf;

use nix::fcntl::{OFlag, open};
use nix::libc::{STDERR_FILENO, STDIN_FILENO, STDOUT_FILENO};
use nix::sys::signal::{SigHandler, Signal, signal};
use nix::sys::stat::Mode;
use nix::unistd::execvp;

use super::fd::move_to_slot;
use super::die;
use crate::command::Command;
use crate::errors::{Result, ShellError};

/// Which standard stream a redirection replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdStream {
    Input,
    Output,
    Error,
}

impl StdStream {
    pub fn slot(self) -> RawFd {
        match self {
            StdStream::Input => STDIN_FILENO,
            StdStream::Output => STDOUT_FILENO,
            StdStream::Error => STDERR_FILENO,
        }
    }

    /// `<` opens read-only; `>` and `2>` create or truncate.
    fn open_flags(self) -> OFlag {
        match self {
            StdStream::Input => OFlag::O_RDONLY | OFlag::O_CLOEXEC,
            StdStream::Output | StdStream::Error => {
                OFlag::O_WRONLY | OFlag::O_CREAT | OFlag::O_TRUNC | OFlag::O_CLOEXEC
            }
        }
    }
}

/// rw-r--r--
fn file_mode() -> Mode {
    Mode::S_IRUSR | Mode::S_IWUSR | Mode::S_IRGRP | Mode::S_IROTH
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub stream: StdStream,
    pub path: PathBuf,
}

impl Redirect {
    /// Open the file and put it on the stream's slot.
    pub fn apply(&self) -> Result<()> {
        let fd = open(self.path.as_path(), self.stream.open_flags(), file_mode())
            .map_err(ShellError::sys("open"))?;
        move_to_slot(fd, self.stream.slot())
    }
}

/// Everything the child needs to become the target program.
#[derive(Debug, Clone)]
pub struct LaunchPlan {
    argv: Vec<CString>,
    redirects: Vec<Redirect>,
}

impl LaunchPlan {
    /// Prepare a single stage. `pipe_to` is ignored; the coordinator deals
    /// with it.
    pub fn prepare(cmd: &Command) -> Result<Self> {
        if cmd.program().is_empty() {
            return Err(ShellError::InvalidCommand(
                "command has no program name".to_string(),
            ));
        }

        let argv = cmd
            .argv
            .iter()
            .map(|arg| {
                CString::new(arg.as_str()).map_err(|_| {
                    ShellError::InvalidCommand(format!("argument contains a NUL byte: {arg:?}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let redirects = [
            (StdStream::Input, &cmd.in_filename),
            (StdStream::Output, &cmd.out_filename),
            (StdStream::Error, &cmd.err_filename),
        ]
        .into_iter()
        .filter_map(|(stream, path)| {
            path.as_ref().map(|path| Redirect {
                stream,
                path: path.clone(),
            })
        })
        .collect();

        Ok(Self { argv, redirects })
    }

    pub fn program(&self) -> &CString {
        &self.argv[0]
    }

    pub fn redirects(&self) -> &[Redirect] {
        &self.redirects
    }

    /// Apply redirections in order: stdin, stdout, stderr.
    pub fn apply_redirects(&self) -> Result<()> {
        self.redirects.iter().try_for_each(Redirect::apply)
    }

    /// Become the program. Child processes only.
    ///
    /// Any failure is reported on stderr and ends the process with
    /// `EXIT_FAILURE`.
    pub fn launch(self) -> ! {
        if let Err(err) = restore_sigpipe() {
            die(&err);
        }
        if let Err(err) = self.apply_redirects() {
            die(&err);
        }

        let errno = match execvp(self.program(), &self.argv) {
            Ok(never) => match never {},
            Err(errno) => errno,
        };
        die(&ShellError::Exec {
            program: self.program().to_string_lossy().into_owned(),
            source: errno,
        })
    }
}

/// The Rust runtime ignores SIGPIPE and an ignored disposition survives
/// `exec`; programs downstream of a closed pipe expect to be killed by it.
fn restore_sigpipe() -> Result<()> {
    // SAFETY: installs the default disposition, no handler code involved.
    unsafe { signal(Signal::SIGPIPE, SigHandler::SigDfl) }
        .map(drop)
        .map_err(ShellError::sys("signal"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepare_orders_redirects_by_stream() {
        let cmd = Command::new(["sort", "-r"])
            .stderr_to("err.log")
            .stdout_to("out.txt")
            .stdin_from("in.txt");

        let plan = LaunchPlan::prepare(&cmd).unwrap();
        let streams: Vec<StdStream> = plan.redirects().iter().map(|r| r.stream).collect();
        assert_eq!(
            streams,
            vec![StdStream::Input, StdStream::Output, StdStream::Error]
        );
        assert_eq!(plan.program().to_str().unwrap(), "sort");
    }

    #[test]
    fn prepare_without_redirects() {
        let plan = LaunchPlan::prepare(&Command::new(["true"])).unwrap();
        assert!(plan.redirects().is_empty());
    }

    #[test]
    fn empty_argv_is_rejected_before_fork() {
        let err = LaunchPlan::prepare(&Command::new(Vec::<String>::new())).unwrap_err();
        assert!(matches!(err, ShellError::InvalidCommand(_)));
    }

    #[test]
    fn nul_byte_is_rejected_before_fork() {
        let err = LaunchPlan::prepare(&Command::new(["echo", "a\0b"])).unwrap_err();
        assert!(matches!(err, ShellError::InvalidCommand(msg) if msg.contains("NUL")));
    }

    #[test]
    fn output_flags_create_and_truncate() {
        let flags = StdStream::Output.open_flags();
        assert!(flags.contains(OFlag::O_CREAT | OFlag::O_TRUNC | OFlag::O_WRONLY));
        assert!(!StdStream::Input.open_flags().contains(OFlag::O_CREAT));
        assert_eq!(file_mode().bits() & 0o777, 0o644);
    }
}
