// src/workdir/mod.rs

use std::fmt::Debug;
use std::path::{Path, PathBuf};

use nix::unistd;

use crate::errors::{Result, ShellError};

pub mod mock;

pub use mock::MemoryWorkingDir;

/// The shell's notion of "where am I".
///
/// The dispatcher never touches the process cwd directly; it goes through
/// this trait so tests can run many shells side by side without fighting
/// over the real working directory.
pub trait WorkingDir: Debug {
    fn current(&self) -> Result<PathBuf>;
    fn change_to(&mut self, path: &Path) -> Result<()>;
}

/// Implementation backed by the process working directory (`getcwd`/`chdir`).
///
/// Changes are inherited by every child forked afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessWorkingDir;

impl WorkingDir for ProcessWorkingDir {
    fn current(&self) -> Result<PathBuf> {
        unistd::getcwd().map_err(ShellError::sys("getcwd"))
    }

    fn change_to(&mut self, path: &Path) -> Result<()> {
        unistd::chdir(path).map_err(ShellError::sys("chdir"))
    }
}
