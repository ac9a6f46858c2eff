// src/workdir/mock.rs

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use nix::errno::Errno;

use super::WorkingDir;
use crate::errors::{Result, ShellError};

/// In-memory working directory over a fixed set of known directories.
#[derive(Debug, Clone)]
pub struct MemoryWorkingDir {
    cwd: PathBuf,
    dirs: HashSet<PathBuf>,
}

impl MemoryWorkingDir {
    /// Start in `cwd`; the start directory and its ancestors are known.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        let mut wd = Self {
            cwd: cwd.into(),
            dirs: HashSet::new(),
        };
        let start = wd.cwd.clone();
        wd.add_dir(start);
        wd
    }

    /// Register a directory (and its ancestors) as existing.
    pub fn add_dir(&mut self, path: impl AsRef<Path>) {
        for dir in path.as_ref().ancestors() {
            if !dir.as_os_str().is_empty() {
                self.dirs.insert(dir.to_path_buf());
            }
        }
    }

    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.add_dir(path);
        self
    }
}

impl WorkingDir for MemoryWorkingDir {
    fn current(&self) -> Result<PathBuf> {
        Ok(self.cwd.clone())
    }

    fn change_to(&mut self, path: &Path) -> Result<()> {
        if !self.dirs.contains(path) {
            return Err(ShellError::sys("chdir")(Errno::ENOENT));
        }
        self.cwd = path.to_path_buf();
        Ok(())
    }
}
