// src/builtin/cd.rs

//! `cd` — change the shell's working directory.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::{Result, ShellError};
use crate::workdir::WorkingDir;

/// Change to `target`.
///
/// Absolute paths are used as given. Relative paths are appended to the
/// current directory with a single separator; no normalisation of `.` or
/// `..` happens here, the OS resolves those.
pub fn change_directory(target: Option<&str>, cwd: &mut dyn WorkingDir) -> Result<()> {
    let target = target.ok_or(ShellError::MissingArgument("cd"))?;
    let resolved = resolve(target, cwd)?;

    cwd.change_to(&resolved)?;
    info!(cwd = %resolved.display(), "working directory changed");
    Ok(())
}

fn resolve(target: &str, cwd: &dyn WorkingDir) -> Result<PathBuf> {
    let path = Path::new(target);
    if path.has_root() {
        return Ok(path.to_path_buf());
    }
    Ok(cwd.current()?.join(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workdir::MemoryWorkingDir;

    #[test]
    fn relative_path_is_joined_to_cwd() {
        let mut wd = MemoryWorkingDir::new("/home/user").with_dir("/home/user/project");
        change_directory(Some("project"), &mut wd).unwrap();
        assert_eq!(wd.current().unwrap(), PathBuf::from("/home/user/project"));
    }

    #[test]
    fn absolute_path_ignores_cwd() {
        let mut wd = MemoryWorkingDir::new("/home/user/project").with_dir("/tmp");
        change_directory(Some("/tmp"), &mut wd).unwrap();
        assert_eq!(wd.current().unwrap(), PathBuf::from("/tmp"));
    }

    #[test]
    fn nested_relative_path() {
        let mut wd = MemoryWorkingDir::new("/srv").with_dir("/srv/a/b");
        change_directory(Some("a/b"), &mut wd).unwrap();
        assert_eq!(wd.current().unwrap(), PathBuf::from("/srv/a/b"));
    }

    #[test]
    fn missing_argument_is_an_error_not_a_termination() {
        let mut wd = MemoryWorkingDir::new("/home/user");
        let err = change_directory(None, &mut wd).unwrap_err();
        assert!(matches!(err, ShellError::MissingArgument("cd")));
    }

    #[test]
    fn nonexistent_directory_surfaces_chdir_error() {
        let mut wd = MemoryWorkingDir::new("/home/user");
        let err = change_directory(Some("ghost"), &mut wd).unwrap_err();
        assert!(matches!(err, ShellError::Sys { op: "chdir", .. }));
        assert_eq!(wd.current().unwrap(), PathBuf::from("/home/user"));
    }
}
