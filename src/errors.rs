// src/errors.rs

//! Crate-wide error type and result alias.

use nix::errno::Errno;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    /// A system call used to set up processes or descriptors failed.
    ///
    /// `op` is the name of the call (`pipe`, `fork`, `open`, `dup2`, ...).
    #[error("{op}: {}", .source.desc())]
    Sys {
        op: &'static str,
        #[source]
        source: Errno,
    },

    /// Replacing the process image failed.
    #[error("{program}: {}", .source.desc())]
    Exec {
        program: String,
        #[source]
        source: Errno,
    },

    #[error("{0}: missing argument")]
    MissingArgument(&'static str),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShellError {
    /// Adapter for `map_err` on nix calls: `pipe().map_err(ShellError::sys("pipe"))`.
    pub fn sys(op: &'static str) -> impl FnOnce(Errno) -> ShellError {
        move |source| ShellError::Sys { op, source }
    }
}

pub type Result<T> = std::result::Result<T, ShellError>;
