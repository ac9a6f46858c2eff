// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `shexec`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "shexec",
    version,
    about = "Run a command or pipeline with redirections, the way a shell would.",
    long_about = None
)]
pub struct CliArgs {
    /// Pipeline description (TOML, one `[[stage]]` per command).
    #[arg(long, short = 'f', value_name = "PATH", conflicts_with_all = ["stdin", "stdout", "stderr"])]
    pub file: Option<PathBuf>,

    /// Redirect the command's stdin from this file.
    #[arg(long, value_name = "PATH")]
    pub stdin: Option<PathBuf>,

    /// Redirect the command's stdout to this file (created/truncated).
    #[arg(long, value_name = "PATH")]
    pub stdout: Option<PathBuf>,

    /// Redirect the command's stderr to this file (created/truncated).
    #[arg(long, value_name = "PATH")]
    pub stderr: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SHEXEC_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print the resolved command chain, but don't execute anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Program and arguments to run (use `--` before arguments that start
    /// with a dash).
    #[arg(value_name = "COMMAND", trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
