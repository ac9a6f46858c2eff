// src/lib.rs

pub mod builtin;
pub mod cli;
pub mod command;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod types;
pub mod workdir;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::command::Command;
use crate::config::load_and_validate;
use crate::exec::Shell;
use crate::types::{ExitCode, Outcome};

/// High-level entry point used by `main.rs`.
///
/// Resolves the command chain (from `--file` or the trailing argv), runs it
/// and returns the status the process should exit with. This is the only
/// place where an `exit` builtin turns into an actual process exit code.
pub fn run(args: CliArgs) -> Result<ExitCode> {
    let cmd = resolve_command(&args)?;

    if args.dry_run {
        print_dry_run(&cmd);
        return Ok(0);
    }

    let mut shell = Shell::new();
    let outcome = shell
        .execute(&cmd)
        .with_context(|| format!("executing `{cmd}`"))?;

    match outcome {
        Outcome::Continue(code) => {
            debug!(code, "command line finished");
            Ok(code)
        }
        Outcome::Exit(code) => {
            info!(code, "exit requested");
            Ok(code)
        }
    }
}

/// Build the `Command` to execute from the CLI arguments.
fn resolve_command(args: &CliArgs) -> Result<Command> {
    match (&args.file, args.command.is_empty()) {
        (Some(_), false) => bail!("pass either --file or a command, not both"),
        (None, true) => bail!("nothing to execute: pass --file or a command"),
        (Some(path), true) => {
            let file = load_and_validate(path)
                .with_context(|| format!("loading pipeline from {}", path.display()))?;
            Ok(file.into_command())
        }
        (None, false) => {
            let mut cmd = Command::new(args.command.iter().cloned());
            cmd.in_filename = args.stdin.clone();
            cmd.out_filename = args.stdout.clone();
            cmd.err_filename = args.stderr.clone();
            Ok(cmd)
        }
    }
}

/// Simple dry-run output: one line per stage.
fn print_dry_run(cmd: &Command) {
    println!("shexec dry-run");
    println!("  {cmd}");
    println!();

    println!("stages ({}):", cmd.stage_count());
    for (i, stage) in cmd.stages().enumerate() {
        println!("  {i}: {}", stage.argv.join(" "));
        if let Some(ref path) = stage.in_filename {
            println!("      stdin: {}", path.display());
        }
        if let Some(ref path) = stage.out_filename {
            println!("      stdout: {}", path.display());
        }
        if let Some(ref path) = stage.err_filename {
            println!("      stderr: {}", path.display());
        }
    }
}
