// src/builtin/mod.rs

//! Commands that run inside the shell process itself.
//!
//! - [`cd`] changes the shell's working directory.
//! - [`exit`] asks the shell to terminate.
//!
//! Builtins never fork. They report problems on stderr and hand back an
//! [`Outcome`]; nothing in here terminates the process.

pub mod cd;
pub mod exit;

use tracing::debug;

use crate::types::{EXIT_FAILURE, EXIT_SUCCESS, Outcome};
use crate::workdir::WorkingDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Cd,
    Exit,
}

impl Builtin {
    /// Recognise a builtin by its exact name.
    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            "cd" => Some(Builtin::Cd),
            "exit" => Some(Builtin::Exit),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Cd => "cd",
            Builtin::Exit => "exit",
        }
    }

    /// Run the builtin with `args` (argv without the builtin name).
    pub fn run(self, args: &[String], cwd: &mut dyn WorkingDir) -> Outcome {
        debug!(builtin = self.name(), ?args, "running builtin");

        match self {
            Builtin::Cd => match cd::change_directory(args.first().map(String::as_str), cwd) {
                Ok(()) => Outcome::Continue(EXIT_SUCCESS),
                Err(err) => {
                    eprintln!("{err}");
                    Outcome::Continue(EXIT_FAILURE)
                }
            },
            Builtin::Exit => Outcome::Exit(exit::exit_status(args.first().map(String::as_str))),
        }
    }
}
