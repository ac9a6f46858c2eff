// src/command.rs

//! The parsed command handed to the executor.
//!
//! A `Command` is one pipeline stage: a program name plus arguments, optional
//! file redirections for the three standard streams, and an optional link to
//! the next stage. The chain is singly linked and owned front to back.

use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Program (or builtin) name followed by its arguments.
    pub argv: Vec<String>,
    /// `< file`
    pub in_filename: Option<PathBuf>,
    /// `> file`
    pub out_filename: Option<PathBuf>,
    /// `2> file`
    pub err_filename: Option<PathBuf>,
    /// `| next`
    pub pipe_to: Option<Box<Command>>,
}

impl Command {
    pub fn new<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            argv: argv.into_iter().map(Into::into).collect(),
            in_filename: None,
            out_filename: None,
            err_filename: None,
            pipe_to: None,
        }
    }

    pub fn stdin_from(mut self, path: impl Into<PathBuf>) -> Self {
        self.in_filename = Some(path.into());
        self
    }

    pub fn stdout_to(mut self, path: impl Into<PathBuf>) -> Self {
        self.out_filename = Some(path.into());
        self
    }

    pub fn stderr_to(mut self, path: impl Into<PathBuf>) -> Self {
        self.err_filename = Some(path.into());
        self
    }

    /// Append `next` at the end of this pipeline.
    pub fn pipe_into(mut self, next: Command) -> Self {
        self.pipe_to = Some(Box::new(match self.pipe_to.take() {
            Some(tail) => (*tail).pipe_into(next),
            None => next,
        }));
        self
    }

    /// First word of `argv`; empty if the parser handed us nothing.
    pub fn program(&self) -> &str {
        self.argv.first().map(String::as_str).unwrap_or("")
    }

    pub fn args(&self) -> &[String] {
        self.argv.get(1..).unwrap_or(&[])
    }

    /// Walk the pipeline starting at this stage.
    pub fn stages(&self) -> Stages<'_> {
        Stages { next: Some(self) }
    }

    pub fn stage_count(&self) -> usize {
        self.stages().count()
    }
}

/// Iterator over the stages of a pipeline.
pub struct Stages<'a> {
    next: Option<&'a Command>,
}

impl<'a> Iterator for Stages<'a> {
    type Item = &'a Command;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.pipe_to.as_deref();
        Some(current)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stage) in self.stages().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            f.write_str(&stage.argv.join(" "))?;
            write_redirect(f, "<", stage.in_filename.as_deref())?;
            write_redirect(f, ">", stage.out_filename.as_deref())?;
            write_redirect(f, "2>", stage.err_filename.as_deref())?;
        }
        Ok(())
    }
}

fn write_redirect(f: &mut fmt::Formatter<'_>, op: &str, path: Option<&Path>) -> fmt::Result {
    match path {
        Some(path) => write!(f, " {op} {}", path.display()),
        None => Ok(()),
    }
}
