// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::command::Command;

/// A pipeline as written in a TOML file.
///
/// ```toml
/// [[stage]]
/// argv = ["printf", "b\na\n"]
/// stdin = "input.txt"
///
/// [[stage]]
/// argv = ["sort"]
/// stdout = "sorted.txt"
/// stderr = "sort.err"
/// ```
///
/// Stages run left to right in file order, each one's stdout feeding the
/// next one's stdin. Redirect paths are taken relative to the shell's
/// working directory.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPipelineFile {
    #[serde(default)]
    pub stage: Vec<StageConfig>,
}

/// One `[[stage]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StageConfig {
    pub argv: Vec<String>,

    #[serde(default)]
    pub stdin: Option<PathBuf>,

    #[serde(default)]
    pub stdout: Option<PathBuf>,

    #[serde(default)]
    pub stderr: Option<PathBuf>,
}

impl StageConfig {
    /// This stage alone, without any `pipe_to`.
    pub fn to_command(&self) -> Command {
        Command {
            argv: self.argv.clone(),
            in_filename: self.stdin.clone(),
            out_filename: self.stdout.clone(),
            err_filename: self.stderr.clone(),
            pipe_to: None,
        }
    }
}

/// A validated pipeline description.
///
/// Only constructed through `TryFrom<RawPipelineFile>`, so `command` always
/// has at least one well-formed stage.
#[derive(Debug, Clone)]
pub struct PipelineFile {
    stages: Vec<StageConfig>,
    command: Command,
}

impl PipelineFile {
    pub(crate) fn new_unchecked(stages: Vec<StageConfig>, command: Command) -> Self {
        Self { stages, command }
    }

    pub fn stages(&self) -> &[StageConfig] {
        &self.stages
    }

    /// The head of the command chain.
    pub fn command(&self) -> &Command {
        &self.command
    }

    pub fn into_command(self) -> Command {
        self.command
    }
}
