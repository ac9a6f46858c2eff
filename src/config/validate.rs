// src/config/validate.rs

use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use crate::command::Command;
use crate::config::model::{PipelineFile, RawPipelineFile, StageConfig};
use crate::errors::{Result, ShellError};

impl TryFrom<RawPipelineFile> for PipelineFile {
    type Error = ShellError;

    fn try_from(raw: RawPipelineFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_pipeline(&raw)?;
        let command = link_stages(&raw.stage)?;
        Ok(PipelineFile::new_unchecked(raw.stage, command))
    }
}

fn validate_raw_pipeline(raw: &RawPipelineFile) -> Result<()> {
    ensure_has_stages(raw)?;
    for (index, stage) in raw.stage.iter().enumerate() {
        validate_stage(index, stage)?;
    }
    Ok(())
}

fn ensure_has_stages(raw: &RawPipelineFile) -> Result<()> {
    if raw.stage.is_empty() {
        return Err(ShellError::ConfigError(
            "pipeline must contain at least one [[stage]] table".to_string(),
        ));
    }
    Ok(())
}

fn validate_stage(index: usize, stage: &StageConfig) -> Result<()> {
    let program = stage.argv.first().ok_or_else(|| {
        ShellError::ConfigError(format!("stage {index} has an empty `argv`"))
    })?;
    if program.is_empty() {
        return Err(ShellError::ConfigError(format!(
            "stage {index} has an empty program name"
        )));
    }

    if let Some(arg) = stage.argv.iter().find(|arg| arg.contains('\0')) {
        return Err(ShellError::ConfigError(format!(
            "stage {index} argument {arg:?} contains a NUL byte"
        )));
    }

    let redirects = [
        ("stdin", &stage.stdin),
        ("stdout", &stage.stdout),
        ("stderr", &stage.stderr),
    ];
    for (name, path) in redirects {
        if let Some(path) = path {
            validate_path(index, name, path)?;
        }
    }
    Ok(())
}

fn validate_path(index: usize, name: &str, path: &Path) -> Result<()> {
    let bytes = path.as_os_str().as_bytes();
    if bytes.is_empty() {
        return Err(ShellError::ConfigError(format!(
            "stage {index} has an empty `{name}` path"
        )));
    }
    if bytes.contains(&0) {
        return Err(ShellError::ConfigError(format!(
            "stage {index} `{name}` path contains a NUL byte"
        )));
    }
    Ok(())
}

/// Build the command chain back to front so each stage owns its successor.
fn link_stages(stages: &[StageConfig]) -> Result<Command> {
    let mut next: Option<Command> = None;
    for stage in stages.iter().rev() {
        let mut command = stage.to_command();
        command.pipe_to = next.take().map(Box::new);
        next = Some(command);
    }
    next.ok_or_else(|| ShellError::ConfigError("pipeline has no stages".to_string()))
}
