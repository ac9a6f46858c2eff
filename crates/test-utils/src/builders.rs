#![allow(dead_code)]

use std::path::PathBuf;

use shexec::config::{PipelineFile, RawPipelineFile, StageConfig};

/// Builder for `PipelineFile` to simplify test setup.
pub struct PipelineFileBuilder {
    raw: RawPipelineFile,
}

impl PipelineFileBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawPipelineFile { stage: Vec::new() },
        }
    }

    pub fn with_stage(mut self, stage: StageConfig) -> Self {
        self.raw.stage.push(stage);
        self
    }

    pub fn raw(self) -> RawPipelineFile {
        self.raw
    }

    pub fn build(self) -> PipelineFile {
        PipelineFile::try_from(self.raw).expect("Failed to build valid pipeline from builder")
    }
}

impl Default for PipelineFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `StageConfig`.
pub struct StageConfigBuilder {
    stage: StageConfig,
}

impl StageConfigBuilder {
    pub fn new(program: &str) -> Self {
        Self {
            stage: StageConfig {
                argv: vec![program.to_string()],
                stdin: None,
                stdout: None,
                stderr: None,
            },
        }
    }

    pub fn arg(mut self, arg: &str) -> Self {
        self.stage.argv.push(arg.to_string());
        self
    }

    pub fn stdin(mut self, path: impl Into<PathBuf>) -> Self {
        self.stage.stdin = Some(path.into());
        self
    }

    pub fn stdout(mut self, path: impl Into<PathBuf>) -> Self {
        self.stage.stdout = Some(path.into());
        self
    }

    pub fn stderr(mut self, path: impl Into<PathBuf>) -> Self {
        self.stage.stderr = Some(path.into());
        self
    }

    pub fn build(self) -> StageConfig {
        self.stage
    }
}
