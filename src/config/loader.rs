// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::model::{PipelineFile, RawPipelineFile};
use crate::errors::Result;

/// Read a pipeline description and return the raw `RawPipelineFile`.
///
/// This only performs TOML deserialization; use [`load_and_validate`] to get
/// something executable.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawPipelineFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = contents.len(), "read pipeline description");

    let raw: RawPipelineFile = toml::from_str(&contents)?;
    Ok(raw)
}

/// Read, validate and link a pipeline description.
///
/// Checks for:
/// - at least one `[[stage]]`,
/// - a non-empty `argv` with a non-empty program name in every stage,
/// - NUL bytes in arguments or redirect paths.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<PipelineFile> {
    let raw = load_from_path(path)?;
    PipelineFile::try_from(raw)
}

/// Same as [`load_and_validate`] for an in-memory TOML document.
pub fn parse_and_validate(contents: &str) -> Result<PipelineFile> {
    let raw: RawPipelineFile = toml::from_str(contents)?;
    PipelineFile::try_from(raw)
}
