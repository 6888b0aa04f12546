//! JSON export of the resume being edited.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::BuilderError;
use crate::models::ResumeDocument;

/// Name of the exported file.
pub const EXPORT_FILE_NAME: &str = "resume.json";

/// Indented, human-readable JSON.
pub fn render_json(document: &ResumeDocument<'_>) -> Result<String, BuilderError> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Writes [`render_json`] to `dir/resume.json`, replacing any earlier export.
pub fn write_json(document: &ResumeDocument<'_>, dir: &Path) -> Result<PathBuf, BuilderError> {
    let path = dir.join(EXPORT_FILE_NAME);
    fs::write(&path, render_json(document)?)?;
    info!("Exported resume to {}", path.display());
    Ok(path)
}
