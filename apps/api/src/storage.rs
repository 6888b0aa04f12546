//! Single-file storage for the last saved resume.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tokio::sync::Mutex;
use tracing::info;

use crate::errors::AppError;

/// The save file. Writes are serialized so concurrent saves never interleave.
pub struct ResumeFile {
    path: PathBuf,
    lock: Mutex<()>,
}

impl ResumeFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites the file with `resume` as indented JSON.
    pub async fn save(&self, resume: &Value) -> Result<(), AppError> {
        let body = serde_json::to_string_pretty(resume)?;
        let _guard = self.lock.lock().await;
        tokio::fs::write(&self.path, body).await?;
        info!("Saved resume to {}", self.path.display());
        Ok(())
    }

    /// The last saved resume, or `None` if nothing was saved yet.
    pub async fn load(&self) -> Result<Option<Value>, AppError> {
        let _guard = self.lock.lock().await;
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => Ok(Some(serde_json::from_str(&text)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
