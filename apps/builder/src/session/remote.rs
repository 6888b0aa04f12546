use std::path::{Path, PathBuf};

use tracing::warn;

use super::EditorSession;
use crate::client::PersistenceService;
use crate::errors::BuilderError;
use crate::export;

pub const SAVE_FAILED: &str = "Could not save resume to backend.";
pub const DOWNLOAD_STARTED: &str = "Your resume JSON file is downloading.";

impl EditorSession {
    /// Sends the resume being edited to the save service. The local copy stays
    /// editable whatever the outcome; nothing is retried.
    pub async fn save_remote(&mut self, service: &dyn PersistenceService) -> bool {
        let result = service.save(&self.document()).await;
        match result {
            Ok(message) => {
                self.notifier.success(message);
                true
            }
            Err(e) => {
                warn!("Remote save failed: {e}");
                self.notifier.error(SAVE_FAILED);
                false
            }
        }
    }

    /// The resume being edited as indented JSON.
    pub fn export_json(&self) -> Result<String, BuilderError> {
        export::render_json(&self.document())
    }

    /// Writes `resume.json` into `dir`.
    pub fn download(&mut self, dir: &Path) -> Result<PathBuf, BuilderError> {
        let path = export::write_json(&self.document(), dir)?;
        self.notifier.info(DOWNLOAD_STARTED);
        Ok(path)
    }
}
