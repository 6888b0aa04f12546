//! Acceptance of uploaded resume files. Contents are never parsed.

use serde::{Deserialize, Serialize};

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

const ACCEPTED_EXTENSIONS: &[&str] = &[".pdf", ".docx"];

/// A file handed to the page by a drop or the file picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub name: String,
    /// MIME type reported by the browser, if any.
    pub mime: Option<String>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, mime: Option<&str>) -> Self {
        Self {
            name: name.into(),
            mime: mime.map(String::from),
        }
    }

    /// PDF or DOCX, judged by MIME type first and file extension second.
    pub fn is_accepted(&self) -> bool {
        if matches!(self.mime.as_deref(), Some(PDF_MIME) | Some(DOCX_MIME)) {
            return true;
        }
        let name = self.name.to_ascii_lowercase();
        ACCEPTED_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
    }
}

/// First acceptable file of a dropped batch.
pub fn pick_upload(files: Vec<UploadedFile>) -> Option<UploadedFile> {
    files.into_iter().find(UploadedFile::is_accepted)
}
