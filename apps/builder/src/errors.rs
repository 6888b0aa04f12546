use thiserror::Error;
use uuid::Uuid;

/// Failure of a call to the external enhancement or save service.
///
/// Every variant is surfaced to the user the same way: one notification, no
/// retry, and the in-memory state left as it was.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Library-level error type for operations that can fail outside the
/// notification flow (export, explicit lookups).
#[derive(Debug, Error)]
pub enum BuilderError {
    #[error("Resume not found: {0}")]
    NotFound(Uuid),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
