use anyhow::{Context, Result};

/// Base URL used when `RESUME_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }

    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let api_url = match std::env::var("RESUME_API_URL") {
            Ok(url) => url,
            Err(std::env::VarError::NotPresent) => DEFAULT_API_URL.to_string(),
            Err(e) => return Err(e).context("RESUME_API_URL must be valid unicode"),
        };

        Ok(Self::new(api_url))
    }

    /// Joins `path` onto the base URL without doubling the separator.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
