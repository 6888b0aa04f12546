//! HTTP clients for the enhancement and save service.
//!
//! The session only sees [`EnhancementService`] and [`PersistenceService`];
//! [`ApiClient`] implements both against the real service. Calls are made
//! once: no retry, no timeout.

pub mod wire;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::errors::ServiceError;
use crate::models::ResumeDocument;
use wire::{
    EnhanceRequest, EnhanceResponse, ErrorEnvelope, LoadResponse, SaveResponse, ENHANCE_PATH,
    LOAD_PATH, SAVE_PATH,
};

/// Shown when the save service answers without a message.
pub const DEFAULT_SAVE_MESSAGE: &str = "Resume successfully saved.";

/// Rewrites the text of one resume section.
#[async_trait]
pub trait EnhancementService: Send + Sync {
    async fn enhance(&self, section: &str, content: &str) -> Result<String, ServiceError>;
}

/// Stores a resume remotely and returns the confirmation message.
#[async_trait]
pub trait PersistenceService: Send + Sync {
    async fn save(&self, resume: &ResumeDocument<'_>) -> Result<String, ServiceError>;
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ServiceError> {
        Ok(Self {
            client: Client::builder().build()?,
            config,
        })
    }

    /// Fetches the last remotely saved resume, if the service has one.
    pub async fn load(&self) -> Result<Option<Value>, ServiceError> {
        let url = self.config.endpoint(LOAD_PATH);
        debug!("GET {url}");
        let response = self.client.get(&url).send().await?;
        let body: LoadResponse = decode(response).await?;
        Ok(body.resume)
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ServiceError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        debug!("POST {url}");
        let response = self.client.post(&url).json(body).send().await?;
        decode(response).await
    }
}

#[async_trait]
impl EnhancementService for ApiClient {
    async fn enhance(&self, section: &str, content: &str) -> Result<String, ServiceError> {
        let request = EnhanceRequest {
            section: section.to_string(),
            content: content.to_string(),
        };
        let response: EnhanceResponse = self.post_json(ENHANCE_PATH, &request).await?;
        Ok(response.enhanced)
    }
}

#[async_trait]
impl PersistenceService for ApiClient {
    async fn save(&self, resume: &ResumeDocument<'_>) -> Result<String, ServiceError> {
        let response: SaveResponse = self.post_json(SAVE_PATH, resume).await?;
        Ok(response
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_SAVE_MESSAGE.to_string()))
    }
}

/// Maps non-2xx to [`ServiceError::Api`] and decodes the body otherwise.
async fn decode<R: DeserializeOwned>(response: Response) -> Result<R, ServiceError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        warn!("Resume service returned {status}: {body}");
        // Use the service's error envelope when it sent one
        let message = serde_json::from_str::<ErrorEnvelope>(&body)
            .map(|e| e.error.message)
            .unwrap_or(body);
        return Err(ServiceError::Api {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::models::ResumeDraft;

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(ClientConfig::new(server.base_url())).unwrap()
    }

    #[tokio::test]
    async fn test_enhance_posts_section_and_content() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/ai-enhance")
                    .json_body(json!({"section": "summary", "content": "x"}));
                then.status(200).json_body(json!({"enhanced": "y"}));
            })
            .await;

        let enhanced = client_for(&server).enhance("summary", "x").await.unwrap();
        assert_eq!(enhanced, "y");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_enhance_non_success_is_api_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/ai-enhance");
                then.status(500).json_body(json!({
                    "error": {"code": "INTERNAL_ERROR", "message": "boom"}
                }));
            })
            .await;

        let err = client_for(&server).enhance("summary", "x").await.unwrap_err();
        match err {
            ServiceError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_enhance_malformed_body_is_parse_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/ai-enhance");
                then.status(200).body("not json");
            })
            .await;

        let err = client_for(&server).enhance("summary", "x").await.unwrap_err();
        assert!(matches!(err, ServiceError::Parse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_http_error() {
        // Port 9 (discard) is closed on test machines.
        let client = ApiClient::new(ClientConfig::new("http://127.0.0.1:9")).unwrap();
        let err = client.enhance("summary", "x").await.unwrap_err();
        assert!(matches!(err, ServiceError::Http(_)));
    }

    #[tokio::test]
    async fn test_save_sends_full_document_and_returns_message() {
        let server = MockServer::start_async().await;
        let draft = ResumeDraft::sample();
        let expected_body = serde_json::to_value(&draft).unwrap();
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/save-resume").json_body(expected_body);
                then.status(200).json_body(json!({
                    "status": "success",
                    "message": "Resume saved successfully."
                }));
            })
            .await;

        let message = client_for(&server)
            .save(&ResumeDocument::Draft(&draft))
            .await
            .unwrap();
        assert_eq!(message, "Resume saved successfully.");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_save_without_message_uses_default() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/save-resume");
                then.status(200).json_body(json!({"status": "success"}));
            })
            .await;

        let draft = ResumeDraft::default();
        let message = client_for(&server)
            .save(&ResumeDocument::Draft(&draft))
            .await
            .unwrap();
        assert_eq!(message, DEFAULT_SAVE_MESSAGE);
    }

    #[tokio::test]
    async fn test_load_returns_saved_document() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/get-resume");
                then.status(200).json_body(json!({"resume": {"fullName": "Ada"}}));
            })
            .await;

        let resume = client_for(&server).load().await.unwrap();
        assert_eq!(resume, Some(json!({"fullName": "Ada"})));
    }

    #[tokio::test]
    async fn test_load_when_nothing_saved() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/get-resume");
                then.status(200)
                    .json_body(json!({"resume": null, "message": "No saved resume found."}));
            })
            .await;

        assert_eq!(client_for(&server).load().await.unwrap(), None);
    }
}
