//! Axum route handlers for the resume endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use resume_builder::client::wire::{EnhanceRequest, EnhanceResponse, LoadResponse, SaveResponse};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

pub const SAVED_MESSAGE: &str = "Resume saved successfully.";
pub const NOTHING_SAVED_MESSAGE: &str = "No saved resume found.";

/// POST /ai-enhance
pub async fn handle_enhance(
    State(state): State<AppState>,
    body: Result<Json<EnhanceRequest>, JsonRejection>,
) -> Result<Json<EnhanceResponse>, AppError> {
    let Json(req) = body?;
    info!("Enhancing section '{}' ({} chars)", req.section, req.content.len());
    let enhanced = state.enhancer.enhance(&req.section, &req.content).await?;
    Ok(Json(EnhanceResponse { enhanced }))
}

/// POST /save-resume
///
/// Stores the body as the latest resume, replacing the previous one.
pub async fn handle_save(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SaveResponse>, AppError> {
    let Json(resume) = body?;
    if !resume.is_object() {
        return Err(AppError::Validation(
            "Resume must be a JSON object".to_string(),
        ));
    }
    state.storage.save(&resume).await?;
    Ok(Json(SaveResponse {
        status: Some("success".to_string()),
        message: Some(SAVED_MESSAGE.to_string()),
    }))
}

/// GET /get-resume
pub async fn handle_load(State(state): State<AppState>) -> Result<Json<LoadResponse>, AppError> {
    let resume = state.storage.load().await?;
    let message = resume
        .is_none()
        .then(|| NOTHING_SAVED_MESSAGE.to_string());
    Ok(Json(LoadResponse { resume, message }))
}
