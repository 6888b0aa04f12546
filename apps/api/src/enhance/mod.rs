//! Section enhancement — pluggable, trait-based rewriter for resume text.
//!
//! Default: `PolishEnhancer` (deterministic, no model call).
//! `AppState` holds an `Arc<dyn Enhancer>` so a real backend can be swapped in
//! without touching the handler.

use async_trait::async_trait;

use crate::errors::AppError;

/// Implement this to change how `/ai-enhance` rewrites text.
#[async_trait]
pub trait Enhancer: Send + Sync {
    async fn enhance(&self, section: &str, content: &str) -> Result<String, AppError>;
}

/// Mock enhancer: capitalizes the trimmed text and wraps it in a fixed banner.
pub struct PolishEnhancer;

#[async_trait]
impl Enhancer for PolishEnhancer {
    async fn enhance(&self, _section: &str, content: &str) -> Result<String, AppError> {
        Ok(polish(content))
    }
}

pub fn polish(content: &str) -> String {
    format!("🔍 Enhanced: {} (Polished with AI ✨)", capitalize(content.trim()))
}

/// First character upper-cased, the rest lower-cased.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
    }
}
