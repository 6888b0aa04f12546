use std::sync::Arc;

use crate::enhance::Enhancer;
use crate::storage::ResumeFile;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable enhancer. Default: `PolishEnhancer`.
    pub enhancer: Arc<dyn Enhancer>,
    pub storage: Arc<ResumeFile>,
}
