pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use resume_builder::client::wire::{ENHANCE_PATH, LOAD_PATH, SAVE_PATH};

use crate::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(ENHANCE_PATH, post(handlers::handle_enhance))
        .route(SAVE_PATH, post(handlers::handle_save))
        .route(LOAD_PATH, get(handlers::handle_load))
        .with_state(state)
}
