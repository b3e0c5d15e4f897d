pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::builder::handlers;
use crate::contacts::handlers::handle_submit_contact;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Ad Builder API
        .route("/api/v1/format", post(handlers::handle_format))
        .route("/api/v1/ad-sizes", get(handlers::handle_list_ad_sizes))
        .route("/api/v1/presets/:format_id", get(handlers::handle_get_preset))
        .route("/api/v1/sections", get(handlers::handle_list_sections))
        .route("/api/v1/ads/compose", post(handlers::handle_compose))
        // Contact capture
        .route("/api/v1/contacts", post(handle_submit_contact))
        .fallback(not_found)
        .with_state(state)
}
