use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::content::handlers;
use crate::features::content::services::ContentService;

/// Public content route (no authentication required)
pub fn routes(service: Arc<ContentService>) -> Router {
    Router::new()
        .route("/api/content/{section_key}", get(handlers::get_content))
        .with_state(service)
}

/// Admin content route (mounted behind the auth middleware)
pub fn admin_routes(service: Arc<ContentService>) -> Router {
    Router::new()
        .route(
            "/api/admin/content/{section_key}/{lang}",
            put(handlers::upsert_content),
        )
        .with_state(service)
}
