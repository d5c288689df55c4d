use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::giphy::handlers;
use crate::features::giphy::services::GiphyService;

/// Giphy proxy route (mounted behind the auth middleware)
pub fn admin_routes(service: Arc<GiphyService>) -> Router {
    Router::new()
        .route("/api/giphy/search", post(handlers::search_giphy))
        .with_state(service)
}
