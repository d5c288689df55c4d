use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::features::gifs::handlers;
use crate::features::gifs::services::GifService;

/// Public gif routes (no authentication required)
pub fn routes(service: Arc<GifService>) -> Router {
    Router::new()
        .route("/api/gifs", get(handlers::list_gifs))
        .route("/api/gifs/submit", post(handlers::submit_gif))
        .route("/api/gifs/{slug}", get(handlers::get_gif))
        .with_state(service)
}

/// Admin gif routes (mounted behind the auth middleware)
pub fn admin_routes(service: Arc<GifService>) -> Router {
    Router::new()
        .route("/api/admin/gifs", post(handlers::save_gif))
        .route("/api/admin/gifs/pending", get(handlers::list_pending_gifs))
        .route("/api/admin/gifs/{id}", delete(handlers::delete_gif))
        .route("/api/admin/gifs/{id}/approve", post(handlers::approve_gif))
        .route("/api/admin/gifs/{id}/reject", post(handlers::reject_gif))
        .route(
            "/api/admin/gifs/{id}/translations",
            put(handlers::replace_gif_translations),
        )
        .with_state(service)
}
