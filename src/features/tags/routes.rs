use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::tags::handlers;
use crate::features::tags::services::TagService;

/// Public tag routes (no authentication required)
pub fn routes(service: Arc<TagService>) -> Router {
    Router::new()
        .route("/api/tags", get(handlers::list_tags))
        .route("/api/tags/{slug}", get(handlers::get_tag))
        .with_state(service)
}

/// Admin tag routes (mounted behind the auth middleware)
pub fn admin_routes(service: Arc<TagService>) -> Router {
    Router::new()
        .route("/api/admin/tags", post(handlers::create_tag))
        .route(
            "/api/admin/tags/{id}",
            put(handlers::update_tag).delete(handlers::delete_tag),
        )
        .route(
            "/api/admin/tags/{id}/translations",
            put(handlers::replace_tag_translations),
        )
        .with_state(service)
}
