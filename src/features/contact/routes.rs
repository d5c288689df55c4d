use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::features::contact::handlers;
use crate::features::contact::services::ContactService;

/// Public contact route (no authentication required)
pub fn routes(service: Arc<ContactService>) -> Router {
    Router::new()
        .route("/api/contact", post(handlers::submit_contact))
        .with_state(service)
}

/// Admin inbox routes (mounted behind the auth middleware)
pub fn admin_routes(service: Arc<ContactService>) -> Router {
    Router::new()
        .route(
            "/api/admin/contact-submissions",
            get(handlers::list_contact_submissions),
        )
        .route(
            "/api/admin/contact-submissions/{id}",
            delete(handlers::delete_contact_submission),
        )
        .with_state(service)
}
