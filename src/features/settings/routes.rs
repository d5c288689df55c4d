use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::settings::handlers;
use crate::features::settings::services::SettingsService;

/// Public settings route (no authentication required)
pub fn routes(service: Arc<SettingsService>) -> Router {
    Router::new()
        .route("/api/settings", get(handlers::get_settings))
        .with_state(service)
}

/// Admin settings route (mounted behind the auth middleware)
pub fn admin_routes(service: Arc<SettingsService>) -> Router {
    Router::new()
        .route("/api/admin/settings", put(handlers::update_settings))
        .with_state(service)
}
