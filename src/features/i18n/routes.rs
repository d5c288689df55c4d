use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::i18n::handlers;
use crate::features::i18n::services::I18nService;

/// Public i18n route (no authentication required)
pub fn routes(service: Arc<I18nService>) -> Router {
    Router::new()
        .route("/api/i18n/{lang}", get(handlers::get_ui_translations))
        .with_state(service)
}

/// Admin i18n route (mounted behind the auth middleware)
pub fn admin_routes(service: Arc<I18nService>) -> Router {
    Router::new()
        .route(
            "/api/admin/i18n/{lang}",
            put(handlers::replace_ui_translations),
        )
        .with_state(service)
}
