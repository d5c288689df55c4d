use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::dashboard::handlers;
use crate::features::dashboard::services::DashboardService;

/// Admin dashboard route (mounted behind the auth middleware)
pub fn admin_routes(service: Arc<DashboardService>) -> Router {
    Router::new()
        .route("/api/admin/dashboard", get(handlers::get_dashboard_stats))
        .with_state(service)
}
