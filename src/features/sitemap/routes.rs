use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::sitemap::handlers;
use crate::features::sitemap::services::SitemapService;

/// Public sitemap route (no authentication required)
pub fn routes(service: Arc<SitemapService>) -> Router {
    Router::new()
        .route("/sitemap.xml", get(handlers::get_sitemap))
        .with_state(service)
}
