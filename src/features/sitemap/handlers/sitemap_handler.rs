use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::core::error::Result;
use crate::features::sitemap::services::SitemapService;

/// Serve the XML sitemap
#[utoipa::path(
    get,
    path = "/sitemap.xml",
    responses(
        (status = 200, description = "XML sitemap", body = String, content_type = "application/xml")
    ),
    tag = "sitemap"
)]
pub async fn get_sitemap(State(service): State<Arc<SitemapService>>) -> Result<Response> {
    let xml = service.generate().await?;
    Ok(([(header::CONTENT_TYPE, "application/xml")], xml).into_response())
}
