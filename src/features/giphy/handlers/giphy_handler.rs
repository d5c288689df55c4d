use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::giphy::dtos::GiphySearchDto;
use crate::features::giphy::services::GiphyService;
use crate::shared::types::ApiResponse;

/// Search Giphy on behalf of the admin GIF picker
#[utoipa::path(
    post,
    path = "/api/giphy/search",
    request_body = GiphySearchDto,
    responses(
        (status = 200, description = "Giphy results", body = ApiResponse<serde_json::Value>),
        (status = 401, description = "Unauthorized"),
        (status = 400, description = "Empty query"),
        (status = 502, description = "Upstream failure")
    ),
    tag = "giphy",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn search_giphy(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<GiphyService>>,
    AppJson(dto): AppJson<GiphySearchDto>,
) -> Result<Json<ApiResponse<serde_json::Value>>> {
    dto.validate()?;
    let results = service.search(dto.query.trim()).await?;
    Ok(Json(ApiResponse::success(Some(results), None, None)))
}
