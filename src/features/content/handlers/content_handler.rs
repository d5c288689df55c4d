use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::content::dtos::{ContentQuery, ContentSectionDto, UpsertContentSectionDto};
use crate::features::content::services::ContentService;
use crate::shared::constants::DEFAULT_LANGUAGE;
use crate::shared::types::ApiResponse;
use crate::shared::validation::LANGUAGE_CODE_REGEX;

/// Get a static page section in the requested language
#[utoipa::path(
    get,
    path = "/api/content/{section_key}",
    params(
        ("section_key" = String, Path, description = "Section key"),
        ContentQuery
    ),
    responses(
        (status = 200, description = "Content section", body = ApiResponse<ContentSectionDto>),
        (status = 404, description = "Section not found")
    ),
    tag = "content"
)]
pub async fn get_content(
    State(service): State<Arc<ContentService>>,
    Path(section_key): Path<String>,
    Query(query): Query<ContentQuery>,
) -> Result<Json<ApiResponse<ContentSectionDto>>> {
    let lang = query.lang.as_deref().unwrap_or(DEFAULT_LANGUAGE);
    let section = service.get(&section_key, lang).await?;
    Ok(Json(ApiResponse::success(Some(section), None, None)))
}

/// Upsert one language's version of a section
#[utoipa::path(
    put,
    path = "/api/admin/content/{section_key}/{lang}",
    params(
        ("section_key" = String, Path, description = "Section key"),
        ("lang" = String, Path, description = "Language code")
    ),
    request_body = UpsertContentSectionDto,
    responses(
        (status = 200, description = "Section saved", body = ApiResponse<ContentSectionDto>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "content",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn upsert_content(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<ContentService>>,
    Path((section_key, lang)): Path<(String, String)>,
    AppJson(dto): AppJson<UpsertContentSectionDto>,
) -> Result<Json<ApiResponse<ContentSectionDto>>> {
    if !LANGUAGE_CODE_REGEX.is_match(&lang) {
        return Err(AppError::Validation(format!(
            "Invalid language code '{}'",
            lang
        )));
    }
    dto.validate()?;
    let section = service.upsert(&section_key, &lang, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(section),
        Some("Content saved successfully".to_string()),
        None,
    )))
}
