use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::tags::dtos::{
    ReplaceTagTranslationsDto, SaveTagDto, TagResponseDto, TagTranslationDto,
};
use crate::features::tags::services::TagService;
use crate::shared::types::ApiResponse;

/// List all tags
#[utoipa::path(
    get,
    path = "/api/tags",
    responses(
        (status = 200, description = "List of tags", body = ApiResponse<Vec<TagResponseDto>>),
    ),
    tag = "tags"
)]
pub async fn list_tags(
    State(service): State<Arc<TagService>>,
) -> Result<Json<ApiResponse<Vec<TagResponseDto>>>> {
    let tags = service.list().await?;
    Ok(Json(ApiResponse::success(Some(tags), None, None)))
}

/// Get tag by slug
#[utoipa::path(
    get,
    path = "/api/tags/{slug}",
    params(
        ("slug" = String, Path, description = "Tag slug")
    ),
    responses(
        (status = 200, description = "Tag found", body = ApiResponse<TagResponseDto>),
        (status = 404, description = "Tag not found")
    ),
    tag = "tags"
)]
pub async fn get_tag(
    State(service): State<Arc<TagService>>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<TagResponseDto>>> {
    let tag = service.get_by_slug(&slug).await?;
    Ok(Json(ApiResponse::success(Some(tag), None, None)))
}

/// Create a tag
#[utoipa::path(
    post,
    path = "/api/admin/tags",
    request_body = SaveTagDto,
    responses(
        (status = 200, description = "Tag created", body = ApiResponse<TagResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Slug already exists")
    ),
    tag = "tags",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_tag(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<TagService>>,
    AppJson(dto): AppJson<SaveTagDto>,
) -> Result<Json<ApiResponse<TagResponseDto>>> {
    dto.validate()?;
    let tag = service.create(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(tag),
        Some("Tag created successfully".to_string()),
        None,
    )))
}

/// Rename a tag
#[utoipa::path(
    put,
    path = "/api/admin/tags/{id}",
    params(
        ("id" = Uuid, Path, description = "Tag id")
    ),
    request_body = SaveTagDto,
    responses(
        (status = 200, description = "Tag updated", body = ApiResponse<TagResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Tag not found")
    ),
    tag = "tags",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_tag(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<TagService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<SaveTagDto>,
) -> Result<Json<ApiResponse<TagResponseDto>>> {
    dto.validate()?;
    let tag = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(tag),
        Some("Tag updated successfully".to_string()),
        None,
    )))
}

/// Delete a tag
#[utoipa::path(
    delete,
    path = "/api/admin/tags/{id}",
    params(
        ("id" = Uuid, Path, description = "Tag id")
    ),
    responses(
        (status = 200, description = "Tag deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Tag not found")
    ),
    tag = "tags",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_tag(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<TagService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Tag deleted successfully".to_string()),
        None,
    )))
}

/// Replace the per-language name overrides of a tag
#[utoipa::path(
    put,
    path = "/api/admin/tags/{id}/translations",
    params(
        ("id" = Uuid, Path, description = "Tag id")
    ),
    request_body = ReplaceTagTranslationsDto,
    responses(
        (status = 200, description = "Translations replaced", body = ApiResponse<Vec<TagTranslationDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Tag not found")
    ),
    tag = "tags",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn replace_tag_translations(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<TagService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<ReplaceTagTranslationsDto>,
) -> Result<Json<ApiResponse<Vec<TagTranslationDto>>>> {
    dto.validate()?;
    let translations = service.replace_translations(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(translations), None, None)))
}
