use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::gifs::dtos::{
    GifResponseDto, GifTranslationDto, ListGifsQuery, ReplaceGifTranslationsDto, SaveGifDto,
    SubmitGifDto,
};
use crate::features::gifs::services::GifService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// List approved gifs with filters and pagination
#[utoipa::path(
    get,
    path = "/api/gifs",
    params(ListGifsQuery),
    responses(
        (status = 200, description = "Paginated list of gifs", body = ApiResponse<Vec<GifResponseDto>>),
    ),
    tag = "gifs"
)]
pub async fn list_gifs(
    State(service): State<Arc<GifService>>,
    Query(query): Query<ListGifsQuery>,
) -> Result<Json<ApiResponse<Vec<GifResponseDto>>>> {
    let (gifs, total) = service.list(query).await?;
    Ok(Json(ApiResponse::success(
        Some(gifs),
        None,
        Some(Meta { total }),
    )))
}

/// Get an approved gif by slug
#[utoipa::path(
    get,
    path = "/api/gifs/{slug}",
    params(
        ("slug" = String, Path, description = "Gif slug")
    ),
    responses(
        (status = 200, description = "Gif found", body = ApiResponse<GifResponseDto>),
        (status = 404, description = "Gif not found")
    ),
    tag = "gifs"
)]
pub async fn get_gif(
    State(service): State<Arc<GifService>>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<GifResponseDto>>> {
    let gif = service.get_by_slug(&slug).await?;
    Ok(Json(ApiResponse::success(Some(gif), None, None)))
}

/// Public submission; the gif waits in the moderation queue
#[utoipa::path(
    post,
    path = "/api/gifs/submit",
    request_body = SubmitGifDto,
    responses(
        (status = 200, description = "Submission accepted", body = ApiResponse<GifResponseDto>),
        (status = 400, description = "Validation failed")
    ),
    tag = "gifs"
)]
pub async fn submit_gif(
    State(service): State<Arc<GifService>>,
    AppJson(dto): AppJson<SubmitGifDto>,
) -> Result<Json<ApiResponse<GifResponseDto>>> {
    dto.validate()?;
    let gif = service.submit(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(gif),
        Some("Submission received and awaiting review".to_string()),
        None,
    )))
}

/// List gifs awaiting moderation
#[utoipa::path(
    get,
    path = "/api/admin/gifs/pending",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Pending gifs", body = ApiResponse<Vec<GifResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "gifs",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_pending_gifs(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<GifService>>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<GifResponseDto>>>> {
    let (gifs, total) = service
        .list_pending(pagination.offset(), pagination.limit())
        .await?;
    Ok(Json(ApiResponse::success(
        Some(gifs),
        None,
        Some(Meta { total }),
    )))
}

/// Create or update a gif from the admin console
#[utoipa::path(
    post,
    path = "/api/admin/gifs",
    request_body = SaveGifDto,
    responses(
        (status = 200, description = "Gif saved", body = ApiResponse<GifResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Gif not found"),
        (status = 409, description = "Slug already exists")
    ),
    tag = "gifs",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn save_gif(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<GifService>>,
    AppJson(dto): AppJson<SaveGifDto>,
) -> Result<Json<ApiResponse<GifResponseDto>>> {
    dto.validate()?;
    let gif = service.save(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(gif),
        Some("Gif saved successfully".to_string()),
        None,
    )))
}

/// Approve a pending gif
#[utoipa::path(
    post,
    path = "/api/admin/gifs/{id}/approve",
    params(
        ("id" = Uuid, Path, description = "Gif id")
    ),
    responses(
        (status = 200, description = "Gif approved", body = ApiResponse<GifResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Gif not found")
    ),
    tag = "gifs",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn approve_gif(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<GifService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<GifResponseDto>>> {
    let gif = service.approve(id).await?;
    Ok(Json(ApiResponse::success(
        Some(gif),
        Some("Gif approved".to_string()),
        None,
    )))
}

/// Reject a pending gif, removing it
#[utoipa::path(
    post,
    path = "/api/admin/gifs/{id}/reject",
    params(
        ("id" = Uuid, Path, description = "Gif id")
    ),
    responses(
        (status = 200, description = "Gif rejected and removed"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Pending gif not found")
    ),
    tag = "gifs",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn reject_gif(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<GifService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.reject(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Gif rejected".to_string()),
        None,
    )))
}

/// Delete a gif
#[utoipa::path(
    delete,
    path = "/api/admin/gifs/{id}",
    params(
        ("id" = Uuid, Path, description = "Gif id")
    ),
    responses(
        (status = 200, description = "Gif deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Gif not found")
    ),
    tag = "gifs",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_gif(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<GifService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Gif deleted successfully".to_string()),
        None,
    )))
}

/// Replace the per-language title overrides of a gif
#[utoipa::path(
    put,
    path = "/api/admin/gifs/{id}/translations",
    params(
        ("id" = Uuid, Path, description = "Gif id")
    ),
    request_body = ReplaceGifTranslationsDto,
    responses(
        (status = 200, description = "Translations replaced", body = ApiResponse<Vec<GifTranslationDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Gif not found")
    ),
    tag = "gifs",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn replace_gif_translations(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<GifService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<ReplaceGifTranslationsDto>,
) -> Result<Json<ApiResponse<Vec<GifTranslationDto>>>> {
    dto.validate()?;
    let translations = service.replace_translations(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(translations), None, None)))
}
