use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::settings::dtos::{SiteSettingsDto, UpdateSiteSettingsDto};
use crate::features::settings::services::SettingsService;
use crate::shared::types::ApiResponse;

/// Read the site settings
#[utoipa::path(
    get,
    path = "/api/settings",
    responses(
        (status = 200, description = "Site settings", body = ApiResponse<SiteSettingsDto>),
    ),
    tag = "settings"
)]
pub async fn get_settings(
    State(service): State<Arc<SettingsService>>,
) -> Result<Json<ApiResponse<SiteSettingsDto>>> {
    let settings = service.get().await?;
    Ok(Json(ApiResponse::success(Some(settings), None, None)))
}

/// Replace the site settings
#[utoipa::path(
    put,
    path = "/api/admin/settings",
    request_body = UpdateSiteSettingsDto,
    responses(
        (status = 200, description = "Settings updated", body = ApiResponse<SiteSettingsDto>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "settings",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_settings(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<SettingsService>>,
    AppJson(dto): AppJson<UpdateSiteSettingsDto>,
) -> Result<Json<ApiResponse<SiteSettingsDto>>> {
    dto.validate()?;
    let settings = service.update(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(settings),
        Some("Settings updated successfully".to_string()),
        None,
    )))
}
