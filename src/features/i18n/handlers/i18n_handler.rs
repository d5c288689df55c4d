use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::i18n::dtos::{ReplaceUiTranslationsDto, UiTranslationsDto};
use crate::features::i18n::services::I18nService;
use crate::shared::types::ApiResponse;

/// Get the UI string bundle for a language
#[utoipa::path(
    get,
    path = "/api/i18n/{lang}",
    params(
        ("lang" = String, Path, description = "Language code")
    ),
    responses(
        (status = 200, description = "UI translations", body = ApiResponse<UiTranslationsDto>),
        (status = 404, description = "Unsupported language or no bundle stored")
    ),
    tag = "i18n"
)]
pub async fn get_ui_translations(
    State(service): State<Arc<I18nService>>,
    Path(lang): Path<String>,
) -> Result<Json<ApiResponse<UiTranslationsDto>>> {
    let bundle = service.get(&lang).await?;
    Ok(Json(ApiResponse::success(Some(bundle), None, None)))
}

/// Replace the UI string bundle for a language
#[utoipa::path(
    put,
    path = "/api/admin/i18n/{lang}",
    params(
        ("lang" = String, Path, description = "Language code")
    ),
    request_body = ReplaceUiTranslationsDto,
    responses(
        (status = 200, description = "Bundle replaced", body = ApiResponse<UiTranslationsDto>),
        (status = 401, description = "Unauthorized"),
        (status = 400, description = "Unsupported language or malformed bundle")
    ),
    tag = "i18n",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn replace_ui_translations(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<I18nService>>,
    Path(lang): Path<String>,
    AppJson(dto): AppJson<ReplaceUiTranslationsDto>,
) -> Result<Json<ApiResponse<UiTranslationsDto>>> {
    let bundle = service.replace(&lang, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(bundle),
        Some("Translations updated successfully".to_string()),
        None,
    )))
}
