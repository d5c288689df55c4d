use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth::{dtos as auth_dtos, handlers as auth_handlers, model as auth_model};
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::contact::{dtos as contact_dtos, handlers as contact_handlers};
use crate::features::content::{dtos as content_dtos, handlers as content_handlers};
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::gifs::{dtos as gifs_dtos, handlers as gifs_handlers};
use crate::features::giphy::{dtos as giphy_dtos, handlers as giphy_handlers};
use crate::features::i18n::{dtos as i18n_dtos, handlers as i18n_handlers};
use crate::features::settings::{dtos as settings_dtos, handlers as settings_handlers};
use crate::features::sitemap::handlers as sitemap_handlers;
use crate::features::tags::{dtos as tags_dtos, handlers as tags_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth_handlers::login,
        auth_handlers::get_me,
        // Categories
        categories_handlers::list_categories,
        categories_handlers::get_category,
        categories_handlers::create_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        categories_handlers::replace_category_translations,
        // Tags
        tags_handlers::list_tags,
        tags_handlers::get_tag,
        tags_handlers::create_tag,
        tags_handlers::update_tag,
        tags_handlers::delete_tag,
        tags_handlers::replace_tag_translations,
        // Gifs
        gifs_handlers::list_gifs,
        gifs_handlers::get_gif,
        gifs_handlers::submit_gif,
        gifs_handlers::list_pending_gifs,
        gifs_handlers::save_gif,
        gifs_handlers::approve_gif,
        gifs_handlers::reject_gif,
        gifs_handlers::delete_gif,
        gifs_handlers::replace_gif_translations,
        // Contact
        contact_handlers::submit_contact,
        contact_handlers::list_contact_submissions,
        contact_handlers::delete_contact_submission,
        // Settings
        settings_handlers::get_settings,
        settings_handlers::update_settings,
        // Content
        content_handlers::get_content,
        content_handlers::upsert_content,
        // I18n
        i18n_handlers::get_ui_translations,
        i18n_handlers::replace_ui_translations,
        // Giphy
        giphy_handlers::search_giphy,
        // Sitemap
        sitemap_handlers::get_sitemap,
        // Dashboard
        dashboard_handlers::get_dashboard_stats,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth_dtos::LoginRequestDto,
            auth_dtos::LoginResponseDto,
            auth_model::AuthenticatedAdmin,
            ApiResponse<auth_dtos::LoginResponseDto>,
            ApiResponse<auth_model::AuthenticatedAdmin>,
            // Categories
            categories_dtos::CategoryTranslationDto,
            categories_dtos::CategoryResponseDto,
            categories_dtos::HierarchicalCategoryDto,
            categories_dtos::CreateCategoryDto,
            categories_dtos::UpdateCategoryDto,
            categories_dtos::TranslationEntryDto,
            categories_dtos::ReplaceTranslationsDto,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            ApiResponse<Vec<categories_dtos::HierarchicalCategoryDto>>,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            ApiResponse<Vec<categories_dtos::CategoryTranslationDto>>,
            // Tags
            tags_dtos::TagTranslationDto,
            tags_dtos::TagResponseDto,
            tags_dtos::SaveTagDto,
            tags_dtos::TagTranslationEntryDto,
            tags_dtos::ReplaceTagTranslationsDto,
            ApiResponse<Vec<tags_dtos::TagResponseDto>>,
            ApiResponse<tags_dtos::TagResponseDto>,
            ApiResponse<Vec<tags_dtos::TagTranslationDto>>,
            // Gifs
            gifs_dtos::GifTranslationDto,
            gifs_dtos::GifResponseDto,
            gifs_dtos::SubmitGifDto,
            gifs_dtos::SaveGifDto,
            gifs_dtos::GifTranslationEntryDto,
            gifs_dtos::ReplaceGifTranslationsDto,
            ApiResponse<Vec<gifs_dtos::GifResponseDto>>,
            ApiResponse<gifs_dtos::GifResponseDto>,
            ApiResponse<Vec<gifs_dtos::GifTranslationDto>>,
            // Contact
            contact_dtos::CreateContactSubmissionDto,
            contact_dtos::ContactSubmissionDto,
            ApiResponse<contact_dtos::ContactSubmissionDto>,
            ApiResponse<Vec<contact_dtos::ContactSubmissionDto>>,
            // Settings
            settings_dtos::SiteSettingsDto,
            settings_dtos::UpdateSiteSettingsDto,
            ApiResponse<settings_dtos::SiteSettingsDto>,
            // Content
            content_dtos::ContentSectionDto,
            content_dtos::UpsertContentSectionDto,
            ApiResponse<content_dtos::ContentSectionDto>,
            // I18n
            i18n_dtos::UiTranslationsDto,
            i18n_dtos::ReplaceUiTranslationsDto,
            ApiResponse<i18n_dtos::UiTranslationsDto>,
            // Giphy
            giphy_dtos::GiphySearchDto,
        )
    ),
    tags(
        (name = "auth", description = "Admin authentication"),
        (name = "categories", description = "Category tree and translations"),
        (name = "tags", description = "Tags and translations"),
        (name = "gifs", description = "Gif listing, submission and moderation"),
        (name = "contact", description = "Contact form"),
        (name = "settings", description = "Site-wide settings"),
        (name = "content", description = "Localized static page content"),
        (name = "i18n", description = "UI string bundles"),
        (name = "giphy", description = "Giphy search proxy (admin only)"),
        (name = "sitemap", description = "XML sitemap"),
        (name = "dashboard", description = "Admin dashboard counters"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "GifHub API",
        version = "0.1.0",
        description = "API documentation for GifHub",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
