use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::gifs::models::{Gif, GifTranslation};
use crate::features::tags::dtos::TagResponseDto;
use crate::shared::localized::Localized;

/// Per-language title override carried alongside a gif
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GifTranslationDto {
    pub language_code: String,
    pub title: String,
}

impl From<GifTranslation> for GifTranslationDto {
    fn from(t: GifTranslation) -> Self {
        Self {
            language_code: t.language_code,
            title: t.title,
        }
    }
}

/// Response DTO for a gif with its category and tags resolved
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GifResponseDto {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub slug: String,
    pub category: Option<CategoryResponseDto>,
    pub tags: Vec<TagResponseDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_by: Option<String>,
    pub is_approved: bool,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub translations: Vec<GifTranslationDto>,
}

impl GifResponseDto {
    pub fn from_parts(
        gif: Gif,
        category: Option<CategoryResponseDto>,
        tags: Vec<TagResponseDto>,
        translations: Vec<GifTranslationDto>,
    ) -> Self {
        Self {
            id: gif.id,
            title: gif.title,
            url: gif.url,
            slug: gif.slug,
            category,
            tags,
            submitted_by: gif.submitted_by,
            is_approved: gif.is_approved,
            is_featured: gif.is_featured,
            created_at: gif.created_at,
            translations,
        }
    }
}

impl Localized for GifResponseDto {
    fn base_value(&self) -> &str {
        &self.title
    }

    fn translation_for(&self, lang: &str) -> Option<&str> {
        self.translations
            .iter()
            .find(|t| t.language_code == lang)
            .map(|t| t.title.as_str())
    }
}

/// Query params for the public gif listing
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ListGifsQuery {
    /// Restrict to one category
    pub category: Option<Uuid>,

    /// Restrict to gifs linked to one tag
    pub tag: Option<Uuid>,

    /// Only featured gifs (capped at the featured limit)
    #[serde(default)]
    pub featured: bool,

    /// Case-insensitive title search
    pub q: Option<String>,

    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: i64,

    /// Items per page
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    crate::shared::constants::DEFAULT_PAGE_SIZE
}

/// Request DTO for the public submission form
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitGifDto {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(url(message = "Invalid gif URL"))]
    pub url: String,

    pub category_id: Option<Uuid>,

    #[validate(length(max = 100, message = "Name must not exceed 100 characters"))]
    pub submitted_by: Option<String>,

    #[serde(default)]
    pub tags: Vec<Uuid>,
}

/// Request DTO for the admin save (create or update) operation
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SaveGifDto {
    /// Existing gif id for updates; omitted on create
    pub id: Option<Uuid>,

    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(url(message = "Invalid gif URL"))]
    pub url: String,

    /// URL slug; generated from the title when omitted or blank
    pub slug: Option<String>,

    pub category_id: Option<Uuid>,

    #[serde(default)]
    pub is_featured: bool,

    /// Gifs saved through the admin console are approved implicitly
    #[serde(default = "default_true")]
    pub is_approved: bool,

    #[serde(default)]
    pub tags: Vec<Uuid>,
}

fn default_true() -> bool {
    true
}

/// One translation entry in a replace-translations request
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct GifTranslationEntryDto {
    #[validate(regex(
        path = *crate::shared::validation::LANGUAGE_CODE_REGEX,
        message = "Invalid language code"
    ))]
    pub language_code: String,

    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,
}

/// Request DTO replacing all per-language title overrides of a gif
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ReplaceGifTranslationsDto {
    #[validate(nested)]
    pub translations: Vec<GifTranslationEntryDto>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::localized::resolve_localized;
    use chrono::Utc;

    fn sample_gif() -> GifResponseDto {
        GifResponseDto {
            id: Uuid::nil(),
            title: "Dancing cat".to_string(),
            url: "https://cdn.example.com/cat.gif".to_string(),
            slug: "dancing-cat".to_string(),
            category: None,
            tags: Vec::new(),
            submitted_by: None,
            is_approved: true,
            is_featured: false,
            created_at: Utc::now(),
            translations: vec![GifTranslationDto {
                language_code: "tr".to_string(),
                title: "Dans eden kedi".to_string(),
            }],
        }
    }

    #[test]
    fn title_resolves_through_translations() {
        let gif = sample_gif();
        assert_eq!(resolve_localized(Some(&gif), "tr"), "Dans eden kedi");
        assert_eq!(resolve_localized(Some(&gif), "ru"), "Dancing cat");
    }

    #[test]
    fn admin_save_defaults_to_approved() {
        let dto: SaveGifDto = serde_json::from_str(
            r#"{"title": "Dancing cat", "url": "https://cdn.example.com/cat.gif"}"#,
        )
        .unwrap();

        assert!(dto.is_approved);
        assert!(!dto.is_featured);
        assert!(dto.tags.is_empty());
    }

    #[test]
    fn list_query_defaults() {
        let query: ListGifsQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, crate::shared::constants::DEFAULT_PAGE_SIZE);
        assert!(!query.featured);
    }
}
