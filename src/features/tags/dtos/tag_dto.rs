use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::tags::models::{Tag, TagTranslation};
use crate::shared::localized::Localized;

/// Per-language name override carried alongside a tag
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TagTranslationDto {
    pub language_code: String,
    pub name: String,
}

impl From<TagTranslation> for TagTranslationDto {
    fn from(t: TagTranslation) -> Self {
        Self {
            language_code: t.language_code,
            name: t.name,
        }
    }
}

/// Response DTO for a tag
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TagResponseDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub translations: Vec<TagTranslationDto>,
}

impl TagResponseDto {
    pub fn from_parts(t: Tag, translations: Vec<TagTranslationDto>) -> Self {
        Self {
            id: t.id,
            name: t.name,
            slug: t.slug,
            translations,
        }
    }
}

impl Localized for TagResponseDto {
    fn base_value(&self) -> &str {
        &self.name
    }

    fn translation_for(&self, lang: &str) -> Option<&str> {
        self.translations
            .iter()
            .find(|t| t.language_code == lang)
            .map(|t| t.name.as_str())
    }
}

/// Request DTO for creating or renaming a tag
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SaveTagDto {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    /// URL slug; generated from the name when omitted or blank
    pub slug: Option<String>,
}

/// One translation entry in a replace-translations request
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct TagTranslationEntryDto {
    #[validate(regex(
        path = *crate::shared::validation::LANGUAGE_CODE_REGEX,
        message = "Invalid language code"
    ))]
    pub language_code: String,

    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
}

/// Request DTO replacing all per-language name overrides of a tag
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ReplaceTagTranslationsDto {
    #[validate(nested)]
    pub translations: Vec<TagTranslationEntryDto>,
}
