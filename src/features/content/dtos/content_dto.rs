use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::content::models::ContentSection;

/// Query params for localized content reads
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ContentQuery {
    /// Requested language; defaults to "en"
    pub lang: Option<String>,
}

/// Response DTO for a static page section
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContentSectionDto {
    pub section_key: String,
    pub language_code: String,
    pub title: Option<String>,
    pub content: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

impl From<ContentSection> for ContentSectionDto {
    fn from(s: ContentSection) -> Self {
        Self {
            section_key: s.section_key,
            language_code: s.language_code,
            title: s.title,
            content: s.content,
            meta_title: s.meta_title,
            meta_description: s.meta_description,
        }
    }
}

/// Request DTO for the admin content upsert
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpsertContentSectionDto {
    #[validate(length(max = 255, message = "Title must not exceed 255 characters"))]
    pub title: Option<String>,

    pub content: Option<String>,

    #[validate(length(max = 255, message = "Meta title must not exceed 255 characters"))]
    pub meta_title: Option<String>,

    #[validate(length(max = 500, message = "Meta description must not exceed 500 characters"))]
    pub meta_description: Option<String>,
}
