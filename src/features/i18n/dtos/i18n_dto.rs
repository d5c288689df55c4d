use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::i18n::models::UiTranslation;

/// Response DTO for one language's UI string bundle
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UiTranslationsDto {
    pub lang_code: String,
    /// Nested key/value tree consumed by the frontend i18n layer
    pub translations: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}

impl From<UiTranslation> for UiTranslationsDto {
    fn from(t: UiTranslation) -> Self {
        Self {
            lang_code: t.lang_code,
            translations: t.translations,
            updated_at: t.updated_at,
        }
    }
}

/// Request DTO replacing a language's bundle wholesale
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReplaceUiTranslationsDto {
    pub translations: serde_json::Value,
}
