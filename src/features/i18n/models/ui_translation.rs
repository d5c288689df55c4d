use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for one language's UI string bundle
#[derive(Debug, Clone, FromRow)]
pub struct UiTranslation {
    pub lang_code: String,
    pub translations: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}
