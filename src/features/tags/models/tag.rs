use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a tag
#[derive(Debug, Clone, FromRow)]
pub struct Tag {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

/// Per-language name override for a tag
#[derive(Debug, Clone, FromRow)]
pub struct TagTranslation {
    pub id: i64,
    pub tag_id: Uuid,
    pub language_code: String,
    pub name: String,
}
