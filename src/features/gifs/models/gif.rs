use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a gif
#[derive(Debug, Clone, FromRow)]
pub struct Gif {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub slug: String,
    pub category_id: Option<Uuid>,
    pub submitted_by: Option<String>,
    pub is_approved: bool,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Per-language title override for a gif
#[derive(Debug, Clone, FromRow)]
pub struct GifTranslation {
    pub id: i64,
    pub gif_id: Uuid,
    pub language_code: String,
    pub title: String,
}

/// Tag row joined through gif_tags, keyed back to its gif
#[derive(Debug, Clone, FromRow)]
pub struct GifTagRow {
    pub gif_id: Uuid,
    pub tag_id: Uuid,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}
