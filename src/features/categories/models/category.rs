use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a category
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
    pub name: String,
    pub slug: String,
    pub icon: Option<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Per-language name override for a category.
/// At most one row per (category, language), enforced by a unique constraint.
#[derive(Debug, Clone, FromRow)]
pub struct CategoryTranslation {
    pub id: i64,
    pub category_id: Uuid,
    pub language_code: String,
    pub name: String,
}
