use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the singleton site settings row
#[derive(Debug, Clone, FromRow)]
pub struct SiteSettings {
    pub id: i32,
    pub logo_url: Option<String>,
    pub header_scripts: Option<String>,
    pub footer_scripts: Option<String>,
    pub page_titles: Option<serde_json::Value>,
    pub updated_at: DateTime<Utc>,
}
