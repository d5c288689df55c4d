use sqlx::FromRow;

/// Database model for one language's version of a static page section
#[derive(Debug, Clone, FromRow)]
pub struct ContentSection {
    pub id: i64,
    pub section_key: String,
    pub language_code: String,
    pub title: Option<String>,
    pub content: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}
