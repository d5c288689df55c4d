use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::content::dtos::{ContentSectionDto, UpsertContentSectionDto};
use crate::features::content::models::ContentSection;
use crate::shared::constants::DEFAULT_LANGUAGE;

const SECTION_COLUMNS: &str =
    "id, section_key, language_code, title, content, meta_title, meta_description";

/// Service for localized static page content
pub struct ContentService {
    pool: PgPool,
}

impl ContentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a section in the requested language, falling back to the default
    /// language row when the requested one does not exist.
    pub async fn get(&self, section_key: &str, lang: &str) -> Result<ContentSectionDto> {
        if let Some(section) = self.find(section_key, lang).await? {
            return Ok(section.into());
        }

        if lang != DEFAULT_LANGUAGE {
            if let Some(section) = self.find(section_key, DEFAULT_LANGUAGE).await? {
                return Ok(section.into());
            }
        }

        Err(AppError::NotFound(format!(
            "Content section '{}' not found",
            section_key
        )))
    }

    /// Upsert one language's version of a section
    pub async fn upsert(
        &self,
        section_key: &str,
        lang: &str,
        dto: UpsertContentSectionDto,
    ) -> Result<ContentSectionDto> {
        let section = sqlx::query_as::<_, ContentSection>(&format!(
            r#"
            INSERT INTO content_sections
                (section_key, language_code, title, content, meta_title, meta_description)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (section_key, language_code) DO UPDATE SET
                title = EXCLUDED.title,
                content = EXCLUDED.content,
                meta_title = EXCLUDED.meta_title,
                meta_description = EXCLUDED.meta_description
            RETURNING {}
            "#,
            SECTION_COLUMNS
        ))
        .bind(section_key)
        .bind(lang)
        .bind(&dto.title)
        .bind(&dto.content)
        .bind(&dto.meta_title)
        .bind(&dto.meta_description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to upsert content section: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Content section saved: {} ({})", section_key, lang);
        Ok(section.into())
    }

    async fn find(&self, section_key: &str, lang: &str) -> Result<Option<ContentSection>> {
        sqlx::query_as::<_, ContentSection>(&format!(
            "SELECT {} FROM content_sections WHERE section_key = $1 AND language_code = $2",
            SECTION_COLUMNS
        ))
        .bind(section_key)
        .bind(lang)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to read content section: {:?}", e);
            AppError::Database(e)
        })
    }
}
