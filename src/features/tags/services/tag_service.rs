use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::tags::dtos::{
    ReplaceTagTranslationsDto, SaveTagDto, TagResponseDto, TagTranslationDto,
};
use crate::features::tags::models::{Tag, TagTranslation};
use crate::shared::slug::create_slug;
use crate::shared::validation::SLUG_REGEX;

/// Service for tag operations
pub struct TagService {
    pool: PgPool,
}

impl TagService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all tags ordered by name, with translations
    pub async fn list(&self) -> Result<Vec<TagResponseDto>> {
        let tags = sqlx::query_as::<_, Tag>(
            "SELECT id, name, slug, created_at FROM tags ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list tags: {:?}", e);
            AppError::Database(e)
        })?;

        let rows = sqlx::query_as::<_, TagTranslation>(
            r#"
            SELECT id, tag_id, language_code, name
            FROM tag_translations
            ORDER BY language_code
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let mut by_tag: HashMap<Uuid, Vec<TagTranslationDto>> = HashMap::new();
        for row in rows {
            by_tag.entry(row.tag_id).or_default().push(row.into());
        }

        Ok(tags
            .into_iter()
            .map(|t| {
                let translations = by_tag.remove(&t.id).unwrap_or_default();
                TagResponseDto::from_parts(t, translations)
            })
            .collect())
    }

    /// Get tag by slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<TagResponseDto> {
        let tag = sqlx::query_as::<_, Tag>(
            "SELECT id, name, slug, created_at FROM tags WHERE slug = $1",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get tag by slug: {:?}", e);
            AppError::Database(e)
        })?;

        let tag = tag.ok_or_else(|| AppError::NotFound(format!("Tag '{}' not found", slug)))?;
        let translations = self.translations_for(tag.id).await?;
        Ok(TagResponseDto::from_parts(tag, translations))
    }

    /// Create a tag
    pub async fn create(&self, dto: SaveTagDto) -> Result<TagResponseDto> {
        let slug = self.resolve_slug(&dto)?;

        let tag = sqlx::query_as::<_, Tag>(
            r#"
            INSERT INTO tags (name, slug)
            VALUES ($1, $2)
            RETURNING id, name, slug, created_at
            "#,
        )
        .bind(&dto.name)
        .bind(&slug)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict(format!("Tag slug '{}' already exists", slug))
            }
            _ => {
                tracing::error!("Failed to create tag: {:?}", e);
                AppError::Database(e)
            }
        })?;

        tracing::info!("Tag created: {} ({})", tag.name, tag.id);
        Ok(TagResponseDto::from_parts(tag, Vec::new()))
    }

    /// Rename a tag
    pub async fn update(&self, id: Uuid, dto: SaveTagDto) -> Result<TagResponseDto> {
        let slug = self.resolve_slug(&dto)?;

        let tag = sqlx::query_as::<_, Tag>(
            r#"
            UPDATE tags SET name = $2, slug = $3
            WHERE id = $1
            RETURNING id, name, slug, created_at
            "#,
        )
        .bind(id)
        .bind(&dto.name)
        .bind(&slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict(format!("Tag slug '{}' already exists", slug))
            }
            _ => {
                tracing::error!("Failed to update tag: {:?}", e);
                AppError::Database(e)
            }
        })?;

        let tag = tag.ok_or_else(|| AppError::NotFound(format!("Tag {} not found", id)))?;
        let translations = self.translations_for(tag.id).await?;
        Ok(TagResponseDto::from_parts(tag, translations))
    }

    /// Delete a tag; gif links go with it via the FK cascade
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM tags WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete tag: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Tag {} not found", id)));
        }

        tracing::info!("Tag deleted: {}", id);
        Ok(())
    }

    /// Replace all per-language name overrides for a tag
    pub async fn replace_translations(
        &self,
        id: Uuid,
        dto: ReplaceTagTranslationsDto,
    ) -> Result<Vec<TagTranslationDto>> {
        let exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tags WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if exists == 0 {
            return Err(AppError::NotFound(format!("Tag {} not found", id)));
        }

        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        sqlx::query("DELETE FROM tag_translations WHERE tag_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        for entry in &dto.translations {
            sqlx::query(
                "INSERT INTO tag_translations (tag_id, language_code, name) VALUES ($1, $2, $3)",
            )
            .bind(id)
            .bind(&entry.language_code)
            .bind(&entry.name)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert tag translation: {:?}", e);
                AppError::Database(e)
            })?;
        }

        tx.commit().await.map_err(AppError::Database)?;

        self.translations_for(id).await
    }

    async fn translations_for(&self, id: Uuid) -> Result<Vec<TagTranslationDto>> {
        let rows = sqlx::query_as::<_, TagTranslation>(
            r#"
            SELECT id, tag_id, language_code, name
            FROM tag_translations
            WHERE tag_id = $1
            ORDER BY language_code
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(rows.into_iter().map(|t| t.into()).collect())
    }

    fn resolve_slug(&self, dto: &SaveTagDto) -> Result<String> {
        let slug = match dto.slug.as_deref() {
            Some(s) if !s.trim().is_empty() => s.trim().to_string(),
            _ => create_slug(&dto.name),
        };

        if !SLUG_REGEX.is_match(&slug) {
            return Err(AppError::Validation(format!("Invalid slug '{}'", slug)));
        }

        Ok(slug)
    }
}
