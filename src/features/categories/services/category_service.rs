use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{
    CategoryResponseDto, CategoryTranslationDto, CreateCategoryDto, HierarchicalCategoryDto,
    ReplaceTranslationsDto, UpdateCategoryDto,
};
use crate::features::categories::models::{Category, CategoryTranslation};
use crate::shared::slug::create_slug;

/// Service for category operations
pub struct CategoryService {
    pool: PgPool,
}

impl CategoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all categories (flat, display order then name) with translations
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, parent_id, name, slug, icon, display_order, created_at, updated_at
            FROM categories
            ORDER BY display_order, name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })?;

        self.attach_translations(categories).await
    }

    /// List categories as a rooted forest for the navigation menu
    pub async fn list_hierarchical(&self) -> Result<Vec<HierarchicalCategoryDto>> {
        let flat = self.list().await?;
        Ok(HierarchicalCategoryDto::build_forest(flat))
    }

    /// Get category by slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<CategoryResponseDto> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, parent_id, name, slug, icon, display_order, created_at, updated_at
            FROM categories
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get category by slug: {:?}", e);
            AppError::Database(e)
        })?;

        let category = category
            .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", slug)))?;

        let translations = self.translations_for(category.id).await?;
        Ok(CategoryResponseDto::from_parts(category, translations))
    }

    /// Create a category; slug derived from the name when not supplied
    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        let slug = resolve_slug(dto.slug.as_deref(), &dto.name)?;

        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, slug, icon, parent_id, display_order)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, parent_id, name, slug, icon, display_order, created_at, updated_at
            "#,
        )
        .bind(&dto.name)
        .bind(&slug)
        .bind(&dto.icon)
        .bind(dto.parent_id)
        .bind(dto.display_order)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict(format!("Category slug '{}' already exists", slug))
            }
            _ => {
                tracing::error!("Failed to create category: {:?}", e);
                AppError::Database(e)
            }
        })?;

        tracing::info!("Category created: {} ({})", category.name, category.id);
        Ok(CategoryResponseDto::from_parts(category, Vec::new()))
    }

    /// Update a category
    pub async fn update(&self, id: Uuid, dto: UpdateCategoryDto) -> Result<CategoryResponseDto> {
        let slug = resolve_slug(dto.slug.as_deref(), &dto.name)?;

        let category = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET name = $2, slug = $3, icon = $4, parent_id = $5, display_order = $6,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, parent_id, name, slug, icon, display_order, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&dto.name)
        .bind(&slug)
        .bind(&dto.icon)
        .bind(dto.parent_id)
        .bind(dto.display_order)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict(format!("Category slug '{}' already exists", slug))
            }
            _ => {
                tracing::error!("Failed to update category: {:?}", e);
                AppError::Database(e)
            }
        })?;

        let category =
            category.ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))?;

        let translations = self.translations_for(category.id).await?;
        Ok(CategoryResponseDto::from_parts(category, translations))
    }

    /// Delete a category. Children are detached by the FK (ON DELETE SET NULL)
    /// and become root categories; gifs keep existing with a null category.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete category: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Category {} not found", id)));
        }

        tracing::info!("Category deleted: {}", id);
        Ok(())
    }

    /// Replace all per-language name overrides for a category
    pub async fn replace_translations(
        &self,
        id: Uuid,
        dto: ReplaceTranslationsDto,
    ) -> Result<Vec<CategoryTranslationDto>> {
        let exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if exists == 0 {
            return Err(AppError::NotFound(format!("Category {} not found", id)));
        }

        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        sqlx::query("DELETE FROM category_translations WHERE category_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        for entry in &dto.translations {
            sqlx::query(
                r#"
                INSERT INTO category_translations (category_id, language_code, name)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(id)
            .bind(&entry.language_code)
            .bind(&entry.name)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert category translation: {:?}", e);
                AppError::Database(e)
            })?;
        }

        tx.commit().await.map_err(AppError::Database)?;

        self.translations_for(id).await
    }

    async fn translations_for(&self, id: Uuid) -> Result<Vec<CategoryTranslationDto>> {
        let rows = sqlx::query_as::<_, CategoryTranslation>(
            r#"
            SELECT id, category_id, language_code, name
            FROM category_translations
            WHERE category_id = $1
            ORDER BY language_code
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(rows.into_iter().map(|t| t.into()).collect())
    }

    /// Join translation rows onto a flat category list with a single query
    async fn attach_translations(
        &self,
        categories: Vec<Category>,
    ) -> Result<Vec<CategoryResponseDto>> {
        let rows = sqlx::query_as::<_, CategoryTranslation>(
            r#"
            SELECT id, category_id, language_code, name
            FROM category_translations
            ORDER BY language_code
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let mut by_category: HashMap<Uuid, Vec<CategoryTranslationDto>> = HashMap::new();
        for row in rows {
            by_category
                .entry(row.category_id)
                .or_default()
                .push(row.into());
        }

        Ok(categories
            .into_iter()
            .map(|c| {
                let translations = by_category.remove(&c.id).unwrap_or_default();
                CategoryResponseDto::from_parts(c, translations)
            })
            .collect())
    }
}

/// Use the explicit slug when present and non-blank, otherwise derive one from
/// the name. A name that slugs to nothing is a validation error.
pub(crate) fn resolve_slug(explicit: Option<&str>, name: &str) -> Result<String> {
    let slug = match explicit {
        Some(s) if !s.trim().is_empty() => s.trim().to_string(),
        _ => create_slug(name),
    };

    if !crate::shared::validation::SLUG_REGEX.is_match(&slug) {
        return Err(AppError::Validation(format!("Invalid slug '{}'", slug)));
    }

    Ok(slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_slug_wins_over_derived() {
        assert_eq!(resolve_slug(Some("custom"), "Funny Cats").unwrap(), "custom");
    }

    #[test]
    fn blank_slug_falls_back_to_name() {
        assert_eq!(resolve_slug(Some("  "), "Funny Cats").unwrap(), "funny-cats");
        assert_eq!(resolve_slug(None, "Funny Cats").unwrap(), "funny-cats");
    }

    #[test]
    fn unsluggable_name_is_rejected() {
        assert!(resolve_slug(None, "!!!").is_err());
    }

    #[test]
    fn invalid_explicit_slug_is_rejected() {
        assert!(resolve_slug(Some("Not A Slug"), "name").is_err());
    }
}
