use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::categories::models::Category;
use crate::features::gifs::dtos::{
    GifResponseDto, GifTranslationDto, ListGifsQuery, ReplaceGifTranslationsDto, SaveGifDto,
    SubmitGifDto,
};
use crate::features::gifs::models::{Gif, GifTagRow, GifTranslation};
use crate::features::tags::dtos::TagResponseDto;
use crate::features::tags::models::Tag;
use crate::shared::constants::FEATURED_GIF_LIMIT;
use crate::shared::slug::create_slug;
use crate::shared::types::PaginationQuery;
use crate::shared::validation::SLUG_REGEX;

const GIF_COLUMNS: &str = "id, title, url, slug, category_id, submitted_by, is_approved, \
                           is_featured, created_at, updated_at";

/// Service for gif listing, submission and moderation
pub struct GifService {
    pool: PgPool,
}

impl GifService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List approved gifs, newest first, with optional category/tag/featured/
    /// search filters. Returns the page plus the total match count.
    pub async fn list(&self, query: ListGifsQuery) -> Result<(Vec<GifResponseDto>, i64)> {
        let pagination = PaginationQuery {
            page: query.page,
            page_size: query.page_size,
        };
        let mut limit = pagination.limit();
        if query.featured {
            limit = limit.min(FEATURED_GIF_LIMIT);
        }

        let filter = r#"
            FROM gifs g
            WHERE g.is_approved = TRUE
              AND ($1::uuid IS NULL OR g.category_id = $1)
              AND ($2::uuid IS NULL OR EXISTS (
                    SELECT 1 FROM gif_tags gt WHERE gt.gif_id = g.id AND gt.tag_id = $2))
              AND ($3::boolean IS FALSE OR g.is_featured = TRUE)
              AND ($4::text IS NULL OR g.title ILIKE '%' || $4 || '%')
        "#;

        let total: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) {}", filter))
            .bind(query.category)
            .bind(query.tag)
            .bind(query.featured)
            .bind(&query.q)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count gifs: {:?}", e);
                AppError::Database(e)
            })?;

        let gifs = sqlx::query_as::<_, Gif>(&format!(
            "SELECT g.* {} ORDER BY g.created_at DESC OFFSET $5 LIMIT $6",
            filter
        ))
        .bind(query.category)
        .bind(query.tag)
        .bind(query.featured)
        .bind(&query.q)
        .bind(pagination.offset())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list gifs: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((self.hydrate(gifs).await?, total))
    }

    /// Get an approved gif by slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<GifResponseDto> {
        let gif = sqlx::query_as::<_, Gif>(&format!(
            "SELECT {} FROM gifs WHERE slug = $1 AND is_approved = TRUE",
            GIF_COLUMNS
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get gif by slug: {:?}", e);
            AppError::Database(e)
        })?;

        let gif = gif.ok_or_else(|| AppError::NotFound(format!("Gif '{}' not found", slug)))?;

        self.hydrate(vec![gif])
            .await?
            .pop()
            .ok_or_else(|| AppError::Internal("Gif hydration returned nothing".to_string()))
    }

    /// Public submission: lands unapproved and waits for moderation
    pub async fn submit(&self, dto: SubmitGifDto) -> Result<GifResponseDto> {
        let slug = self.unique_slug(&create_slug(&dto.title)).await?;

        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let gif = sqlx::query_as::<_, Gif>(&format!(
            r#"
            INSERT INTO gifs (title, url, slug, category_id, submitted_by, is_approved)
            VALUES ($1, $2, $3, $4, $5, FALSE)
            RETURNING {}
            "#,
            GIF_COLUMNS
        ))
        .bind(&dto.title)
        .bind(&dto.url)
        .bind(&slug)
        .bind(dto.category_id)
        .bind(&dto.submitted_by)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                AppError::Validation("Unknown category".to_string())
            }
            _ => {
                tracing::error!("Failed to insert gif submission: {:?}", e);
                AppError::Database(e)
            }
        })?;

        link_tags(&mut tx, gif.id, &dto.tags).await?;

        tx.commit().await.map_err(AppError::Database)?;

        tracing::info!("Gif submitted for review: {} ({})", gif.title, gif.id);

        self.hydrate(vec![gif])
            .await?
            .pop()
            .ok_or_else(|| AppError::Internal("Gif hydration returned nothing".to_string()))
    }

    /// List gifs awaiting moderation, newest first
    pub async fn list_pending(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<GifResponseDto>, i64)> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM gifs WHERE is_approved = FALSE")
                .fetch_one(&self.pool)
                .await
                .map_err(AppError::Database)?;

        let gifs = sqlx::query_as::<_, Gif>(&format!(
            r#"
            SELECT {} FROM gifs
            WHERE is_approved = FALSE
            ORDER BY created_at DESC
            OFFSET $1 LIMIT $2
            "#,
            GIF_COLUMNS
        ))
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list pending gifs: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((self.hydrate(gifs).await?, total))
    }

    /// Admin save: upsert the gif row, then clear and re-insert its tag links
    /// inside one transaction.
    pub async fn save(&self, dto: SaveGifDto) -> Result<GifResponseDto> {
        let slug = match dto.slug.as_deref() {
            Some(s) if !s.trim().is_empty() => {
                let s = s.trim().to_string();
                if !SLUG_REGEX.is_match(&s) {
                    return Err(AppError::Validation(format!("Invalid slug '{}'", s)));
                }
                s
            }
            _ => create_slug(&dto.title),
        };
        if slug.is_empty() {
            return Err(AppError::Validation(
                "Title produces an empty slug".to_string(),
            ));
        }

        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let gif = match dto.id {
            Some(id) => sqlx::query_as::<_, Gif>(&format!(
                r#"
                UPDATE gifs
                SET title = $2, url = $3, slug = $4, category_id = $5,
                    is_featured = $6, is_approved = $7, updated_at = NOW()
                WHERE id = $1
                RETURNING {}
                "#,
                GIF_COLUMNS
            ))
            .bind(id)
            .bind(&dto.title)
            .bind(&dto.url)
            .bind(&slug)
            .bind(dto.category_id)
            .bind(dto.is_featured)
            .bind(dto.is_approved)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_slug_conflict(&slug))?
            .ok_or_else(|| AppError::NotFound(format!("Gif {} not found", id)))?,
            None => sqlx::query_as::<_, Gif>(&format!(
                r#"
                INSERT INTO gifs (title, url, slug, category_id, is_featured, is_approved)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING {}
                "#,
                GIF_COLUMNS
            ))
            .bind(&dto.title)
            .bind(&dto.url)
            .bind(&slug)
            .bind(dto.category_id)
            .bind(dto.is_featured)
            .bind(dto.is_approved)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_slug_conflict(&slug))?,
        };

        // Re-link tags: clear everything, then insert the new set
        sqlx::query("DELETE FROM gif_tags WHERE gif_id = $1")
            .bind(gif.id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;
        link_tags(&mut tx, gif.id, &dto.tags).await?;

        tx.commit().await.map_err(AppError::Database)?;

        tracing::info!("Gif saved: {} ({})", gif.title, gif.id);

        self.hydrate(vec![gif])
            .await?
            .pop()
            .ok_or_else(|| AppError::Internal("Gif hydration returned nothing".to_string()))
    }

    /// Approve a pending gif
    pub async fn approve(&self, id: Uuid) -> Result<GifResponseDto> {
        let gif = sqlx::query_as::<_, Gif>(&format!(
            "UPDATE gifs SET is_approved = TRUE, updated_at = NOW() WHERE id = $1 RETURNING {}",
            GIF_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound(format!("Gif {} not found", id)))?;

        tracing::info!("Gif approved: {} ({})", gif.title, gif.id);

        self.hydrate(vec![gif])
            .await?
            .pop()
            .ok_or_else(|| AppError::Internal("Gif hydration returned nothing".to_string()))
    }

    /// Reject a pending gif. Rejection deletes the record; tag links go with
    /// it via the FK cascade.
    pub async fn reject(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM gifs WHERE id = $1 AND is_approved = FALSE")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Pending gif {} not found", id)));
        }

        tracing::info!("Gif rejected and removed: {}", id);
        Ok(())
    }

    /// Delete a gif regardless of approval state
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM gifs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Gif {} not found", id)));
        }

        tracing::info!("Gif deleted: {}", id);
        Ok(())
    }

    /// Replace all per-language title overrides for a gif
    pub async fn replace_translations(
        &self,
        id: Uuid,
        dto: ReplaceGifTranslationsDto,
    ) -> Result<Vec<GifTranslationDto>> {
        let exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM gifs WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if exists == 0 {
            return Err(AppError::NotFound(format!("Gif {} not found", id)));
        }

        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        sqlx::query("DELETE FROM gif_translations WHERE gif_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        for entry in &dto.translations {
            sqlx::query(
                "INSERT INTO gif_translations (gif_id, language_code, title) VALUES ($1, $2, $3)",
            )
            .bind(id)
            .bind(&entry.language_code)
            .bind(&entry.title)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;
        }

        tx.commit().await.map_err(AppError::Database)?;

        let rows = sqlx::query_as::<_, GifTranslation>(
            r#"
            SELECT id, gif_id, language_code, title
            FROM gif_translations
            WHERE gif_id = $1
            ORDER BY language_code
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(rows.into_iter().map(|t| t.into()).collect())
    }

    /// Resolve categories, tags and translations for a batch of gif rows,
    /// preserving input order.
    async fn hydrate(&self, gifs: Vec<Gif>) -> Result<Vec<GifResponseDto>> {
        if gifs.is_empty() {
            return Ok(Vec::new());
        }

        let gif_ids: Vec<Uuid> = gifs.iter().map(|g| g.id).collect();
        let category_ids: Vec<Uuid> = gifs.iter().filter_map(|g| g.category_id).collect();

        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, parent_id, name, slug, icon, display_order, created_at, updated_at
            FROM categories
            WHERE id = ANY($1)
            "#,
        )
        .bind(&category_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let category_map: HashMap<Uuid, CategoryResponseDto> = categories
            .into_iter()
            .map(|c| (c.id, CategoryResponseDto::from_parts(c, Vec::new())))
            .collect();

        let tag_rows = sqlx::query_as::<_, GifTagRow>(
            r#"
            SELECT gt.gif_id, t.id AS tag_id, t.name, t.slug, t.created_at
            FROM gif_tags gt
            JOIN tags t ON t.id = gt.tag_id
            WHERE gt.gif_id = ANY($1)
            ORDER BY t.name
            "#,
        )
        .bind(&gif_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let mut tags_by_gif: HashMap<Uuid, Vec<TagResponseDto>> = HashMap::new();
        for row in tag_rows {
            let tag = Tag {
                id: row.tag_id,
                name: row.name,
                slug: row.slug,
                created_at: row.created_at,
            };
            tags_by_gif
                .entry(row.gif_id)
                .or_default()
                .push(TagResponseDto::from_parts(tag, Vec::new()));
        }

        let translation_rows = sqlx::query_as::<_, GifTranslation>(
            r#"
            SELECT id, gif_id, language_code, title
            FROM gif_translations
            WHERE gif_id = ANY($1)
            ORDER BY language_code
            "#,
        )
        .bind(&gif_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let mut translations_by_gif: HashMap<Uuid, Vec<GifTranslationDto>> = HashMap::new();
        for row in translation_rows {
            translations_by_gif
                .entry(row.gif_id)
                .or_default()
                .push(row.into());
        }

        Ok(gifs
            .into_iter()
            .map(|gif| {
                let category = gif.category_id.and_then(|id| category_map.get(&id).cloned());
                let tags = tags_by_gif.remove(&gif.id).unwrap_or_default();
                let translations = translations_by_gif.remove(&gif.id).unwrap_or_default();
                GifResponseDto::from_parts(gif, category, tags, translations)
            })
            .collect())
    }

    /// Public submissions must not fail on a title someone already used:
    /// append a short random suffix until the slug is free.
    async fn unique_slug(&self, base: &str) -> Result<String> {
        let base = if base.is_empty() { "gif" } else { base };

        let mut candidate = base.to_string();
        loop {
            let taken: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM gifs WHERE slug = $1")
                .bind(&candidate)
                .fetch_one(&self.pool)
                .await
                .map_err(AppError::Database)?;

            if taken == 0 {
                return Ok(candidate);
            }

            let suffix = &Uuid::new_v4().simple().to_string()[..6];
            candidate = format!("{}-{}", base, suffix);
        }
    }
}

async fn link_tags(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    gif_id: Uuid,
    tag_ids: &[Uuid],
) -> Result<()> {
    for tag_id in tag_ids {
        sqlx::query("INSERT INTO gif_tags (gif_id, tag_id) VALUES ($1, $2)")
            .bind(gif_id)
            .bind(tag_id)
            .execute(&mut **tx)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                    AppError::Validation(format!("Unknown tag {}", tag_id))
                }
                _ => {
                    tracing::error!("Failed to link tag {} to gif {}: {:?}", tag_id, gif_id, e);
                    AppError::Database(e)
                }
            })?;
    }
    Ok(())
}

fn map_slug_conflict(slug: &str) -> impl FnOnce(sqlx::Error) -> AppError + '_ {
    move |e| match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            AppError::Conflict(format!("Gif slug '{}' already exists", slug))
        }
        _ => {
            tracing::error!("Failed to save gif: {:?}", e);
            AppError::Database(e)
        }
    }
}
