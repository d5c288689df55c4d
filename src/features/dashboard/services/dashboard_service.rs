use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::dashboard::dtos::DashboardStatsDto;

/// Service for the admin dashboard counters
pub struct DashboardService {
    pool: PgPool,
}

#[derive(Debug, sqlx::FromRow)]
struct GifCounts {
    total: i64,
    approved: i64,
    pending: i64,
}

impl DashboardService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Collect the counts shown on the dashboard landing page
    pub async fn get_stats(&self) -> Result<DashboardStatsDto> {
        let gifs = sqlx::query_as::<_, GifCounts>(
            r#"
            SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE is_approved) AS approved,
                COUNT(*) FILTER (WHERE NOT is_approved) AS pending
            FROM gifs
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count gifs: {:?}", e);
            AppError::Database(e)
        })?;

        let categories = self.count("SELECT COUNT(*) FROM categories").await?;
        let tags = self.count("SELECT COUNT(*) FROM tags").await?;
        let contact_submissions = self.count("SELECT COUNT(*) FROM contact_submissions").await?;

        Ok(DashboardStatsDto {
            total_gifs: gifs.total,
            approved_gifs: gifs.approved,
            pending_gifs: gifs.pending,
            categories,
            tags,
            contact_submissions,
        })
    }

    async fn count(&self, query: &str) -> Result<i64> {
        sqlx::query_scalar(query)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to load dashboard count: {:?}", e);
                AppError::Database(e)
            })
    }
}
