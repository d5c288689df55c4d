use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::contact::dtos::{ContactSubmissionDto, CreateContactSubmissionDto};
use crate::features::contact::models::ContactSubmission;

/// Service for contact form submissions
pub struct ContactService {
    pool: PgPool,
}

impl ContactService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Store a submission from the public contact form
    pub async fn submit(&self, dto: CreateContactSubmissionDto) -> Result<ContactSubmissionDto> {
        let submission = sqlx::query_as::<_, ContactSubmission>(
            r#"
            INSERT INTO contact_submissions (name, email, message)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, message, created_at
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&dto.message)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to store contact submission: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Contact submission received: {}", submission.id);
        Ok(submission.into())
    }

    /// List submissions for the admin inbox, newest first
    pub async fn list(&self, offset: i64, limit: i64) -> Result<(Vec<ContactSubmissionDto>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact_submissions")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        let submissions = sqlx::query_as::<_, ContactSubmission>(
            r#"
            SELECT id, name, email, message, created_at
            FROM contact_submissions
            ORDER BY created_at DESC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list contact submissions: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((submissions.into_iter().map(|s| s.into()).collect(), total))
    }

    /// Delete a submission once handled
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM contact_submissions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Contact submission {} not found",
                id
            )));
        }

        Ok(())
    }
}
