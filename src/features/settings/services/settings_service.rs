use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::settings::dtos::{SiteSettingsDto, UpdateSiteSettingsDto};
use crate::features::settings::models::SiteSettings;

const SETTINGS_COLUMNS: &str =
    "id, logo_url, header_scripts, footer_scripts, page_titles, updated_at";

/// Service for the site settings singleton
pub struct SettingsService {
    pool: PgPool,
}

impl SettingsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Read the settings row, creating the empty singleton if missing
    pub async fn get(&self) -> Result<SiteSettingsDto> {
        let settings = sqlx::query_as::<_, SiteSettings>(&format!(
            r#"
            INSERT INTO site_settings (id) VALUES (1)
            ON CONFLICT (id) DO UPDATE SET id = site_settings.id
            RETURNING {}
            "#,
            SETTINGS_COLUMNS
        ))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to read site settings: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(settings.into())
    }

    /// Replace the settings wholesale
    pub async fn update(&self, dto: UpdateSiteSettingsDto) -> Result<SiteSettingsDto> {
        let settings = sqlx::query_as::<_, SiteSettings>(&format!(
            r#"
            INSERT INTO site_settings (id, logo_url, header_scripts, footer_scripts, page_titles)
            VALUES (1, $1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET
                logo_url = EXCLUDED.logo_url,
                header_scripts = EXCLUDED.header_scripts,
                footer_scripts = EXCLUDED.footer_scripts,
                page_titles = EXCLUDED.page_titles,
                updated_at = NOW()
            RETURNING {}
            "#,
            SETTINGS_COLUMNS
        ))
        .bind(&dto.logo_url)
        .bind(&dto.header_scripts)
        .bind(&dto.footer_scripts)
        .bind(&dto.page_titles)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update site settings: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Site settings updated");
        Ok(settings.into())
    }
}
