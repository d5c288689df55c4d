use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::settings::models::SiteSettings;

/// Response DTO for the site settings singleton
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SiteSettingsDto {
    pub logo_url: Option<String>,
    pub header_scripts: Option<String>,
    pub footer_scripts: Option<String>,
    /// Per-page browser titles keyed by page identifier
    pub page_titles: Option<serde_json::Value>,
    pub updated_at: DateTime<Utc>,
}

impl From<SiteSettings> for SiteSettingsDto {
    fn from(s: SiteSettings) -> Self {
        Self {
            logo_url: s.logo_url,
            header_scripts: s.header_scripts,
            footer_scripts: s.footer_scripts,
            page_titles: s.page_titles,
            updated_at: s.updated_at,
        }
    }
}

/// Request DTO replacing the site settings wholesale
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateSiteSettingsDto {
    #[validate(url(message = "Invalid logo URL"))]
    pub logo_url: Option<String>,

    pub header_scripts: Option<String>,

    pub footer_scripts: Option<String>,

    pub page_titles: Option<serde_json::Value>,
}
