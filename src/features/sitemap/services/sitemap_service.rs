use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::core::error::{AppError, Result};

const STATIC_PAGES: &[&str] = &[
    "/",
    "/about",
    "/contact",
    "/advertise",
    "/privacy-policy",
    "/terms-of-service",
    "/submit",
    "/search",
];

#[derive(Debug, FromRow)]
struct SlugRow {
    slug: String,
    created_at: DateTime<Utc>,
}

/// Service assembling the XML sitemap from live data
pub struct SitemapService {
    pool: PgPool,
    site_url: String,
}

impl SitemapService {
    pub fn new(pool: PgPool, site_url: String) -> Self {
        Self { pool, site_url }
    }

    /// Build the full sitemap: static pages, approved gifs, categories, tags
    pub async fn generate(&self) -> Result<String> {
        let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");

        let today = Utc::now().date_naive();
        for page in STATIC_PAGES {
            let priority = if *page == "/" { "1.0" } else { "0.8" };
            push_url(&mut xml, &format!("{}{}", self.site_url, page), &today.to_string(), priority);
        }

        let gifs = self
            .fetch("SELECT slug, created_at FROM gifs WHERE is_approved = TRUE ORDER BY created_at DESC")
            .await?;
        for row in gifs {
            push_url(
                &mut xml,
                &format!("{}/gif/{}", self.site_url, row.slug),
                &row.created_at.date_naive().to_string(),
                "0.7",
            );
        }

        let categories = self
            .fetch("SELECT slug, created_at FROM categories ORDER BY created_at")
            .await?;
        for row in categories {
            push_url(
                &mut xml,
                &format!("{}/category/{}", self.site_url, row.slug),
                &row.created_at.date_naive().to_string(),
                "0.6",
            );
        }

        let tags = self
            .fetch("SELECT slug, created_at FROM tags ORDER BY created_at")
            .await?;
        for row in tags {
            push_url(
                &mut xml,
                &format!("{}/tag/{}", self.site_url, row.slug),
                &row.created_at.date_naive().to_string(),
                "0.5",
            );
        }

        xml.push_str("</urlset>");
        Ok(xml)
    }

    async fn fetch(&self, query: &str) -> Result<Vec<SlugRow>> {
        sqlx::query_as::<_, SlugRow>(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to load sitemap rows: {:?}", e);
                AppError::Database(e)
            })
    }
}

fn push_url(xml: &mut String, loc: &str, lastmod: &str, priority: &str) {
    xml.push_str("  <url>\n");
    xml.push_str(&format!("    <loc>{}</loc>\n", loc));
    xml.push_str(&format!("    <lastmod>{}</lastmod>\n", lastmod));
    xml.push_str(&format!("    <priority>{}</priority>\n", priority));
    xml.push_str("  </url>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_entries_are_well_formed() {
        let mut xml = String::new();
        push_url(&mut xml, "https://gifhub.app/", "2025-06-01", "1.0");

        assert!(xml.contains("<loc>https://gifhub.app/</loc>"));
        assert!(xml.contains("<lastmod>2025-06-01</lastmod>"));
        assert!(xml.contains("<priority>1.0</priority>"));
    }
}
