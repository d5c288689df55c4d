use std::time::Duration;

use crate::core::config::GiphyConfig;
use crate::core::error::{AppError, Result};

const SEARCH_LIMIT: u32 = 24;

/// Server-side proxy to the Giphy search API, keeping the key off the client
pub struct GiphyService {
    client: reqwest::Client,
    config: GiphyConfig,
}

impl GiphyService {
    pub fn new(config: GiphyConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Search Giphy and return the raw result array
    pub async fn search(&self, query: &str) -> Result<serde_json::Value> {
        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            AppError::ExternalServiceError("Giphy API key is not configured".to_string())
        })?;

        let response = self
            .client
            .get(&self.config.api_url)
            .query(&[
                ("api_key", api_key),
                ("q", query),
                ("limit", &SEARCH_LIMIT.to_string()),
                ("rating", "g"),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Giphy request failed: {:?}", e);
                AppError::ExternalServiceError("Giphy request failed".to_string())
            })?;

        if !response.status().is_success() {
            tracing::error!("Giphy returned status {}", response.status());
            return Err(AppError::ExternalServiceError(format!(
                "Giphy returned status {}",
                response.status()
            )));
        }

        let body: serde_json::Value = response.json().await.map_err(|e| {
            tracing::error!("Failed to decode Giphy response: {:?}", e);
            AppError::ExternalServiceError("Malformed Giphy response".to_string())
        })?;

        Ok(body
            .get("data")
            .cloned()
            .unwrap_or(serde_json::Value::Array(Vec::new())))
    }
}
