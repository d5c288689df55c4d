use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::i18n::dtos::{ReplaceUiTranslationsDto, UiTranslationsDto};
use crate::features::i18n::models::UiTranslation;
use crate::shared::constants::SUPPORTED_LANGUAGES;

/// Compiled-in default bundles, one per supported language
fn default_bundle(lang: &str) -> Option<&'static str> {
    match lang {
        "en" => Some(include_str!("../../../../locales/en.json")),
        "tr" => Some(include_str!("../../../../locales/tr.json")),
        "ru" => Some(include_str!("../../../../locales/ru.json")),
        "az" => Some(include_str!("../../../../locales/az.json")),
        _ => None,
    }
}

/// Service for UI string bundles
pub struct I18nService {
    pool: PgPool,
}

impl I18nService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get the stored bundle for a supported language
    pub async fn get(&self, lang: &str) -> Result<UiTranslationsDto> {
        if !SUPPORTED_LANGUAGES.contains(&lang) {
            return Err(AppError::NotFound(format!(
                "Unsupported language '{}'",
                lang
            )));
        }

        let row = sqlx::query_as::<_, UiTranslation>(
            "SELECT lang_code, translations, updated_at FROM ui_translations WHERE lang_code = $1",
        )
        .bind(lang)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to read UI translations: {:?}", e);
            AppError::Database(e)
        })?;

        let row = row.ok_or_else(|| {
            AppError::NotFound(format!("No UI translations stored for '{}'", lang))
        })?;

        Ok(row.into())
    }

    /// Replace a language's bundle wholesale
    pub async fn replace(
        &self,
        lang: &str,
        dto: ReplaceUiTranslationsDto,
    ) -> Result<UiTranslationsDto> {
        if !SUPPORTED_LANGUAGES.contains(&lang) {
            return Err(AppError::Validation(format!(
                "Unsupported language '{}'",
                lang
            )));
        }
        if !dto.translations.is_object() {
            return Err(AppError::Validation(
                "Translations must be a JSON object".to_string(),
            ));
        }

        let row = self.upsert(lang, &dto.translations).await?;
        tracing::info!("UI translations replaced for '{}'", lang);
        Ok(row.into())
    }

    /// Startup seeding: insert the compiled-in default bundle for any
    /// supported language with no stored row, and run a one-time repair of
    /// wrapping-quote artifacts in existing rows.
    pub async fn seed_defaults(&self) -> Result<()> {
        for lang in SUPPORTED_LANGUAGES {
            let existing = sqlx::query_as::<_, UiTranslation>(
                "SELECT lang_code, translations, updated_at FROM ui_translations WHERE lang_code = $1",
            )
            .bind(lang)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

            match existing {
                None => {
                    let raw = default_bundle(lang).ok_or_else(|| {
                        AppError::Internal(format!("No default bundle for '{}'", lang))
                    })?;
                    let bundle: serde_json::Value = serde_json::from_str(raw).map_err(|e| {
                        AppError::Internal(format!("Invalid default bundle for '{}': {}", lang, e))
                    })?;
                    self.upsert(lang, &bundle).await?;
                    tracing::info!("Seeded default UI translations for '{}'", lang);
                }
                Some(mut row) => {
                    if strip_quote_artifacts(&mut row.translations) {
                        self.upsert(lang, &row.translations).await?;
                        tracing::info!("Repaired quoted UI translations for '{}'", lang);
                    }
                }
            }
        }
        Ok(())
    }

    async fn upsert(&self, lang: &str, bundle: &serde_json::Value) -> Result<UiTranslation> {
        sqlx::query_as::<_, UiTranslation>(
            r#"
            INSERT INTO ui_translations (lang_code, translations)
            VALUES ($1, $2)
            ON CONFLICT (lang_code) DO UPDATE SET
                translations = EXCLUDED.translations,
                updated_at = NOW()
            RETURNING lang_code, translations, updated_at
            "#,
        )
        .bind(lang)
        .bind(bundle)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to upsert UI translations: {:?}", e);
            AppError::Database(e)
        })
    }
}

/// Strip literal wrapping quotes from string leaves, e.g. `"\"Home\""`
/// becomes `Home`. Returns true when anything changed.
fn strip_quote_artifacts(value: &mut serde_json::Value) -> bool {
    match value {
        serde_json::Value::String(s) => {
            if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
                *s = s[1..s.len() - 1].to_string();
                true
            } else {
                false
            }
        }
        serde_json::Value::Object(map) => {
            let mut changed = false;
            for v in map.values_mut() {
                changed |= strip_quote_artifacts(v);
            }
            changed
        }
        serde_json::Value::Array(items) => {
            let mut changed = false;
            for v in items.iter_mut() {
                changed |= strip_quote_artifacts(v);
            }
            changed
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strips_wrapping_quotes_from_leaves() {
        let mut bundle = json!({
            "nav": { "home": "\"Home\"", "contact": "Contact" },
            "items": ["\"one\"", "two"]
        });

        assert!(strip_quote_artifacts(&mut bundle));
        assert_eq!(bundle["nav"]["home"], "Home");
        assert_eq!(bundle["nav"]["contact"], "Contact");
        assert_eq!(bundle["items"][0], "one");
        assert_eq!(bundle["items"][1], "two");
    }

    #[test]
    fn clean_bundle_reports_no_change() {
        let mut bundle = json!({ "nav": { "home": "Home" } });
        assert!(!strip_quote_artifacts(&mut bundle));
    }

    #[test]
    fn lone_quote_is_left_alone() {
        let mut bundle = json!("\"");
        assert!(!strip_quote_artifacts(&mut bundle));
        assert_eq!(bundle, "\"");
    }

    #[test]
    fn default_bundles_parse() {
        for lang in SUPPORTED_LANGUAGES {
            let raw = default_bundle(lang).unwrap();
            let parsed: serde_json::Value = serde_json::from_str(raw).unwrap();
            assert!(parsed.is_object(), "bundle for {} is not an object", lang);
        }
    }
}
