//! Language fallback resolution for translatable entity fields.
//!
//! Categories and tags carry per-language name overrides, gifs carry title
//! overrides. Each translatable DTO implements [`Localized`] once, statically
//! typed to its own translation-row shape, and callers go through
//! [`resolve_localized`] for the display string.

/// A record with a base display value and optional per-language overrides.
pub trait Localized {
    /// The default-language value, always present.
    fn base_value(&self) -> &str;

    /// The raw override for `lang`, if a translation row exists. May be empty;
    /// the resolver treats an empty override as absent.
    fn translation_for(&self, lang: &str) -> Option<&str>;
}

/// Resolve the display string for `item` in `lang`.
///
/// Fallback chain: absent entity yields an empty string; a non-empty override
/// for the requested language wins; otherwise the base value. A missing
/// translation is the expected common case, not an error.
pub fn resolve_localized<T: Localized>(item: Option<&T>, lang: &str) -> String {
    let Some(item) = item else {
        return String::new();
    };

    match item.translation_for(lang) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => item.base_value().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Entity {
        name: String,
        translations: Vec<(String, String)>,
    }

    impl Localized for Entity {
        fn base_value(&self) -> &str {
            &self.name
        }

        fn translation_for(&self, lang: &str) -> Option<&str> {
            self.translations
                .iter()
                .find(|(code, _)| code == lang)
                .map(|(_, value)| value.as_str())
        }
    }

    fn rocket() -> Entity {
        Entity {
            name: "Rocket".to_string(),
            translations: vec![("tr".to_string(), "Roket".to_string())],
        }
    }

    #[test]
    fn returns_translation_for_matching_language() {
        assert_eq!(resolve_localized(Some(&rocket()), "tr"), "Roket");
    }

    #[test]
    fn falls_back_to_base_value_when_language_missing() {
        assert_eq!(resolve_localized(Some(&rocket()), "az"), "Rocket");
    }

    #[test]
    fn empty_override_is_treated_as_absent() {
        let entity = Entity {
            name: "Rocket".to_string(),
            translations: vec![("en".to_string(), String::new())],
        };
        assert_eq!(resolve_localized(Some(&entity), "en"), "Rocket");
    }

    #[test]
    fn absent_entity_resolves_to_empty_string() {
        assert_eq!(resolve_localized(None::<&Entity>, "en"), "");
    }
}
