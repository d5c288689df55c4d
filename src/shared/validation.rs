use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating URL slugs.
    /// Must be lowercase alphanumeric with hyphens
    /// - Valid: "funny-cats", "gif123", "new-year-2024"
    /// - Invalid: "-cats", "cats-", "funny--cats", "Cats", "funny_cats"
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();

    /// Regex for validating BCP-47-style short language codes ("en", "tr", "pt-br")
    pub static ref LANGUAGE_CODE_REGEX: Regex = Regex::new(r"^[a-z]{2}(?:-[a-z]{2})?$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_regex_valid() {
        assert!(SLUG_REGEX.is_match("funny-cats"));
        assert!(SLUG_REGEX.is_match("gif123"));
        assert!(SLUG_REGEX.is_match("new-year-2024"));
        assert!(SLUG_REGEX.is_match("a"));
    }

    #[test]
    fn test_slug_regex_invalid() {
        assert!(!SLUG_REGEX.is_match("-cats")); // starts with hyphen
        assert!(!SLUG_REGEX.is_match("cats-")); // ends with hyphen
        assert!(!SLUG_REGEX.is_match("funny--cats")); // double hyphen
        assert!(!SLUG_REGEX.is_match("Cats")); // uppercase
        assert!(!SLUG_REGEX.is_match("funny_cats")); // underscore
        assert!(!SLUG_REGEX.is_match("")); // empty
        assert!(!SLUG_REGEX.is_match("funny cats")); // space
    }

    #[test]
    fn test_language_code_regex() {
        assert!(LANGUAGE_CODE_REGEX.is_match("en"));
        assert!(LANGUAGE_CODE_REGEX.is_match("az"));
        assert!(LANGUAGE_CODE_REGEX.is_match("pt-br"));
        assert!(!LANGUAGE_CODE_REGEX.is_match("EN"));
        assert!(!LANGUAGE_CODE_REGEX.is_match("e"));
        assert!(!LANGUAGE_CODE_REGEX.is_match("eng"));
        assert!(!LANGUAGE_CODE_REGEX.is_match(""));
    }
}
