/// Derive a URL-safe slug from a display name.
///
/// Lowercases the input, collapses every run of non `a-z0-9` characters into a
/// single hyphen and trims leading/trailing hyphens. Returns an empty string
/// for empty input; callers decide whether that is acceptable.
pub fn create_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.chars() {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else {
            pending_separator = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(create_slug("Funny Cats"), "funny-cats");
        assert_eq!(create_slug("New Year 2024!"), "new-year-2024");
    }

    #[test]
    fn collapses_symbol_runs() {
        assert_eq!(create_slug("a -- b"), "a-b");
        assert_eq!(create_slug("hello...world"), "hello-world");
    }

    #[test]
    fn trims_leading_and_trailing_separators() {
        assert_eq!(create_slug("  cats  "), "cats");
        assert_eq!(create_slug("!!wow!!"), "wow");
    }

    #[test]
    fn empty_input_gives_empty_slug() {
        assert_eq!(create_slug(""), "");
        assert_eq!(create_slug("!!!"), "");
    }
}
