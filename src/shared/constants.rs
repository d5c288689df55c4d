/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

/// Number of gifs returned by the featured listing
pub const FEATURED_GIF_LIMIT: i64 = 12;

/// Language codes the site ships UI bundles for
pub const SUPPORTED_LANGUAGES: [&str; 4] = ["en", "tr", "ru", "az"];

/// Language every content lookup ultimately falls back to
pub const DEFAULT_LANGUAGE: &str = "en";
