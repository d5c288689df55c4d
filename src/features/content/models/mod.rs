mod content_section;

pub use content_section::ContentSection;
