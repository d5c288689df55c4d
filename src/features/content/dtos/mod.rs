mod content_dto;

pub use content_dto::{ContentQuery, ContentSectionDto, UpsertContentSectionDto};
