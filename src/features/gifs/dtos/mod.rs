mod gif_dto;

pub use gif_dto::{
    GifResponseDto, GifTranslationDto, GifTranslationEntryDto, ListGifsQuery,
    ReplaceGifTranslationsDto, SaveGifDto, SubmitGifDto,
};
