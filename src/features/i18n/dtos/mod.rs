mod i18n_dto;

pub use i18n_dto::{ReplaceUiTranslationsDto, UiTranslationsDto};
