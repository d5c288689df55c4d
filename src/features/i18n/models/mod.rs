mod ui_translation;

pub use ui_translation::UiTranslation;
