mod i18n_handler;

pub use i18n_handler::*;
