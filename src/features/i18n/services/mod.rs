mod i18n_service;

pub use i18n_service::I18nService;
