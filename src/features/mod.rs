pub mod auth;
pub mod categories;
pub mod contact;
pub mod content;
pub mod dashboard;
pub mod gifs;
pub mod giphy;
pub mod i18n;
pub mod settings;
pub mod sitemap;
pub mod tags;
