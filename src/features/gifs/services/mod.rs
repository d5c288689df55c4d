mod gif_service;

pub use gif_service::GifService;
