mod giphy_service;

pub use giphy_service::GiphyService;
