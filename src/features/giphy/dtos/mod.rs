mod giphy_dto;

pub use giphy_dto::GiphySearchDto;
