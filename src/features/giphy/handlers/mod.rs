mod giphy_handler;

pub use giphy_handler::*;
