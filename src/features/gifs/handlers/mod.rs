mod gif_handler;

pub use gif_handler::*;
