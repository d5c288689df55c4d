mod gif;

pub use gif::{Gif, GifTagRow, GifTranslation};
