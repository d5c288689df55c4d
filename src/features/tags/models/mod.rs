mod tag;

pub use tag::*;
