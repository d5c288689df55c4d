pub mod constants;
pub mod localized;
pub mod slug;
pub mod test_helpers;
pub mod types;
pub mod validation;
