mod contact_dto;

pub use contact_dto::{ContactSubmissionDto, CreateContactSubmissionDto};
