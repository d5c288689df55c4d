use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::contact::models::ContactSubmission;

/// Request DTO for the public contact form
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateContactSubmissionDto {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, max = 5000, message = "Message must be 1-5000 characters"))]
    pub message: String,
}

/// Response DTO for a stored contact submission
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactSubmissionDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<ContactSubmission> for ContactSubmissionDto {
    fn from(s: ContactSubmission) -> Self {
        Self {
            id: s.id,
            name: s.name,
            email: s.email,
            message: s.message,
            created_at: s.created_at,
        }
    }
}
