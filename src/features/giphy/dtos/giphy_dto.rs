use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request DTO for the Giphy search proxy
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct GiphySearchDto {
    #[validate(length(min = 1, max = 100, message = "Query must be 1-100 characters"))]
    pub query: String,
}
