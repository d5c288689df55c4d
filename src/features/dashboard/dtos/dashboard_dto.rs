use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Content counts shown on the admin dashboard
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardStatsDto {
    pub total_gifs: i64,
    pub approved_gifs: i64,
    pub pending_gifs: i64,
    pub categories: i64,
    pub tags: i64,
    pub contact_submissions: i64,
}
