use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::contact::dtos::{ContactSubmissionDto, CreateContactSubmissionDto};
use crate::features::contact::services::ContactService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// Accept a contact form submission
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = CreateContactSubmissionDto,
    responses(
        (status = 200, description = "Submission stored", body = ApiResponse<ContactSubmissionDto>),
        (status = 400, description = "Validation failed")
    ),
    tag = "contact"
)]
pub async fn submit_contact(
    State(service): State<Arc<ContactService>>,
    AppJson(dto): AppJson<CreateContactSubmissionDto>,
) -> Result<Json<ApiResponse<ContactSubmissionDto>>> {
    dto.validate()?;
    let submission = service.submit(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(submission),
        Some("Message received, thank you".to_string()),
        None,
    )))
}

/// List contact submissions for the admin inbox
#[utoipa::path(
    get,
    path = "/api/admin/contact-submissions",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Paginated submissions", body = ApiResponse<Vec<ContactSubmissionDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "contact",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_contact_submissions(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<ContactService>>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<ContactSubmissionDto>>>> {
    let (submissions, total) = service
        .list(pagination.offset(), pagination.limit())
        .await?;
    Ok(Json(ApiResponse::success(
        Some(submissions),
        None,
        Some(Meta { total }),
    )))
}

/// Delete a handled contact submission
#[utoipa::path(
    delete,
    path = "/api/admin/contact-submissions/{id}",
    params(
        ("id" = Uuid, Path, description = "Submission id")
    ),
    responses(
        (status = 200, description = "Submission deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Submission not found")
    ),
    tag = "contact",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_contact_submission(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<ContactService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Submission deleted".to_string()),
        None,
    )))
}
