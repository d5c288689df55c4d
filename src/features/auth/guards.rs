//! Authorization guard for admin-only handlers.
//!
//! The site has a single privileged role: every row in the admins table is a
//! full administrator. The guard extracts the identity the auth middleware
//! placed in request extensions.

use crate::core::error::AppError;
use crate::features::auth::model::AuthenticatedAdmin;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Guard requiring an authenticated admin.
///
/// # Example
/// ```ignore
/// pub async fn handler(RequireAdmin(admin): RequireAdmin) { ... }
/// ```
pub struct RequireAdmin(pub AuthenticatedAdmin);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let admin = parts
            .extensions
            .get::<AuthenticatedAdmin>()
            .ok_or_else(|| AppError::Unauthorized("Admin not authenticated".to_string()))?;

        Ok(RequireAdmin(admin.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::with_admin_auth;
    use axum::{http::StatusCode, routing::get, Json, Router};
    use axum_test::TestServer;

    async fn whoami(RequireAdmin(admin): RequireAdmin) -> Json<String> {
        Json(admin.email)
    }

    #[tokio::test]
    async fn rejects_unauthenticated_requests() {
        let app = Router::new().route("/whoami", get(whoami));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/whoami").await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn passes_the_injected_admin_through() {
        let app = with_admin_auth(Router::new().route("/whoami", get(whoami)));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/whoami").await;
        response.assert_status_ok();
        assert_eq!(response.json::<String>(), "admin@gifhub.test");
    }
}
