use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, SaltString};
use argon2::{Argon2, PasswordVerifier};
use sqlx::PgPool;
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{LoginRequestDto, LoginResponseDto};
use crate::features::auth::model::Admin;
use crate::features::auth::services::TokenService;

/// Service for admin login and account bootstrap.
pub struct AuthService {
    pool: PgPool,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(pool: PgPool, tokens: Arc<TokenService>) -> Self {
        Self { pool, tokens }
    }

    /// Verify credentials against the admins table and issue an access token.
    pub async fn login(&self, dto: LoginRequestDto) -> Result<LoginResponseDto> {
        let admin = sqlx::query_as::<_, Admin>(
            "SELECT id, email, password_hash, created_at FROM admins WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch admin: {:?}", e);
            AppError::Database(e)
        })?;

        // Same error for unknown email and bad password
        let admin = admin
            .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

        let parsed_hash = PasswordHash::new(&admin.password_hash)
            .map_err(|e| AppError::Internal(format!("Corrupt password hash: {}", e)))?;

        Argon2::default()
            .verify_password(dto.password.as_bytes(), &parsed_hash)
            .map_err(|_| AppError::Unauthorized("Invalid email or password".to_string()))?;

        let (access_token, expires_in) = self.tokens.issue_token(admin.id, &admin.email)?;

        tracing::info!("Admin logged in: {}", admin.email);

        Ok(LoginResponseDto {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
        })
    }

    /// Create the initial admin account if the table is empty and bootstrap
    /// credentials were configured. Idempotent across restarts.
    pub async fn ensure_bootstrap_admin(&self, email: &str, password: &str) -> Result<()> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM admins")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if count > 0 {
            return Ok(());
        }

        let password_hash = hash_password(password)?;

        sqlx::query("INSERT INTO admins (email, password_hash) VALUES ($1, $2)")
            .bind(email)
            .bind(&password_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create bootstrap admin: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!("Bootstrap admin account created: {}", email);
        Ok(())
    }
}

/// Hash a password with argon2id and a random salt.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashed_password_verifies() {
        let hash = hash_password("hunter2!").unwrap();
        let parsed = PasswordHash::new(&hash).unwrap();
        assert!(Argon2::default()
            .verify_password(b"hunter2!", &parsed)
            .is_ok());
        assert!(Argon2::default()
            .verify_password(b"wrong", &parsed)
            .is_err());
    }
}
