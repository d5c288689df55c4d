use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedAdmin;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    email: String,
    iat: u64,
    exp: u64,
}

/// Issues and validates HS256 access tokens for admin sessions.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl_secs: u64,
    leeway_secs: u64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            token_ttl_secs: config.token_ttl.as_secs(),
            leeway_secs: config.jwt_leeway.as_secs(),
        }
    }

    /// Create an access token for the admin. Returns the token and its
    /// lifetime in seconds.
    pub fn issue_token(&self, admin_id: Uuid, email: &str) -> Result<(String, u64)> {
        let now = chrono::Utc::now().timestamp() as u64;
        let claims = Claims {
            sub: admin_id.to_string(),
            email: email.to_string(),
            iat: now,
            exp: now + self.token_ttl_secs,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))?;

        Ok((token, self.token_ttl_secs))
    }

    /// Validate a bearer token and extract the admin identity.
    pub fn validate_token(&self, token: &str) -> Result<AuthenticatedAdmin> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = self.leeway_secs;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))?;

        let claims = token_data.claims;
        let id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::Unauthorized("Invalid token subject".to_string()))?;

        Ok(AuthenticatedAdmin {
            id,
            email: claims.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_service(ttl_secs: u64) -> TokenService {
        TokenService::new(&AuthConfig {
            jwt_secret: "0123456789abcdef0123456789abcdef".to_string(),
            token_ttl: Duration::from_secs(ttl_secs),
            jwt_leeway: Duration::from_secs(0),
            bootstrap_admin_email: None,
            bootstrap_admin_password: None,
        })
    }

    #[test]
    fn issued_token_round_trips() {
        let service = test_service(3600);
        let id = Uuid::new_v4();

        let (token, expires_in) = service.issue_token(id, "admin@gifhub.test").unwrap();
        assert_eq!(expires_in, 3600);

        let admin = service.validate_token(&token).unwrap();
        assert_eq!(admin.id, id);
        assert_eq!(admin.email, "admin@gifhub.test");
    }

    #[test]
    fn garbage_token_is_rejected() {
        let service = test_service(3600);
        assert!(service.validate_token("not-a-jwt").is_err());
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let service = test_service(3600);
        let other = TokenService::new(&AuthConfig {
            jwt_secret: "ffffffffffffffffffffffffffffffff".to_string(),
            token_ttl: Duration::from_secs(3600),
            jwt_leeway: Duration::from_secs(0),
            bootstrap_admin_email: None,
            bootstrap_admin_password: None,
        });

        let (token, _) = other.issue_token(Uuid::new_v4(), "x@y.z").unwrap();
        assert!(service.validate_token(&token).is_err());
    }
}
